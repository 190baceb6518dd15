//! Subcommand implementations.

mod emit;
mod inspect;
mod merge;
mod retype;
mod type_data;

use crate::cli::Command;
use anyhow::Result;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Type(args) => type_data::run(args),
        Command::Emit(args) => emit::run(args),
        Command::Inspect(args) => inspect::run(args),
        Command::Retype(args) => retype::run(args),
        Command::Merge(args) => merge::run(args),
    }
}
