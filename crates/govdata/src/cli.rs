//! Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Governed structured data controller.
#[derive(Parser)]
#[command(
    name = "govdata",
    version,
    about = "Keeps governed data files in sync with their generated typed modules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate typed modules from untyped JSON sources
    #[command(name = "type")]
    Type(TypeArgs),
    /// Re-emit a governed JSON document as JSON, TOML, or YAML
    Emit(EmitArgs),
    /// Print the retyper record embedded in a generated module
    Inspect(InspectArgs),
    /// Regenerate a module from its own embedded retyper record
    Retype(RetypeArgs),
    /// Deep-merge JSON documents and emit the result
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct TypeArgs {
    /// JSON file or glob ("*.json", "**/*.json")
    pub source: String,

    /// Import where the primary type definition is found
    #[arg(long = "type-import")]
    pub type_import: String,

    /// Type assigned to the generated instance
    #[arg(long = "type")]
    pub type_name: String,

    /// Name of the generated instance
    #[arg(long, default_value = "instance")]
    pub instance: String,

    /// Import where the governing runtime library is found
    #[arg(long = "library-import")]
    pub library_import: Option<String>,

    /// Extension of generated modules
    #[arg(long, default_value = ".auto.ts")]
    pub extension: String,

    /// Replace destinations that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Report would-be destinations without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Report every emitted destination
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct EmitArgs {
    /// Governed JSON document
    pub source: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value = "json")]
    pub format: EmitFormat,

    /// Destination file; omit for stdout. A bare ".json"/".toml"/".yaml"
    /// derives the name from the source
    #[arg(long, short)]
    pub dest: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmitFormat {
    Json,
    Toml,
    Yaml,
}

impl From<EmitFormat> for govdata_emit::Format {
    fn from(format: EmitFormat) -> Self {
        match format {
            EmitFormat::Json => govdata_emit::Format::Json,
            EmitFormat::Toml => govdata_emit::Format::Toml,
            EmitFormat::Yaml => govdata_emit::Format::Yaml,
        }
    }
}

#[derive(Args)]
pub struct InspectArgs {
    /// Generated module to inspect
    pub module: PathBuf,
}

#[derive(Args)]
pub struct RetypeArgs {
    /// Generated module to regenerate from its own record
    pub module: PathBuf,

    /// Replace destinations that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Report would-be destinations without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Report every emitted destination
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    /// JSON documents, merged in order (later sources win)
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// Destination file; omit for stdout
    #[arg(long, short)]
    pub dest: Option<PathBuf>,
}
