//! `govdata emit` — re-emit a governed JSON document in another format.

use crate::cli::EmitArgs;
use anyhow::{Context, Result};
use govdata_emit::{EmitOutcome, FileEmitter, StdOutEmitter, Stringifier, derive_destination};

pub fn run(args: EmitArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", args.source.display()))?;

    let format = args.format.into();
    let stringifier = Stringifier::new();
    match derive_destination(args.dest.as_deref(), format, &args.source) {
        Some(dest) => {
            let outcome = FileEmitter::new(dest, stringifier).emit(format, &value)?;
            if let EmitOutcome::Written(path) = outcome {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            StdOutEmitter::new(stringifier).emit(format, &value)?;
        }
    }
    Ok(())
}
