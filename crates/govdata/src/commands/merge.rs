//! `govdata merge` — deep-merge JSON documents and emit the result.

use crate::cli::MergeArgs;
use anyhow::{Context, Result};
use govdata_emit::{EmitOutcome, FileEmitter, Format, StdOutEmitter, Stringifier};
use govdata_supply::merge_deep;

pub fn run(args: MergeArgs) -> Result<()> {
    let mut merged = serde_json::Value::Null;
    for source in &args.sources {
        let text = std::fs::read_to_string(source)
            .with_context(|| format!("failed to read {}", source.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", source.display()))?;
        merge_deep(&mut merged, value);
    }

    let stringifier = Stringifier::new();
    match &args.dest {
        Some(dest) => {
            let outcome = FileEmitter::new(dest, stringifier).emit(Format::Json, &merged)?;
            if let EmitOutcome::Written(path) = outcome {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            StdOutEmitter::new(stringifier).emit(Format::Json, &merged)?;
        }
    }
    Ok(())
}
