//! `govdata inspect` — show the retyper record of a generated module.

use crate::cli::InspectArgs;
use anyhow::{Context, Result};
use govdata_typer::JsonRetyper;

pub fn run(args: InspectArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.module)
        .with_context(|| format!("failed to read {}", args.module.display()))?;
    let retyper = JsonRetyper::from_generated_source(&text)
        .with_context(|| format!("{} is not a generated module", args.module.display()))?;
    println!("{}", serde_json::to_string_pretty(&retyper)?);
    Ok(())
}
