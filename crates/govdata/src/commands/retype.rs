//! `govdata retype` — regenerate a module from its own embedded record.

use crate::cli::RetypeArgs;
use crate::commands::type_data;
use anyhow::{Context, Result, ensure};
use govdata_typer::{JsonModuleOptions, JsonModuleTyper, JsonRetyper};

pub fn run(args: RetypeArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.module)
        .with_context(|| format!("failed to read {}", args.module.display()))?;
    let retyper = JsonRetyper::from_generated_source(&text)
        .with_context(|| format!("{} is not a generated module", args.module.display()))?;

    let source = retyper.provenance.path;
    ensure!(
        source.is_file(),
        "recorded source {} no longer exists",
        source.display()
    );

    let options = JsonModuleOptions::from_retyper(&retyper.options)?;
    let typer = JsonModuleTyper::new(options)?;
    let pattern = source.to_string_lossy().into_owned();
    type_data::run_pipeline(typer, &pattern, args.overwrite, args.dry_run, args.verbose)
}
