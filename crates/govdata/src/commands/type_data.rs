//! `govdata type` — glob over JSON sources and generate typed modules.

use crate::cli::TypeArgs;
use anyhow::Result;
use govdata_supply::GlobSupplier;
use govdata_typer::{
    EmitOptions, JsonModuleOptions, JsonModuleTyper, TypedDataEmitter, TyperResult,
    emit_with_overwrite_policy,
};

pub fn run(args: TypeArgs) -> Result<()> {
    let mut options = JsonModuleOptions::new(&args.type_import, &args.type_name)?;
    options.instance_name = args.instance.clone();
    if let Some(library) = &args.library_import {
        options.library_import = library.clone();
    }
    options.output_extension = args.extension.clone();

    let typer = JsonModuleTyper::new(options)?;
    run_pipeline(typer, &args.source, args.overwrite, args.dry_run, args.verbose)
}

/// Shared typing pass; `retype` reuses it with recovered options.
pub(crate) fn run_pipeline(
    typer: JsonModuleTyper,
    source: &str,
    overwrite: bool,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    // dry runs are implicitly verbose about what they would have done
    let verbose = verbose || dry_run;
    let cwd = std::env::current_dir()?;

    let gate = emit_with_overwrite_policy(overwrite, dry_run, verbose);
    let mut after = |result: &TyperResult| {
        if result.is_error() {
            tracing::warn!(text = result.text(), "entry not typed");
            return;
        }
        if verbose && !dry_run {
            if let Some(dest) = result.destination_relative_to(&cwd) {
                println!("./{}", dest.display());
            }
        }
    };

    let supplier = GlobSupplier::new(source);
    let emitter = TypedDataEmitter::new(vec![Box::new(typer)]);
    let summary = emitter.emit_typed_data(
        &supplier,
        EmitOptions {
            should_emit: Some(&gate),
            on_after_emit: Some(&mut after),
            on_no_sources: None,
        },
    )?;
    tracing::debug!(?summary, "typing pass complete");
    Ok(())
}
