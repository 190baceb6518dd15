//! Drives supplier → typers → storage, with policy-gated writes.

use crate::typer::{StructuredDataTyper, TyperResult};
use govdata_supply::{SupplyError, SupplySink, UntypedDataSupplier, UntypedEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while emitting typed data.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error(transparent)]
    Supply(#[from] SupplyError),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counters for one emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Entries the supplier produced.
    pub entries: usize,
    /// Results written to storage.
    pub written: usize,
    /// Results the `should_emit` gate refused.
    pub skipped: usize,
}

/// Hooks for one emission pass. Everything is optional; the defaults emit
/// unconditionally and route discovery diagnostics to the tracing stream.
#[derive(Default)]
pub struct EmitOptions<'a> {
    /// Gate deciding whether a result is written (dry-run, overwrite
    /// policy). Default: always emit.
    pub should_emit: Option<&'a dyn Fn(&TyperResult) -> bool>,
    /// Observes every gated-through result, after any write happened.
    pub on_after_emit: Option<&'a mut dyn FnMut(&TyperResult)>,
    /// Replaces the default no-sources diagnostic.
    pub on_no_sources: Option<&'a mut dyn FnMut(&str)>,
}

/// Sequences typers over supplied entries and writes eligible results.
pub struct TypedDataEmitter {
    typers: Vec<Box<dyn StructuredDataTyper>>,
}

impl TypedDataEmitter {
    pub fn new(typers: Vec<Box<dyn StructuredDataTyper>>) -> Self {
        Self { typers }
    }

    /// Run one pass. The write primitive overwrites unconditionally —
    /// overwrite *policy* lives in `options.should_emit`. A storage
    /// failure is fatal: remaining entries are not processed and earlier
    /// writes are not rolled back. One typer failing to produce text for
    /// one entry does not stop the batch.
    pub fn emit_typed_data(
        &self,
        supplier: &dyn UntypedDataSupplier,
        options: EmitOptions<'_>,
    ) -> Result<EmitSummary, EmitError> {
        let mut sink = EmitSink {
            typers: &self.typers,
            options,
            summary: EmitSummary::default(),
            fatal: None,
        };
        supplier.for_each(&mut sink)?;
        match sink.fatal {
            Some(err) => Err(err),
            None => Ok(sink.summary),
        }
    }
}

struct EmitSink<'a, 'b> {
    typers: &'a [Box<dyn StructuredDataTyper>],
    options: EmitOptions<'b>,
    summary: EmitSummary,
    fatal: Option<EmitError>,
}

impl SupplySink for EmitSink<'_, '_> {
    fn on_entry(&mut self, entry: UntypedEntry) {
        if self.fatal.is_some() {
            return;
        }
        self.summary.entries += 1;
        for typer in self.typers {
            let Some(ctx) = typer.is_typeable(&entry) else {
                continue;
            };
            let result = typer.type_data(ctx);
            if !self.options.should_emit.map_or(true, |gate| gate(&result)) {
                self.summary.skipped += 1;
                continue;
            }
            if let TyperResult::Module { text, dest } = &result {
                if let Err(source) = fs::write(dest, text) {
                    self.fatal = Some(EmitError::Write {
                        path: dest.clone(),
                        source,
                    });
                    return;
                }
                self.summary.written += 1;
            }
            if let Some(after) = self.options.on_after_emit.as_mut() {
                after(&result);
            }
        }
    }

    fn on_no_sources(&mut self, spec: &str) {
        match self.options.on_no_sources.as_mut() {
            Some(hook) => hook(spec),
            None => tracing::warn!(spec, "no sources found"),
        }
    }
}

/// Gate for dry runs: report the would-be destination, write nothing.
pub fn emit_unless_dry_run(dry_run: bool) -> impl Fn(&TyperResult) -> bool {
    move |result| {
        if dry_run {
            report_destination(result);
            return false;
        }
        true
    }
}

/// Gate combining overwrite protection with dry-run: an existing
/// destination is skipped with a warning unless overwriting was requested.
pub fn emit_with_overwrite_policy(
    overwrite: bool,
    dry_run: bool,
    verbose: bool,
) -> impl Fn(&TyperResult) -> bool {
    move |result| {
        if let Some(dest) = result.destination() {
            if dest.exists() {
                if !overwrite {
                    tracing::warn!(
                        dest = %display_relative(dest).display(),
                        "destination exists, overwrite not requested, not replacing"
                    );
                    return false;
                }
                if verbose {
                    tracing::info!(dest = %display_relative(dest).display(), "overwriting");
                }
            }
        }
        if dry_run {
            report_destination(result);
            return false;
        }
        true
    }
}

fn report_destination(result: &TyperResult) {
    if let Some(dest) = result.destination() {
        println!("{}", display_relative(dest).display());
    }
}

/// Rebase onto the current directory for readable reporting.
fn display_relative(dest: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => dest
            .strip_prefix(&cwd)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| dest.to_path_buf()),
        Err(_) => dest.to_path_buf(),
    }
}
