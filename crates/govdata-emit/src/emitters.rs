//! Destination-aware emitters over a [`Stringifier`].

use crate::EmitError;
use crate::stringify::{Format, Stringifier};
use govdata_supply::force_extension;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// What an emitter did with the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Printed to stdout.
    Printed,
    /// Written to this file.
    Written(PathBuf),
}

/// Prints rendered values to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdOutEmitter {
    stringifier: Stringifier,
}

impl StdOutEmitter {
    pub fn new(stringifier: Stringifier) -> Self {
        Self { stringifier }
    }

    pub fn emit(&self, format: Format, value: &Value) -> Result<EmitOutcome, EmitError> {
        println!("{}", self.stringifier.stringify(format, value)?);
        Ok(EmitOutcome::Printed)
    }
}

/// Writes rendered values to a destination file, overwriting what is
/// there; callers gate whether the write should happen at all.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    dest: PathBuf,
    stringifier: Stringifier,
}

impl FileEmitter {
    pub fn new(dest: impl Into<PathBuf>, stringifier: Stringifier) -> Self {
        Self {
            dest: dest.into(),
            stringifier,
        }
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn emit(&self, format: Format, value: &Value) -> Result<EmitOutcome, EmitError> {
        let text = self.stringifier.stringify(format, value)?;
        fs::write(&self.dest, text).map_err(|source| EmitError::Write {
            path: self.dest.clone(),
            source,
        })?;
        Ok(EmitOutcome::Written(self.dest.clone()))
    }
}

/// Resolve an emit destination. `None` → stdout. A bare format extension
/// (`.json`, `.toml`, `.yaml`/`.yml`) derives the name from the source by
/// replacing its whole extension chain with the format's auto extension;
/// anything else is taken as the destination path.
pub fn derive_destination(dest: Option<&str>, format: Format, source: &Path) -> Option<PathBuf> {
    let dest = dest?;
    if format.matches_bare_extension(dest) {
        Some(force_extension(source, format.auto_extension()))
    } else {
        Some(PathBuf::from(dest))
    }
}
