//! The typer contract: capability check plus transform to generated text.

use govdata_supply::{Origin, UntypedEntry};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Format-specific view of an entry, produced by a successful capability
/// check.
#[derive(Debug, Clone, Copy)]
pub enum TypeableEntry<'a> {
    Json {
        value: &'a Value,
        origin: &'a Origin,
    },
}

/// Outcome of typing one entry.
///
/// Variants compose the text and file-destination capabilities; a failed
/// entry still carries human-readable text so heterogeneous batches can
/// continue and callers can inspect what went wrong. Consumers check
/// shape, never assume success.
#[derive(Debug, Clone, PartialEq)]
pub enum TyperResult {
    /// Generated source text plus the file it belongs in.
    Module { text: String, dest: PathBuf },
    /// The entry could not be typed; the text says why.
    Error { text: String },
}

impl TyperResult {
    pub fn text(&self) -> &str {
        match self {
            TyperResult::Module { text, .. } | TyperResult::Error { text } => text,
        }
    }

    pub fn destination(&self) -> Option<&Path> {
        match self {
            TyperResult::Module { dest, .. } => Some(dest),
            TyperResult::Error { .. } => None,
        }
    }

    /// Destination rebased onto `base` for display; the absolute path when
    /// the destination does not live under `base`.
    pub fn destination_relative_to(&self, base: &Path) -> Option<PathBuf> {
        self.destination().map(|dest| {
            dest.strip_prefix(base)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| dest.to_path_buf())
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TyperResult::Error { .. })
    }
}

/// Converts an untyped data unit into generated typed source text.
pub trait StructuredDataTyper {
    /// Capability check doubling as the upcast: success yields the
    /// format-specific view `type_data` consumes.
    fn is_typeable<'a>(&self, entry: &'a UntypedEntry) -> Option<TypeableEntry<'a>>;

    /// Transform a typeable entry. Bad shape yields
    /// [`TyperResult::Error`], never a panic.
    fn type_data(&self, ctx: TypeableEntry<'_>) -> TyperResult;
}
