//! Discovery and parsing of untyped governed data sources.
//!
//! A supplier walks candidate sources (a file glob or an in-memory buffer),
//! runs each through a chain of format guessers, and pushes recognized
//! entries into a caller-supplied sink:
//!
//! ```text
//! glob / buffer ──> FormatGuesser chain ──> UntypedEntry ──> SupplySink
//! ```
//!
//! Entries are created fresh per pass and never cached; the file system is
//! the only durable state consulted. One unreadable or malformed source is
//! reported through the sink and skipped — it does not abort the pass.

pub mod context;
pub mod guess;
pub mod merge;
pub mod supplier;

pub use context::{
    BufferOrigin, FileContext, FileProvenance, JsonEntry, Origin, UntypedEntry, force_extension,
};
pub use guess::{FormatGuesser, JsonGuesser};
pub use merge::{merge_all, merge_deep};
pub use supplier::{
    BufferSupplier, BufferSupplierOptions, FnSink, GlobSupplier, GlobSupplierOptions, SupplySink,
    UntypedDataSupplier,
};

use std::path::PathBuf;

/// Errors raised while discovering or parsing untyped data sources.
///
/// Only [`SupplyError::Pattern`] is fatal for a whole pass; the rest are
/// reported per entry via [`SupplySink::on_entry_error`].
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin} as JSON: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
