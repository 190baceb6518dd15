//! Typing and emission of governed structured data.
//!
//! The pipeline turns discovered untyped entries into generated typed
//! source modules:
//!
//! ```text
//! UntypedEntry ──> StructuredDataTyper            TypedDataEmitter
//!                  is_typeable ──> type_data ──>  should_emit? ──> write
//! ```
//!
//! Typing is decide-then-write: a typer only produces text plus destination
//! metadata; the emitter owns sequencing, the write gate (dry-run,
//! overwrite protection) and the write itself. Generated modules embed a
//! [`JsonRetyper`] record so a later pass can regenerate them from their
//! own output.

pub mod emitter;
pub mod module;
pub mod retyper;
pub mod stringify;
pub mod typer;

pub use emitter::{
    EmitError, EmitOptions, EmitSummary, TypedDataEmitter, emit_unless_dry_run,
    emit_with_overwrite_policy,
};
pub use module::{
    DEFAULT_LIBRARY_IMPORT, DEFAULT_OUTPUT_EXTENSION, JsonModuleOptions, JsonModuleTyper,
    RETYPER_EXPORT,
};
pub use retyper::{JsonRetyper, JsonRetyperOptions, RetypeError};
pub use stringify::{is_numeric, is_numeric_string, to_js_literal};
pub use typer::{StructuredDataTyper, TypeableEntry, TyperResult};

/// Raised when required typer options are absent or inconsistent; surfaces
/// before any file I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required option: {0}")]
    Missing(&'static str),
    #[error("instance name {0:?} collides with the retyper export")]
    ReservedInstanceName(String),
}
