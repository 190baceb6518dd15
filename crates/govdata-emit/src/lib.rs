//! Re-emission of governed values as JSON, TOML, or YAML.
//!
//! The typing pipeline's sibling capability: take an already-parsed
//! governed value and write it back out in a serialization format, to
//! stdout or to a file whose name can be derived from the source the same
//! way generated modules derive theirs. Stringifiers and emitters are
//! constructed and injected explicitly — no process-wide default
//! instances.

pub mod emitters;
pub mod stringify;

pub use emitters::{EmitOutcome, FileEmitter, StdOutEmitter, derive_destination};
pub use stringify::{Format, Stringifier};

use std::path::PathBuf;

/// Errors raised while stringifying or writing a governed value.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("cannot render {kind} as {format}")]
    Unsupported { format: Format, kind: &'static str },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
