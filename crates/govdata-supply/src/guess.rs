//! Format guessing for discovered sources.

use crate::SupplyError;
use crate::context::{BufferOrigin, FileContext, JsonEntry, Origin, UntypedEntry};
use std::fs;

/// Infers a data format from file identity or raw bytes.
///
/// `Ok(None)` means "not mine, try the next guesser in the chain" — it is
/// not an error. `Err` means the input claimed this format but could not be
/// parsed; the supplier decides whether that kills the entry or the batch.
pub trait FormatGuesser {
    fn guess_file(&self, fc: &FileContext) -> Result<Option<UntypedEntry>, SupplyError>;

    fn guess_buffer(&self, bytes: &[u8], identity: &str)
    -> Result<Option<UntypedEntry>, SupplyError>;
}

/// Built-in JSON guesser: claims files whose last extension is `json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGuesser {
    force: bool,
}

impl JsonGuesser {
    pub fn new() -> Self {
        Self { force: false }
    }

    /// Skip the extension check and always attempt a JSON parse; used as
    /// the default fallback when no guesser claims a file.
    pub fn forced() -> Self {
        Self { force: true }
    }

    fn parse_file(&self, fc: &FileContext) -> Result<UntypedEntry, SupplyError> {
        let text = fs::read_to_string(&fc.abs_path).map_err(|source| SupplyError::Read {
            path: fc.abs_path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&text).map_err(|source| SupplyError::Parse {
            origin: fc.abs_path.display().to_string(),
            source,
        })?;
        Ok(UntypedEntry::Json(JsonEntry {
            value,
            origin: Origin::File(fc.clone()),
        }))
    }
}

impl FormatGuesser for JsonGuesser {
    fn guess_file(&self, fc: &FileContext) -> Result<Option<UntypedEntry>, SupplyError> {
        if !self.force && fc.last_extension() != Some("json") {
            return Ok(None);
        }
        self.parse_file(fc).map(Some)
    }

    fn guess_buffer(
        &self,
        bytes: &[u8],
        identity: &str,
    ) -> Result<Option<UntypedEntry>, SupplyError> {
        // No content sniffing yet; buffers are always treated as JSON.
        let value = serde_json::from_slice(bytes).map_err(|source| SupplyError::Parse {
            origin: identity.to_string(),
            source,
        })?;
        Ok(Some(UntypedEntry::Json(JsonEntry {
            value,
            origin: Origin::Buffer(BufferOrigin {
                identity: identity.to_string(),
            }),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_context(dir: &tempfile::TempDir, name: &str, content: &str) -> FileContext {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        FileContext::from_path(&path).unwrap()
    }

    #[test]
    fn claims_json_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        let json_file = file_context(&dir, "a.json", r#"{"k": 1}"#);
        let toml_file = file_context(&dir, "a.toml", "k = 1");

        let guesser = JsonGuesser::new();
        let entry = guesser.guess_file(&json_file).unwrap().unwrap();
        assert_eq!(entry.as_json().unwrap().value, json!({"k": 1}));
        assert!(guesser.guess_file(&toml_file).unwrap().is_none());
    }

    #[test]
    fn forced_mode_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let fc = file_context(&dir, "a.data", r#"[1, 2]"#);
        let entry = JsonGuesser::forced().guess_file(&fc).unwrap().unwrap();
        assert_eq!(entry.as_json().unwrap().value, json!([1, 2]));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let fc = file_context(&dir, "bad.json", "{not json");
        let err = JsonGuesser::new().guess_file(&fc).unwrap_err();
        assert!(matches!(err, SupplyError::Parse { .. }));
    }

    #[test]
    fn buffer_guess_carries_identity() {
        let entry = JsonGuesser::new()
            .guess_buffer(br#"{"k": true}"#, "stdin")
            .unwrap()
            .unwrap();
        assert_eq!(entry.origin().label(), "stdin");
        assert_eq!(entry.as_json().unwrap().value, json!({"k": true}));
    }
}
