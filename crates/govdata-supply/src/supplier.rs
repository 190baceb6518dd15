//! Push-style suppliers over file globs and in-memory buffers.

use crate::SupplyError;
use crate::context::{FileContext, UntypedEntry};
use crate::guess::{FormatGuesser, JsonGuesser};
use std::path::Path;

/// Receives discovery results.
///
/// Diagnostic hooks default to the tracing stream so a sink only has to
/// care about entries. "Matched nothing" is always observable — it is a
/// distinct signal, not a silent return.
pub trait SupplySink {
    fn on_entry(&mut self, entry: UntypedEntry);

    /// The source spec matched nothing; fired exactly once per pass.
    fn on_no_sources(&mut self, spec: &str) {
        tracing::warn!(spec, "no sources found");
    }

    /// A buffer supplier had no bytes to offer.
    fn on_no_content(&mut self, identity: &str) {
        tracing::warn!(identity, "no content available");
    }

    /// One entry failed to read or parse; discovery continues without it.
    fn on_entry_error(&mut self, origin: &Path, error: &SupplyError) {
        tracing::warn!(origin = %origin.display(), %error, "skipping entry");
    }
}

/// Sink adapter over a closure, for callers that only want entries.
pub struct FnSink<F: FnMut(UntypedEntry)>(pub F);

impl<F: FnMut(UntypedEntry)> SupplySink for FnSink<F> {
    fn on_entry(&mut self, entry: UntypedEntry) {
        (self.0)(entry);
    }
}

/// Supplies untyped data units to a sink, once each, in discovery order.
pub trait UntypedDataSupplier {
    fn for_each(&self, sink: &mut dyn SupplySink) -> Result<(), SupplyError>;
}

pub struct GlobSupplierOptions {
    pub guessers: Vec<Box<dyn FormatGuesser>>,
    /// Runs when no guesser claims a file. Default: force-parse as JSON.
    pub fallback: Option<Box<dyn FormatGuesser>>,
}

impl Default for GlobSupplierOptions {
    fn default() -> Self {
        Self {
            guessers: vec![Box::new(JsonGuesser::new())],
            fallback: Some(Box::new(JsonGuesser::forced())),
        }
    }
}

/// Discovers files matching a glob pattern (`*.json`, `**/*.json`).
pub struct GlobSupplier {
    pattern: String,
    options: GlobSupplierOptions,
}

impl GlobSupplier {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            options: GlobSupplierOptions::default(),
        }
    }

    pub fn with_options(pattern: impl Into<String>, options: GlobSupplierOptions) -> Self {
        Self {
            pattern: pattern.into(),
            options,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl UntypedDataSupplier for GlobSupplier {
    fn for_each(&self, sink: &mut dyn SupplySink) -> Result<(), SupplyError> {
        let paths = glob::glob(&self.pattern).map_err(|source| SupplyError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;

        let mut matched = 0usize;
        for item in paths {
            let path = match item {
                Ok(path) => path,
                Err(err) => {
                    let path = err.path().to_path_buf();
                    let error = SupplyError::Read {
                        path: path.clone(),
                        source: err.into_error(),
                    };
                    sink.on_entry_error(&path, &error);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            matched += 1;

            let fc = match FileContext::from_path(&path) {
                Ok(fc) => fc,
                Err(err) => {
                    sink.on_entry_error(&path, &err);
                    continue;
                }
            };

            let mut claimed = false;
            for guesser in &self.options.guessers {
                match guesser.guess_file(&fc) {
                    Ok(Some(entry)) => {
                        claimed = true;
                        sink.on_entry(entry);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        // Claimed but unparseable: report and skip the
                        // fallback, which would only re-parse and re-fail.
                        claimed = true;
                        sink.on_entry_error(&path, &err);
                    }
                }
            }
            if !claimed {
                if let Some(fallback) = &self.options.fallback {
                    match fallback.guess_file(&fc) {
                        Ok(Some(entry)) => sink.on_entry(entry),
                        Ok(None) => {
                            tracing::warn!(path = %path.display(), "no guesser could handle entry");
                        }
                        Err(err) => sink.on_entry_error(&path, &err),
                    }
                }
            }
        }

        if matched == 0 {
            sink.on_no_sources(&self.pattern);
        }
        Ok(())
    }
}

pub struct BufferSupplierOptions {
    pub identity: String,
    pub guessers: Vec<Box<dyn FormatGuesser>>,
    pub fallback: Option<Box<dyn FormatGuesser>>,
}

impl Default for BufferSupplierOptions {
    fn default() -> Self {
        Self {
            identity: "buffer".to_string(),
            guessers: vec![Box::new(JsonGuesser::new())],
            fallback: Some(Box::new(JsonGuesser::forced())),
        }
    }
}

/// Supplies a single in-memory byte buffer under a caller-chosen identity.
pub struct BufferSupplier {
    buffer: Vec<u8>,
    options: BufferSupplierOptions,
}

impl BufferSupplier {
    pub fn new(buffer: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: buffer.into(),
            options: BufferSupplierOptions::default(),
        }
    }

    pub fn with_options(buffer: impl Into<Vec<u8>>, options: BufferSupplierOptions) -> Self {
        Self {
            buffer: buffer.into(),
            options,
        }
    }

    pub fn identity(&self) -> &str {
        &self.options.identity
    }
}

impl UntypedDataSupplier for BufferSupplier {
    fn for_each(&self, sink: &mut dyn SupplySink) -> Result<(), SupplyError> {
        if self.buffer.is_empty() {
            sink.on_no_content(&self.options.identity);
            return Ok(());
        }

        let origin = Path::new(&self.options.identity);
        let mut claimed = false;
        for guesser in &self.options.guessers {
            match guesser.guess_buffer(&self.buffer, &self.options.identity) {
                Ok(Some(entry)) => {
                    claimed = true;
                    sink.on_entry(entry);
                }
                Ok(None) => {}
                Err(err) => {
                    claimed = true;
                    sink.on_entry_error(origin, &err);
                }
            }
        }
        if !claimed {
            if let Some(fallback) = &self.options.fallback {
                match fallback.guess_buffer(&self.buffer, &self.options.identity) {
                    Ok(Some(entry)) => sink.on_entry(entry),
                    Ok(None) => {
                        tracing::warn!(identity = %self.options.identity, "no guesser could handle buffer");
                    }
                    Err(err) => sink.on_entry_error(origin, &err),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingSink {
        entries: Vec<UntypedEntry>,
        no_sources: Vec<String>,
        no_content: Vec<String>,
        errors: Vec<PathBuf>,
    }

    impl SupplySink for RecordingSink {
        fn on_entry(&mut self, entry: UntypedEntry) {
            self.entries.push(entry);
        }

        fn on_no_sources(&mut self, spec: &str) {
            self.no_sources.push(spec.to_string());
        }

        fn on_no_content(&mut self, identity: &str) {
            self.no_content.push(identity.to_string());
        }

        fn on_entry_error(&mut self, origin: &Path, _error: &SupplyError) {
            self.errors.push(origin.to_path_buf());
        }
    }

    #[test]
    fn glob_visits_every_match_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"n": 2}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"n": 1}"#).unwrap();
        std::fs::write(dir.path().join("skip.txt"), "not data").unwrap();

        let pattern = dir.path().join("*.json").to_string_lossy().into_owned();
        let mut sink = RecordingSink::default();
        GlobSupplier::new(pattern).for_each(&mut sink).unwrap();

        let values: Vec<_> = sink
            .entries
            .iter()
            .map(|e| e.as_json().unwrap().value.clone())
            .collect();
        assert_eq!(values, vec![json!({"n": 1}), json!({"n": 2})]);
        assert!(sink.no_sources.is_empty());
    }

    #[test]
    fn zero_matches_fires_no_sources_once() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.json").to_string_lossy().into_owned();
        let mut sink = RecordingSink::default();
        GlobSupplier::new(pattern.clone()).for_each(&mut sink).unwrap();

        assert!(sink.entries.is_empty());
        assert_eq!(sink.no_sources, vec![pattern]);
    }

    #[test]
    fn malformed_entry_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{oops").unwrap();
        std::fs::write(dir.path().join("good.json"), r#"{"ok": true}"#).unwrap();

        let pattern = dir.path().join("*.json").to_string_lossy().into_owned();
        let mut sink = RecordingSink::default();
        GlobSupplier::new(pattern).for_each(&mut sink).unwrap();

        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].ends_with("bad.json"));
        // files existed, so the pass did not count as empty
        assert!(sink.no_sources.is_empty());
    }

    #[test]
    fn fallback_forces_unrecognized_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.blob"), r#"{"forced": 1}"#).unwrap();

        let pattern = dir.path().join("*.blob").to_string_lossy().into_owned();
        let mut sink = RecordingSink::default();
        GlobSupplier::new(pattern).for_each(&mut sink).unwrap();

        assert_eq!(sink.entries.len(), 1);
        assert_eq!(
            sink.entries[0].as_json().unwrap().value,
            json!({"forced": 1})
        );
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let mut sink = RecordingSink::default();
        let err = GlobSupplier::new("[").for_each(&mut sink).unwrap_err();
        assert!(matches!(err, SupplyError::Pattern { .. }));
        assert!(sink.entries.is_empty());
        assert!(sink.no_sources.is_empty());
    }

    #[test]
    fn fn_sink_adapts_closures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        let pattern = dir.path().join("*.json").to_string_lossy().into_owned();

        let mut count = 0usize;
        GlobSupplier::new(pattern)
            .for_each(&mut FnSink(|_entry| count += 1))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn buffer_supplies_one_entry() {
        let mut sink = RecordingSink::default();
        BufferSupplier::new(br#"{"k": "v"}"#.to_vec())
            .for_each(&mut sink)
            .unwrap();
        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.entries[0].origin().label(), "buffer");
    }

    #[test]
    fn empty_buffer_reports_no_content() {
        let mut sink = RecordingSink::default();
        BufferSupplier::new(Vec::new()).for_each(&mut sink).unwrap();
        assert!(sink.entries.is_empty());
        assert_eq!(sink.no_content, vec!["buffer".to_string()]);
    }
}
