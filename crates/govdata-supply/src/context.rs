//! Entry contexts: file identity, provenance, and the tagged data model.

use crate::SupplyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Origin facts for a file-backed source, captured from a stat at
/// discovery time. Serializable so it can ride along in retyping records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileProvenance {
    pub path: PathBuf,
    pub size: u64,
    pub accessed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
}

impl FileProvenance {
    pub fn from_path(path: &Path) -> Result<Self, SupplyError> {
        let meta = fs::metadata(path).map_err(|source| SupplyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            size: meta.len(),
            accessed: meta.accessed().ok().map(DateTime::from),
            modified: meta.modified().ok().map(DateTime::from),
            created: meta.created().ok().map(DateTime::from),
        })
    }
}

/// Identity of one discovered file.
///
/// The extension chain splits the base name on the FIRST dot, so
/// `report.auto.json` has stem `report` and extensions `["auto", "json"]`.
/// Multi-part suffixes are load-bearing for [`FileContext::force_extension`]:
/// replacing the whole chain is what makes `data.auto.json` and `data.json`
/// land on the same generated module.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContext {
    pub abs_path: PathBuf,
    pub file_name: String,
    /// Base name with the whole extension chain stripped.
    pub stem: String,
    /// Ordered extension segments after the first dot.
    pub extensions: Vec<String>,
    pub provenance: FileProvenance,
}

impl FileContext {
    pub fn from_path(path: &Path) -> Result<Self, SupplyError> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|source| SupplyError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            cwd.join(path)
        };
        let file_name = abs_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (stem, extensions) = split_extensions(&file_name);
        let provenance = FileProvenance::from_path(&abs_path)?;
        Ok(Self {
            abs_path,
            file_name,
            stem,
            extensions,
            provenance,
        })
    }

    pub fn last_extension(&self) -> Option<&str> {
        self.extensions.last().map(String::as_str)
    }

    /// New path with the whole extension chain replaced by `extn` (which
    /// carries its own leading dot). Applying the result to itself with the
    /// same `extn` is a fixed point.
    pub fn force_extension(&self, extn: &str) -> PathBuf {
        let parent = self.abs_path.parent().unwrap_or_else(|| Path::new(""));
        parent.join(format!("{}{}", self.stem, extn))
    }
}

/// Identity of an in-memory source; no file-system facts exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferOrigin {
    pub identity: String,
}

/// Where a discovered data unit came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    File(FileContext),
    Buffer(BufferOrigin),
}

impl Origin {
    /// Probe for file-backed identity.
    pub fn file(&self) -> Option<&FileContext> {
        match self {
            Origin::File(fc) => Some(fc),
            Origin::Buffer(_) => None,
        }
    }

    pub fn buffer(&self) -> Option<&BufferOrigin> {
        match self {
            Origin::Buffer(buf) => Some(buf),
            Origin::File(_) => None,
        }
    }

    /// Human-readable label for diagnostics.
    pub fn label(&self) -> String {
        match self {
            Origin::File(fc) => fc.abs_path.display().to_string(),
            Origin::Buffer(buf) => buf.identity.clone(),
        }
    }
}

/// A parsed JSON document plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEntry {
    pub value: serde_json::Value,
    pub origin: Origin,
}

/// One discovered unit of raw data, tagged by recognized format.
///
/// Consumers receive this supertype and probe for richer capabilities
/// (format, origin kind) by matching, never by assuming.
#[derive(Debug, Clone, PartialEq)]
pub enum UntypedEntry {
    Json(JsonEntry),
}

impl UntypedEntry {
    pub fn origin(&self) -> &Origin {
        match self {
            UntypedEntry::Json(json) => &json.origin,
        }
    }

    pub fn as_json(&self) -> Option<&JsonEntry> {
        match self {
            UntypedEntry::Json(json) => Some(json),
        }
    }
}

/// Split a base file name on the first dot: `("report", ["auto", "json"])`.
fn split_extensions(file_name: &str) -> (String, Vec<String>) {
    match file_name.find('.') {
        None => (file_name.to_string(), Vec::new()),
        Some(dot) => {
            let stem = file_name[..dot].to_string();
            let extensions = file_name[dot + 1..].split('.').map(str::to_string).collect();
            (stem, extensions)
        }
    }
}

/// Replace the whole extension chain of an arbitrary path with `extn`
/// (which carries its own leading dot): `data.auto.json` + `.toml` →
/// `data.toml`. The same rule [`FileContext::force_extension`] applies.
pub fn force_extension(path: &Path, extn: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, _) = split_extensions(&file_name);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(format!("{stem}{extn}")),
        _ => PathBuf::from(format!("{stem}{extn}")),
    }
}
