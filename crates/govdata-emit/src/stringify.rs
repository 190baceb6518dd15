//! Format selection and stringification of parsed governed values.

use crate::EmitError;
use serde_json::Value;
use std::fmt;

/// Re-emission output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Extension used for derived destinations.
    pub fn auto_extension(&self) -> &'static str {
        match self {
            Format::Json => ".auto.json",
            Format::Toml => ".auto.toml",
            Format::Yaml => ".auto.yaml",
        }
    }

    /// Bare destination spellings that request a derived file name.
    pub fn matches_bare_extension(&self, dest: &str) -> bool {
        match self {
            Format::Json => dest == ".json",
            Format::Toml => dest == ".toml",
            Format::Yaml => dest == ".yaml" || dest == ".yml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
        })
    }
}

/// Stringifies parsed governed values.
///
/// Governed content may itself be a bare string (pre-rendered text); that
/// passes through verbatim in every format instead of being re-quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stringifier;

impl Stringifier {
    pub fn new() -> Self {
        Self
    }

    pub fn stringify(&self, format: Format, value: &Value) -> Result<String, EmitError> {
        match format {
            Format::Json => self.json(value),
            Format::Toml => self.toml(value),
            Format::Yaml => self.yaml(value),
        }
    }

    /// Pretty JSON, two-space indent.
    pub fn json(&self, value: &Value) -> Result<String, EmitError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Ok(serde_json::to_string_pretty(other)?),
        }
    }

    /// TOML for tables; scalars stringify; arrays and null have no
    /// top-level TOML form.
    pub fn toml(&self, value: &Value) -> Result<String, EmitError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(_) | Value::Bool(_) => Ok(value.to_string()),
            Value::Object(_) => Ok(toml::to_string_pretty(value)?),
            Value::Array(_) => Err(EmitError::Unsupported {
                format: Format::Toml,
                kind: "a top-level array",
            }),
            Value::Null => Err(EmitError::Unsupported {
                format: Format::Toml,
                kind: "null",
            }),
        }
    }

    /// YAML for mappings and sequences; scalars stringify.
    pub fn yaml(&self, value: &Value) -> Result<String, EmitError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(_) | Value::Bool(_) => Ok(value.to_string()),
            Value::Object(_) | Value::Array(_) => Ok(serde_yaml::to_string(value)?),
            Value::Null => Err(EmitError::Unsupported {
                format: Format::Yaml,
                kind: "null",
            }),
        }
    }
}
