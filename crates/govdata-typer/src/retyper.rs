//! Re-typing provenance records embedded in generated output.

use crate::module::RETYPER_EXPORT;
use govdata_supply::FileProvenance;
use serde::{Deserialize, Serialize};

/// Everything needed to regenerate a typed module from its own output:
/// where the data came from plus the options that shaped the generation.
/// Serialized (camelCase, pretty JSON) into the generated module as a
/// second export, so a later pass needs no CLI flags to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRetyper {
    pub provenance: FileProvenance,
    pub options: JsonRetyperOptions,
}

/// Projection of the typer options that matter for regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRetyperOptions {
    pub type_import: String,
    pub type_name: String,
    pub instance_name: String,
    pub library_import: String,
    pub output_extension: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RetypeError {
    #[error("generated text has no embedded retyper record")]
    Missing,
    #[error("malformed retyper record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl JsonRetyper {
    /// Recover the record from generated module text.
    ///
    /// The record is the first JSON value after the retyper export marker;
    /// string values inside the data literal escape their newlines, so the
    /// line-anchored marker cannot collide with data content.
    pub fn from_generated_source(text: &str) -> Result<Self, RetypeError> {
        let marker = format!("\nexport const {RETYPER_EXPORT}");
        let at = text.find(&marker).ok_or(RetypeError::Missing)?;
        let rest = &text[at..];
        let brace = rest.find('{').ok_or(RetypeError::Missing)?;
        let mut de = serde_json::Deserializer::from_str(&rest[brace..]);
        Ok(Self::deserialize(&mut de)?)
    }
}
