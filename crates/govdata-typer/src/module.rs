//! JSON-to-typed-module typer.
//!
//! Produces a self-describing source module from a governed JSON file:
//! a typed data instance in hand-written literal style, the retyper record
//! that makes regeneration possible without re-supplying options, and an
//! optional hook that lets the generated module invoke the governing
//! library's own CLI.

use crate::ConfigError;
use crate::retyper::{JsonRetyper, JsonRetyperOptions};
use crate::stringify::{DEFAULT_INDENT, to_js_literal};
use crate::typer::{StructuredDataTyper, TypeableEntry, TyperResult};
use govdata_supply::{FileContext, UntypedEntry};
use serde_json::Value;

/// Canonical import of the governing runtime library for generated modules.
pub const DEFAULT_LIBRARY_IMPORT: &str = "https://deno.land/x/govdata/mod.ts";

/// Extension the generated module lands in, replacing the source's whole
/// extension chain.
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".auto.ts";

/// Exported name of the embedded retyper record.
pub const RETYPER_EXPORT: &str = "retyper";

#[derive(Debug, Clone, PartialEq)]
pub struct JsonModuleOptions {
    /// Import where the primary type definition is found.
    pub type_import: String,
    /// Type assigned to the generated instance.
    pub type_name: String,
    pub instance_name: String,
    pub library_import: String,
    pub output_extension: String,
    pub indent: usize,
    /// Append the self-invoking CLI hook to generated modules.
    pub cli_hook: bool,
}

impl JsonModuleOptions {
    /// Build options with defaults, failing fast on missing required
    /// values — before any file I/O happens.
    pub fn new(
        type_import: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let options = Self {
            type_import: type_import.into(),
            type_name: type_name.into(),
            instance_name: "instance".to_string(),
            library_import: DEFAULT_LIBRARY_IMPORT.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            indent: DEFAULT_INDENT,
            cli_hook: true,
        };
        options.validate()?;
        Ok(options)
    }

    /// Rebuild options from a retyper record recovered from generated
    /// output.
    pub fn from_retyper(recovered: &JsonRetyperOptions) -> Result<Self, ConfigError> {
        let mut options = Self::new(&recovered.type_import, &recovered.type_name)?;
        options.instance_name = recovered.instance_name.clone();
        options.library_import = recovered.library_import.clone();
        options.output_extension = recovered.output_extension.clone();
        options.validate()?;
        Ok(options)
    }

    /// The projection embedded in generated output.
    pub fn retyper_options(&self) -> JsonRetyperOptions {
        JsonRetyperOptions {
            type_import: self.type_import.clone(),
            type_name: self.type_name.clone(),
            instance_name: self.instance_name.clone(),
            library_import: self.library_import.clone(),
            output_extension: self.output_extension.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.type_import.trim().is_empty() {
            return Err(ConfigError::Missing("type-import"));
        }
        if self.type_name.trim().is_empty() {
            return Err(ConfigError::Missing("type"));
        }
        if self.instance_name.trim().is_empty() {
            return Err(ConfigError::Missing("instance"));
        }
        if self.instance_name == RETYPER_EXPORT {
            return Err(ConfigError::ReservedInstanceName(self.instance_name.clone()));
        }
        Ok(())
    }
}

/// The typical JSON typer: file-backed JSON in, typed module text out.
#[derive(Debug, Clone)]
pub struct JsonModuleTyper {
    options: JsonModuleOptions,
}

impl JsonModuleTyper {
    pub fn new(options: JsonModuleOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &JsonModuleOptions {
        &self.options
    }

    fn render(&self, value: &Value, fc: &FileContext) -> String {
        let o = &self.options;
        let literal = to_js_literal(value, o.indent);
        let retyper = JsonRetyper {
            provenance: fc.provenance.clone(),
            options: o.retyper_options(),
        };
        let retyper_json =
            serde_json::to_string_pretty(&retyper).expect("retyper record serializes");

        let mut module = format!(
            "// Generated from {src}. DO NOT EDIT.\n\
             \n\
             import * as govn from \"{lib}\";\n\
             import type {{ {ty} }} from \"{ty_import}\";\n\
             \n\
             export const {inst}: {ty} = {literal};\n\
             \n\
             export default {inst};\n\
             \n\
             export const {retyper_export}: govn.JsonRetyper = {retyper_json};\n",
            src = fc.file_name,
            lib = o.library_import,
            ty = o.type_name,
            ty_import = o.type_import,
            inst = o.instance_name,
            retyper_export = RETYPER_EXPORT,
        );
        if o.cli_hook {
            module.push_str(&format!(
                "\nif (import.meta.main) {{\n  new govn.CliArgsEmitter(import.meta.url, {retyper_export}).emitJSON({inst});\n}}\n",
                retyper_export = RETYPER_EXPORT,
                inst = o.instance_name,
            ));
        }
        module
    }
}

impl StructuredDataTyper for JsonModuleTyper {
    fn is_typeable<'a>(&self, entry: &'a UntypedEntry) -> Option<TypeableEntry<'a>> {
        match entry {
            UntypedEntry::Json(json) => Some(TypeableEntry::Json {
                value: &json.value,
                origin: &json.origin,
            }),
        }
    }

    fn type_data(&self, ctx: TypeableEntry<'_>) -> TyperResult {
        let TypeableEntry::Json { value, origin } = ctx;
        let Some(fc) = origin.file() else {
            return TyperResult::Error {
                text: format!(
                    "cannot type {}: a file-backed origin is required to derive a destination",
                    origin.label()
                ),
            };
        };
        TyperResult::Module {
            text: self.render(value, fc),
            dest: fc.force_extension(&self.options.output_extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govdata_supply::{BufferOrigin, JsonEntry, Origin};
    use serde_json::json;

    fn file_entry(dir: &tempfile::TempDir, name: &str, content: &str) -> UntypedEntry {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        let fc = FileContext::from_path(&path).unwrap();
        UntypedEntry::Json(JsonEntry {
            value: serde_json::from_str(content).unwrap(),
            origin: Origin::File(fc),
        })
    }

    fn point_typer() -> JsonModuleTyper {
        let options = JsonModuleOptions::new("./point.ts", "Point").unwrap();
        JsonModuleTyper::new(options).unwrap()
    }

    #[test]
    fn missing_required_options_fail_fast() {
        assert_eq!(
            JsonModuleOptions::new("", "Point").unwrap_err(),
            ConfigError::Missing("type-import")
        );
        assert_eq!(
            JsonModuleOptions::new("./point.ts", " ").unwrap_err(),
            ConfigError::Missing("type")
        );
    }

    #[test]
    fn retyper_instance_name_is_reserved() {
        let mut options = JsonModuleOptions::new("./point.ts", "Point").unwrap();
        options.instance_name = RETYPER_EXPORT.to_string();
        assert!(matches!(
            JsonModuleTyper::new(options).unwrap_err(),
            ConfigError::ReservedInstanceName(_)
        ));
    }

    #[test]
    fn types_point_json() {
        let dir = tempfile::tempdir().unwrap();
        let entry = file_entry(&dir, "point.json", r#"{"x": "3", "y": "abc"}"#);
        let typer = point_typer();
        let ctx = typer.is_typeable(&entry).unwrap();
        let result = typer.type_data(ctx);

        assert_eq!(
            result.destination(),
            Some(dir.path().join("point.auto.ts").as_path())
        );
        let text = result.text();
        assert!(text.starts_with("// Generated from point.json. DO NOT EDIT.\n"));
        assert!(text.contains("import * as govn from \"https://deno.land/x/govdata/mod.ts\";"));
        assert!(text.contains("import type { Point } from \"./point.ts\";"));
        assert!(text.contains("export const instance: Point = {\n  x: 3,\n  y: \"abc\"\n};"));
        assert!(text.contains("export default instance;"));
        assert!(text.contains("export const retyper: govn.JsonRetyper = {"));
        assert!(text.contains(
            "if (import.meta.main) {\n  new govn.CliArgsEmitter(import.meta.url, retyper).emitJSON(instance);\n}"
        ));
    }

    #[test]
    fn embedded_retyper_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let entry = file_entry(&dir, "point.json", r#"{"x": 1}"#);
        let typer = point_typer();
        let ctx = typer.is_typeable(&entry).unwrap();
        let result = typer.type_data(ctx);

        let recovered = JsonRetyper::from_generated_source(result.text()).unwrap();
        assert_eq!(recovered.options, typer.options().retyper_options());
        assert!(recovered.provenance.path.ends_with("point.json"));
        assert_eq!(recovered.provenance.size, 8);

        let rebuilt = JsonModuleOptions::from_retyper(&recovered.options).unwrap();
        assert_eq!(&rebuilt, typer.options());
    }

    #[test]
    fn buffer_origin_yields_error_text() {
        let entry = UntypedEntry::Json(JsonEntry {
            value: json!({"x": 1}),
            origin: Origin::Buffer(BufferOrigin {
                identity: "stdin".to_string(),
            }),
        });
        let typer = point_typer();
        let ctx = typer.is_typeable(&entry).unwrap();
        let result = typer.type_data(ctx);
        assert!(result.is_error());
        assert!(result.text().contains("stdin"));
        assert_eq!(result.destination(), None);
    }

    #[test]
    fn multi_part_source_extension_collapses() {
        let dir = tempfile::tempdir().unwrap();
        let entry = file_entry(&dir, "point.auto.json", r#"{"x": 1}"#);
        let typer = point_typer();
        let ctx = typer.is_typeable(&entry).unwrap();
        let result = typer.type_data(ctx);
        assert_eq!(
            result.destination(),
            Some(dir.path().join("point.auto.ts").as_path())
        );
    }
}
