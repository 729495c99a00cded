//! CLI configuration.
//!
//! Loaded from `.treeform.jsonc` or `.treeform.json`. Comments are allowed,
//! and the document is checked against the embedded schema before it is
//! deserialized.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use treeform_parser::{DuplicateSiblings, Format, MarkdownParser, ParserRegistry};

use crate::cli::OutputFormat;

const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Syntax(String),
    #[error("Config validation failed: {0}")]
    Validation(String),
    #[error("Invalid config: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// Options for the Markdown parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownConfig {
    #[serde(default)]
    pub duplicate_siblings: DuplicateSiblings,
}

/// Settings shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Format used when none is given and the extension is unknown.
    #[serde(default)]
    pub default_format: Option<Format>,

    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub compact: bool,

    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Config {
    /// Config file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".treeform.jsonc", ".treeform.json"];

    /// Finds the first config file present in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the explicit config, the discovered one, or the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(|| Self::discover(dir)) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses a JSONC document and validates it against the schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ConfigError::Syntax(e.to_string()))?
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(ConfigError::Validation(format!(
                "{} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value).map_err(ConfigError::Invalid)
    }

    /// Builds the parser registry these settings describe.
    pub fn registry(&self) -> ParserRegistry {
        let mut registry = ParserRegistry::builtin();
        registry.register(
            MarkdownParser::new().with_duplicate_siblings(self.markdown.duplicate_siblings),
        );
        registry
    }
}
