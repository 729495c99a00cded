//! Format identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The closed set of input notations treeform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Permissive JSON: an array of node objects, bare keys allowed.
    Json,
    /// Nested `<ul>`/`<li>` markup.
    Html,
    /// Indented `*`/`-`/`+` list items.
    Markdown,
    /// Indented `- key: value` items.
    Yaml,
}

impl Format {
    /// All formats, in built-in registration order.
    pub const ALL: [Format; 4] = [Format::Json, Format::Html, Format::Markdown, Format::Yaml];

    /// Returns the format identifier used for lookup.
    pub const fn id(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Yaml => "yaml",
        }
    }

    /// Returns the human readable name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Html => "HTML",
            Format::Markdown => "Markdown",
            Format::Yaml => "YAML",
        }
    }

    /// Returns the fixed message reported when input fails to parse.
    pub const fn error_message(&self) -> &'static str {
        match self {
            Format::Json => "Invalid JSON format",
            Format::Html => "Invalid HTML format",
            Format::Markdown => "Invalid Markdown format",
            Format::Yaml => "Invalid YAML format",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.id() == s)
            .ok_or_else(|| ParseError::not_found(s))
    }
}
