//! Lenient JSON parser.
//!
//! Accepts standard JSON plus bare identifier object keys
//! (`{name: "src"}`). Keys are recognized by the `jsonc-parser` tokenizer, so
//! text inside string literals is never mistaken for a key.

use jsonc_parser::ParseOptions;
use serde_json::{Map, Value};
use tracing::{debug, trace};
use treeform_ast::{FileIcon, TreeNode};

use crate::{Format, HelpEntry, ParseError, Parser};

const EXAMPLE: &str = r#"[
  {
    "name": "project",
    "children": [
      {
        "name": "src",
        "children": [
          {
            "name": "components",
            "children": [
              { "name": "header.tsx", "isSelected": true },
              { "name": "footer.tsx" }
            ]
          },
          {
            "name": "pages",
            "isBold": true,
            "children": [
              { "name": "index.tsx" },
              { "name": "about.tsx", "tooltip": "About page" }
            ]
          }
        ]
      },
      { "name": "package.json", "isDisabled": true }
    ]
  }
]"#;

const HELP: &[HelpEntry] = &[
    HelpEntry::new("name", "string (required)"),
    HelpEntry::new(
        "icon",
        "string (optional, one of `folder`, `file`, `function`, `layout`)",
    ),
    HelpEntry::new("children", "array of nested items"),
    HelpEntry::new("isBold", "boolean - makes text bold"),
    HelpEntry::new("isSelected", "boolean - highlights the item"),
    HelpEntry::new("isDisabled", "boolean - grays out the item"),
    HelpEntry::new("tooltip", "string - adds a tooltip message"),
];

/// Lenient JSON parser implementation.
///
/// The top-level value must be an array of node objects. Fields outside the
/// node model, and model fields holding a value of the wrong type, are
/// dropped. A missing `name` is the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        Self
    }

    /// Tokenizer options: bare keys are the only extension over strict JSON.
    fn options() -> ParseOptions {
        ParseOptions {
            allow_comments: false,
            allow_loose_object_property_names: true,
            allow_trailing_commas: false,
            allow_missing_commas: false,
            allow_single_quoted_strings: false,
            allow_hexadecimal_numbers: false,
            allow_unary_plus_numbers: false,
            ..ParseOptions::default()
        }
    }

    fn parse_value(source: &str) -> Result<Value, String> {
        jsonc_parser::parse_to_serde_value(source, &Self::options())
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "input is empty".to_string())
    }
}

impl Parser for JsonParser {
    fn format(&self) -> Format {
        Format::Json
    }

    fn extensions(&self) -> &[&str] {
        &["json", "jsonc", "json5"]
    }

    fn placeholder(&self) -> &'static str {
        "Enter your project structure as JSON (or use the example)..."
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn help(&self) -> &[HelpEntry] {
        HELP
    }

    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        let value = Self::parse_value(source).map_err(|e| {
            debug!("JSON syntax error: {}", e);
            ParseError::invalid(Format::Json)
        })?;

        let Value::Array(items) = value else {
            debug!("JSON input must be an array");
            return Err(ParseError::invalid(Format::Json));
        };

        convert_forest(items).map_err(|e| {
            debug!("JSON does not describe a tree: {}", e);
            ParseError::invalid(Format::Json)
        })
    }
}

fn convert_forest(items: Vec<Value>) -> Result<Vec<TreeNode>, String> {
    items.into_iter().map(convert_node).collect()
}

/// Reads one node object. Only non-object items are errors.
fn convert_node(value: Value) -> Result<TreeNode, String> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => return Err(format!("expected a node object, found {other}")),
    };

    let mut node = TreeNode::default();
    if let Some(name) = take_string(&mut fields, "name") {
        node.name = name;
    }
    node.icon = take_string(&mut fields, "icon").and_then(|tag| {
        tag.parse::<FileIcon>()
            .inspect_err(|e| trace!("ignoring icon: {}", e))
            .ok()
    });
    node.is_bold = take_flag(&mut fields, "isBold");
    node.is_selected = take_flag(&mut fields, "isSelected");
    node.is_disabled = take_flag(&mut fields, "isDisabled");
    node.tooltip = take_string(&mut fields, "tooltip");

    match fields.remove("children") {
        Some(Value::Array(children)) => node.children = convert_forest(children)?,
        Some(other) => trace!("ignoring children: {}", other),
        None => {}
    }

    for key in fields.keys() {
        trace!("ignoring key {:?}", key);
    }
    Ok(node)
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(text) => Some(text),
        other => {
            trace!("ignoring {}: {}", key, other);
            None
        }
    }
}

fn take_flag(fields: &mut Map<String, Value>, key: &str) -> bool {
    match fields.remove(key) {
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            trace!("ignoring {}: {}", key, other);
            false
        }
        None => false,
    }
}
