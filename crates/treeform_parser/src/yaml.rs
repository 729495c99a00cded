//! YAML subset parser.
//!
//! Understands exactly the shape treeform needs: a sequence of `- key: value`
//! items whose `children` key holds a nested, more deeply indented sequence.
//! This is not a general YAML implementation. The parser is lenient: lines it
//! cannot interpret are skipped, and keys outside the node model are read
//! and discarded.

use tracing::{debug, trace};
use treeform_ast::TreeNode;

use crate::{Format, HelpEntry, ParseError, Parser};

const EXAMPLE: &str = "- name: project
  children:
    - name: src
      children:
        - name: components
          children:
            - name: header.tsx
              isSelected: true
            - name: footer.tsx
        - name: pages
          isBold: true
          children:
            - name: index.tsx
            - name: about.tsx
              tooltip: About page
    - name: package.json
      isDisabled: true";

const HELP: &[HelpEntry] = &[
    HelpEntry::new("name", "string (required)"),
    HelpEntry::new("children", "array of nested items"),
    HelpEntry::new("isBold", "boolean - makes text bold"),
    HelpEntry::new("isSelected", "boolean - highlights the item"),
    HelpEntry::new("isDisabled", "boolean - grays out the item"),
    HelpEntry::new("tooltip", "string - adds a tooltip message"),
    HelpEntry::new(
        "icon",
        "string - one of 'folder', 'file', 'function', 'layout'",
    ),
];

/// A non-blank source line.
struct Line<'a> {
    indent: usize,
    /// Text after the indentation.
    text: &'a str,
}

/// A scalar after type coercion.
#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    Null,
    Bool(bool),
    /// Numbers keep their source text.
    Number(String),
    Str(String),
}

impl Scalar {
    fn coerce(raw: &str) -> Self {
        match raw {
            "" | "null" => Scalar::Null,
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => {
                if let Some(unquoted) = unquote(raw) {
                    Scalar::Str(unquoted.to_string())
                } else if is_number(raw) {
                    Scalar::Number(raw.to_string())
                } else {
                    Scalar::Str(raw.to_string())
                }
            }
        }
    }

    /// Source text for string-typed keys; `None` for null.
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(value) => Some(value.to_string()),
            Scalar::Number(text) | Scalar::Str(text) => Some(text),
        }
    }
}

/// The value of one `key:` line.
enum Value {
    Scalar(Scalar),
    /// Items parsed from the deeper block under the key.
    Block(Vec<TreeNode>),
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        raw.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

fn is_number(raw: &str) -> bool {
    let starts_numeric = raw
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
    starts_numeric && raw.parse::<f64>().is_ok()
}

/// Splits `key: value` at the first colon.
fn split_pair(text: &str) -> Option<(&str, &str)> {
    text.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Applies a whitelisted key to `node`; anything else is ignored.
fn apply(node: &mut TreeNode, key: &str, value: Value) {
    match (key, value) {
        ("name", Value::Scalar(scalar)) => {
            if let Some(name) = scalar.into_text() {
                node.name = name;
            }
        }
        ("tooltip", Value::Scalar(scalar)) => {
            if let Some(tooltip) = scalar.into_text() {
                node.tooltip = Some(tooltip);
            }
        }
        ("children", Value::Block(children)) => node.children = children,
        ("isBold", Value::Scalar(Scalar::Bool(value))) => node.is_bold = value,
        ("isSelected", Value::Scalar(Scalar::Bool(value))) => node.is_selected = value,
        ("isDisabled", Value::Scalar(Scalar::Bool(value))) => node.is_disabled = value,
        ("icon", Value::Scalar(Scalar::Str(tag))) => match tag.parse() {
            Ok(icon) => node.icon = Some(icon),
            Err(e) => trace!("ignoring icon: {}", e),
        },
        (key, _) => trace!("ignoring key {:?}", key),
    }
}

/// YAML subset parser implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses lines from `start` while they are indented at least `min_indent`.
    ///
    /// Returns the items found and the index of the first unconsumed line.
    fn parse_block(lines: &[Line<'_>], start: usize, min_indent: usize) -> (Vec<TreeNode>, usize) {
        let mut items = Vec::new();
        let mut current: Option<TreeNode> = None;
        let mut i = start;

        while let Some(line) = lines.get(i) {
            if line.indent < min_indent {
                break;
            }

            let item_rest = match line.text {
                "-" => Some(""),
                text => text.strip_prefix("- "),
            };
            if let Some(rest) = item_rest {
                items.extend(current.take());
                let mut item = TreeNode::default();
                if let Some((key, raw)) = split_pair(rest) {
                    apply(&mut item, key, Value::Scalar(Scalar::coerce(raw)));
                }
                current = Some(item);
                i += 1;
            } else if let Some((key, raw)) = split_pair(line.text) {
                let value = match lines.get(i + 1) {
                    Some(next) if next.indent > line.indent => {
                        let (block, next_index) = Self::parse_block(lines, i + 1, next.indent);
                        i = next_index;
                        Value::Block(block)
                    }
                    _ => {
                        i += 1;
                        Value::Scalar(Scalar::coerce(raw))
                    }
                };
                match current.as_mut() {
                    Some(item) => apply(item, key, value),
                    None => trace!("ignoring {:?} outside of an item", key),
                }
            } else {
                trace!("skipping line: {:?}", line.text);
                i += 1;
            }
        }

        items.extend(current);
        (items, i)
    }
}

impl Parser for YamlParser {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn placeholder(&self) -> &'static str {
        "Enter your project structure as YAML (or use the example)..."
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn help(&self) -> &[HelpEntry] {
        HELP
    }

    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        let lines: Vec<Line<'_>> = source
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|line| {
                let text = line.trim_start();
                Line {
                    indent: line.chars().take_while(|c| c.is_whitespace()).count(),
                    text: text.trim_end(),
                }
            })
            .collect();

        let (items, _) = Self::parse_block(&lines, 0, 0);
        if items.is_empty() {
            debug!("YAML input has no `- ` items");
            return Err(ParseError::invalid(Format::Yaml));
        }
        Ok(items)
    }
}
