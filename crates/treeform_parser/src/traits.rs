//! Parser trait definition.

use serde::Serialize;
use treeform_ast::TreeNode;

use crate::{Format, ParseError};

/// One line of syntax help shown next to an input editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    /// The notation being described, e.g. `[selected]`.
    pub syntax: &'static str,
    /// What it does.
    pub description: &'static str,
}

impl HelpEntry {
    pub(crate) const fn new(syntax: &'static str, description: &'static str) -> Self {
        Self {
            syntax,
            description,
        }
    }
}

/// Trait for parsing source text into a tree.
///
/// Implementations are stateless: calling [`Parser::parse`] twice with the
/// same input yields equal trees.
///
/// # Example
///
/// ```rust
/// use treeform_parser::{JsonParser, Parser};
///
/// let parser = JsonParser::new();
/// let tree = parser.parse(r#"[{name: "project"}]"#).unwrap();
///
/// assert_eq!(parser.id(), "json");
/// assert_eq!(tree[0].name, "project");
/// ```
pub trait Parser {
    /// Returns the format this parser handles.
    fn format(&self) -> Format;

    /// Returns the format identifier used for registry lookup.
    fn id(&self) -> &'static str {
        self.format().id()
    }

    /// Returns the human readable format name.
    fn display_name(&self) -> &'static str {
        self.format().display_name()
    }

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Returns the placeholder shown in an empty editor.
    fn placeholder(&self) -> &'static str;

    /// Returns a complete example document.
    fn example(&self) -> &'static str;

    /// Returns the syntax help entries.
    fn help(&self) -> &[HelpEntry];

    /// Parses the source text into a forest of root nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFormat`] for this parser's format when the
    /// input cannot be interpreted.
    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
