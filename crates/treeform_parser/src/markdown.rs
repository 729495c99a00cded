//! Markdown list parser.
//!
//! Builds the tree from `*`, `-` or `+` list items, nesting purely by
//! comparing each line's indentation with the lines above it. Indentation
//! does not have to be consistent: any deeper line is a child, any line at
//! the same or a shallower depth closes the open items down to its level.
//!
//! Inline attributes are read from the item text in this order:
//!
//! 1. `**name**` or `__name__` at the start marks the item bold
//! 2. `[selected]` marks it selected
//! 3. `[disabled]` marks it disabled
//! 4. a trailing `(text)` becomes the tooltip

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use treeform_ast::TreeNode;

use crate::{Format, HelpEntry, ParseError, Parser};

const EXAMPLE: &str = "* project
  * src
    * components
      * header.tsx [selected]
      * footer.tsx
    * **pages**
      * index.tsx
      * about.tsx (About page)
  * package.json [disabled]";

const HELP: &[HelpEntry] = &[
    HelpEntry::new("* or - or +", "Create list items"),
    HelpEntry::new("Indentation", "Creates nested hierarchy"),
    HelpEntry::new("**bold text**", "Makes text bold"),
    HelpEntry::new("[selected]", "Highlights the item (append to line)"),
    HelpEntry::new("[disabled]", "Grays out the item (append to line)"),
    HelpEntry::new("(tooltip text)", "Adds tooltip (append to line)"),
];

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*+-]\s+(.*)$").expect("valid list item pattern"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\*\*([^*_]+)\*\*|__([^*_]+)__)(.*)$").expect("valid bold pattern")
});
static SELECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[selected\]\s*").expect("valid selected pattern"));
static DISABLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[disabled\]\s*").expect("valid disabled pattern"));
static TOOLTIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^)]+)\)\s*$").expect("valid tooltip pattern"));

/// What to do with an item whose name equals one of its earlier siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateSiblings {
    /// Skip the item. Its deeper lines attach to the enclosing item instead.
    #[default]
    Drop,
    /// Reuse the earlier sibling, so the item's children are added to it.
    Merge,
    /// Keep both items.
    Keep,
}

impl DuplicateSiblings {
    /// Returns the policy name as written in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DuplicateSiblings::Drop => "drop",
            DuplicateSiblings::Merge => "merge",
            DuplicateSiblings::Keep => "keep",
        }
    }
}

impl FromStr for DuplicateSiblings {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(DuplicateSiblings::Drop),
            "merge" => Ok(DuplicateSiblings::Merge),
            "keep" => Ok(DuplicateSiblings::Keep),
            other => Err(format!("unknown duplicate sibling policy: {other}")),
        }
    }
}

/// Markdown list parser implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser {
    duplicates: DuplicateSiblings,
}

/// A node under construction; children are indices into the entry list.
struct Entry {
    node: TreeNode,
    children: Vec<usize>,
}

/// An open item that deeper lines attach to. `parent` is `None` for the root.
struct Frame {
    indent: usize,
    parent: Option<usize>,
}

impl MarkdownParser {
    /// Creates a new Markdown parser that drops duplicate siblings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duplicate sibling policy.
    #[must_use]
    pub fn with_duplicate_siblings(mut self, policy: DuplicateSiblings) -> Self {
        self.duplicates = policy;
        self
    }

    /// Returns the duplicate sibling policy.
    pub fn duplicate_siblings(&self) -> DuplicateSiblings {
        self.duplicates
    }

    /// Builds the tree without rejecting empty results.
    ///
    /// Lines that are not list items are skipped.
    pub fn parse_items(&self, source: &str) -> Vec<TreeNode> {
        let mut entries: Vec<Entry> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut stack = vec![Frame {
            indent: 0,
            parent: None,
        }];

        for line in source.lines().filter(|line| !line.trim().is_empty()) {
            let trimmed = line.trim_start();
            let indent = line.chars().take_while(|c| c.is_whitespace()).count();

            let Some(captures) = LIST_ITEM.captures(trimmed) else {
                trace!("skipping non-list line: {:?}", line);
                continue;
            };
            let node = parse_item(captures.get(1).map_or("", |m| m.as_str()));

            while stack.len() > 1 && stack.last().is_some_and(|f| f.indent >= indent) {
                stack.pop();
            }
            let parent = stack.last().and_then(|f| f.parent);

            let siblings = match parent {
                Some(index) => &entries[index].children,
                None => &roots,
            };
            let duplicate = siblings
                .iter()
                .copied()
                .find(|&i| entries[i].node.name == node.name);

            let target = match (duplicate, self.duplicates) {
                (Some(_), DuplicateSiblings::Drop) => {
                    debug!("dropping duplicate sibling {:?}", node.name);
                    continue;
                }
                (Some(existing), DuplicateSiblings::Merge) => existing,
                _ => {
                    let index = entries.len();
                    entries.push(Entry {
                        node,
                        children: Vec::new(),
                    });
                    match parent {
                        Some(p) => entries[p].children.push(index),
                        None => roots.push(index),
                    }
                    index
                }
            };

            stack.push(Frame {
                indent,
                parent: Some(target),
            });
        }

        assemble(entries, &roots)
    }
}

/// Turns the flat entry list into owned trees.
///
/// Children are always created after their parent, so building from the
/// last entry backwards finishes every child before its parent needs it.
fn assemble(entries: Vec<Entry>, roots: &[usize]) -> Vec<TreeNode> {
    let mut built: Vec<Option<TreeNode>> = Vec::with_capacity(entries.len());
    built.resize_with(entries.len(), || None);

    for (index, entry) in entries.into_iter().enumerate().rev() {
        let mut node = entry.node;
        node.children = entry
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[index] = Some(node);
    }

    roots
        .iter()
        .filter_map(|&root| built[root].take())
        .collect()
}

/// Reads the inline attributes of one list item's text.
fn parse_item(content: &str) -> TreeNode {
    let mut node = TreeNode::default();

    let mut name = match BOLD.captures(content) {
        Some(captures) => {
            node.is_bold = true;
            let wrapped = captures.get(1).or_else(|| captures.get(2));
            let rest = captures.get(3).map_or("", |m| m.as_str());
            format!("{}{}", wrapped.map_or("", |m| m.as_str()), rest)
        }
        None => content.to_string(),
    };

    if SELECTED.is_match(&name) {
        node.is_selected = true;
        name = SELECTED.replace_all(&name, " ").into_owned();
    }

    if DISABLED.is_match(&name) {
        node.is_disabled = true;
        name = DISABLED.replace_all(&name, " ").into_owned();
    }

    if let Some(captures) = TOOLTIP.captures(&name) {
        node.tooltip = captures.get(1).map(|m| m.as_str().to_string());
        let start = captures.get(0).map_or(name.len(), |m| m.start());
        name.truncate(start);
    }

    node.name = name.trim().to_string();
    node
}

impl Parser for MarkdownParser {
    fn format(&self) -> Format {
        Format::Markdown
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn placeholder(&self) -> &'static str {
        "Enter your project structure as Markdown list (or use the example)..."
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn help(&self) -> &[HelpEntry] {
        HELP
    }

    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        let items = self.parse_items(source);
        if items.is_empty() {
            debug!("Markdown input has no list items; use * or - or + for list items");
            return Err(ParseError::invalid(Format::Markdown));
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(source: &str) -> Result<Vec<TreeNode>, ParseError> {
        MarkdownParser::new().parse(source)
    }

    fn project_src_index() -> Vec<TreeNode> {
        vec![TreeNode::new("project").with_children(vec![
            TreeNode::new("src").with_children(vec![TreeNode::new("index.js")]),
        ])]
    }

    #[rstest]
    #[case::asterisks("* project\n  * src\n    * index.js")]
    #[case::mixed_markers("- project\n  + src\n    - index.js")]
    #[case::tabs("* project\n\t* src\n\t\t* index.js")]
    #[case::uneven_indent("* project\n   * src\n        * index.js")]
    #[case::blank_lines("\n* project\n\n  * src\n   \n    * index.js\n")]
    #[case::crlf("* project\r\n  * src\r\n    * index.js\r\n")]
    fn test_parse_nesting(#[case] input: &str) {
        assert_eq!(parse(input).unwrap(), project_src_index());
    }

    #[test]
    fn test_parse_bold() {
        let tree = parse("* project\n  * **src**\n    * index.js").unwrap();

        assert!(tree[0].children[0].is_bold);
        assert_eq!(tree[0].children[0].name, "src");
    }

    #[rstest]
    #[case("**src**", "src")]
    #[case("__src__", "src")]
    #[case("**src** folder", "src folder")]
    fn test_bold_delimiters(#[case] content: &str, #[case] name: &str) {
        let node = parse_item(content);
        assert!(node.is_bold);
        assert_eq!(node.name, name);
    }

    #[test]
    fn test_mismatched_bold_delimiters() {
        let node = parse_item("**src__");
        assert!(!node.is_bold);
        assert_eq!(node.name, "**src__");
    }

    #[test]
    fn test_parse_selected_and_disabled() {
        let input = "* project\n  * src [selected]\n    * index.js [disabled]";

        let expected = vec![TreeNode::new("project").with_children(vec![
            TreeNode::new("src")
                .selected()
                .with_children(vec![TreeNode::new("index.js").disabled()]),
        ])];

        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_tooltip() {
        let tree = parse("* index.js (Main entry point)").unwrap();

        assert_eq!(
            tree,
            vec![TreeNode::new("index.js").with_tooltip("Main entry point")]
        );
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let input = "* project\n  * **src** [selected]\n    * index.js [disabled] (Main entry point)";

        let expected = vec![TreeNode::new("project").with_children(vec![
            TreeNode::new("src").bold().selected().with_children(vec![
                TreeNode::new("index.js")
                    .disabled()
                    .with_tooltip("Main entry point"),
            ]),
        ])];

        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_token_in_middle_leaves_single_space() {
        // Replaced by one space rather than removed, so "my" and "file"
        // do not run together into "myfile".
        let node = parse_item("my [selected] file");
        assert!(node.is_selected);
        assert_eq!(node.name, "my file");

        let node = parse_item("a  [disabled]   b");
        assert!(node.is_disabled);
        assert_eq!(node.name, "a b");
    }

    #[test]
    fn test_parentheses_not_at_end_are_kept() {
        let node = parse_item("fn(x) body");
        assert_eq!(node.tooltip, None);
        assert_eq!(node.name, "fn(x) body");
    }

    #[test]
    fn test_siblings_keep_order() {
        let tree = parse("* c\n* a\n* b").unwrap();

        let names: Vec<_> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dedent_returns_to_matching_level() {
        let input = "* a\n  * b\n    * c\n  * d\n* e";

        let expected = vec![
            TreeNode::new("a").with_children(vec![
                TreeNode::new("b").with_children(vec![TreeNode::new("c")]),
                TreeNode::new("d"),
            ]),
            TreeNode::new("e"),
        ];

        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_non_list_lines_are_skipped() {
        let input = "# Project\n* a\nsome text\n  * b";

        let expected = vec![TreeNode::new("a").with_children(vec![TreeNode::new("b")])];

        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_marker_needs_space() {
        assert!(parse("*bold*\n-dash").is_err());
    }

    #[test]
    fn test_duplicate_sibling_dropped_by_default() {
        let input = "* src\n  * a.rs\n* src\n  * b.rs";

        let expected = vec![
            TreeNode::new("src").with_children(vec![TreeNode::new("a.rs")]),
            TreeNode::new("b.rs"),
        ];

        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_duplicate_sibling_merge() {
        let parser = MarkdownParser::new().with_duplicate_siblings(DuplicateSiblings::Merge);
        let input = "* src\n  * a.rs\n* src\n  * b.rs";

        let expected = vec![TreeNode::new("src").with_children(vec![
            TreeNode::new("a.rs"),
            TreeNode::new("b.rs"),
        ])];

        assert_eq!(parser.parse(input).unwrap(), expected);
    }

    #[test]
    fn test_duplicate_sibling_keep() {
        let parser = MarkdownParser::new().with_duplicate_siblings(DuplicateSiblings::Keep);
        let input = "* src\n  * a.rs\n* src\n  * b.rs";

        let expected = vec![
            TreeNode::new("src").with_children(vec![TreeNode::new("a.rs")]),
            TreeNode::new("src").with_children(vec![TreeNode::new("b.rs")]),
        ];

        assert_eq!(parser.parse(input).unwrap(), expected);
    }

    #[test]
    fn test_same_name_in_different_parents_is_kept() {
        let input = "* a\n  * mod.rs\n* b\n  * mod.rs";

        let tree = parse(input).unwrap();

        assert_eq!(tree[0].children, vec![TreeNode::new("mod.rs")]);
        assert_eq!(tree[1].children, vec![TreeNode::new("mod.rs")]);
    }

    #[test]
    fn test_leaves_have_no_children() {
        let tree = parse("* a\n  * b").unwrap();

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            serde_json::json!([{ "name": "a", "children": [{ "name": "b" }] }])
        );
    }

    #[rstest]
    #[case::prose("This is not a list")]
    #[case::empty("")]
    #[case::whitespace("   \n\t\n")]
    fn test_invalid_input(#[case] input: &str) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Markdown format");
    }

    #[test]
    fn test_parse_items_allows_empty() {
        assert!(MarkdownParser::new().parse_items("no list here").is_empty());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("merge".parse::<DuplicateSiblings>(), Ok(DuplicateSiblings::Merge));
        assert_eq!(DuplicateSiblings::Keep.as_str(), "keep");
        assert!("skip".parse::<DuplicateSiblings>().is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(parse(EXAMPLE).unwrap(), parse(EXAMPLE).unwrap());
    }
}
