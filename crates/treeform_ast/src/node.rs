//! TreeNode definition.
//!
//! The canonical node type produced by every treeform parser.

use serde::{Deserialize, Serialize};

use crate::FileIcon;

/// A node in a rendered project tree.
///
/// A parse result is a forest: an ordered `Vec<TreeNode>` of roots, each
/// owning its children. Sibling order is the order the items appear in the
/// source text.
///
/// # Serialization
///
/// Field names are camelCase (`isBold`, `isSelected`, `isDisabled`). Flags
/// that are `false`, absent `icon`/`tooltip`, and empty `children` are not
/// written, so a leaf never carries a `children` field. Unknown fields are
/// ignored when deserializing.
///
/// # Example
///
/// ```rust
/// use treeform_ast::TreeNode;
///
/// let node = TreeNode::new("index.js").disabled().with_tooltip("Main entry point");
///
/// let json = serde_json::to_value(&node).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({
///         "name": "index.js",
///         "isDisabled": true,
///         "tooltip": "Main entry point"
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Display name.
    pub name: String,

    /// Optional icon tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<FileIcon>,

    /// Rendered in bold.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_bold: bool,

    /// Highlighted as the current selection.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_selected: bool,

    /// Grayed out.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_disabled: bool,

    /// Tooltip message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Child nodes in document order. Empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TreeNode {
    /// Creates a leaf node with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Marks the node as bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.is_bold = true;
        self
    }

    /// Marks the node as selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// Marks the node as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Sets the tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: FileIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Replaces the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
