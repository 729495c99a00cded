//! # treeform_ast
//!
//! Tree node model for treeform.
//!
//! Every treeform parser produces the same output: an ordered forest of
//! [`TreeNode`] values. Renderers and other consumers depend only on this
//! crate and never on a specific input notation.
//!
//! ## Example
//!
//! ```rust
//! use treeform_ast::{FileIcon, TreeNode};
//!
//! let tree = vec![
//!     TreeNode::new("project")
//!         .with_icon(FileIcon::Folder)
//!         .with_children(vec![TreeNode::new("src").bold()]),
//! ];
//!
//! assert_eq!(treeform_ast::count_nodes(&tree), 2);
//! assert_eq!(treeform_ast::max_depth(&tree), 2);
//! ```

mod icon;
mod node;
pub mod visitor;

pub use icon::{FileIcon, UnknownIcon};
pub use node::TreeNode;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, count_nodes, max_depth, walk_forest, walk_node};
