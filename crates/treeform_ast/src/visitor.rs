//! Visitor pattern for tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Pre-order walk of a single node and its descendants
//! - [`walk_forest`] - Pre-order walk of every root in a forest
//! - [`count_nodes`], [`max_depth`] - Aggregates built on the walk
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use treeform_ast::TreeNode;
//! use treeform_ast::visitor::{VisitResult, Visitor, walk_forest};
//!
//! struct SelectedFinder<'a> {
//!     found: Option<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for SelectedFinder<'a> {
//!     fn visit_node(&mut self, node: &'a TreeNode, _depth: usize) -> VisitResult {
//!         if node.is_selected {
//!             self.found = Some(node.name.as_str());
//!             return ControlFlow::Break(());
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let tree = vec![TreeNode::new("src").with_children(vec![
//!     TreeNode::new("a.rs"),
//!     TreeNode::new("b.rs").selected(),
//! ])];
//!
//! let mut finder = SelectedFinder { found: None };
//! let _ = walk_forest(&mut finder, &tree);
//! assert_eq!(finder.found, Some("b.rs"));
//! ```

use std::ops::ControlFlow;

use crate::TreeNode;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing a tree without modification.
///
/// `depth` is 1 for roots and grows by one per level.
pub trait Visitor<'a>: Sized {
    /// Called for every node before its children.
    fn visit_node(&mut self, node: &'a TreeNode, depth: usize) -> VisitResult;

    /// Called after a node and all its children were visited.
    #[inline]
    fn exit_node(&mut self, _node: &'a TreeNode, _depth: usize) -> VisitResult {
        ControlFlow::Continue(())
    }
}

/// Walks `node` and its descendants in pre-order.
pub fn walk_node<'a, V>(visitor: &mut V, node: &'a TreeNode, depth: usize) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.visit_node(node, depth)?;

    for child in &node.children {
        walk_node(visitor, child, depth + 1)?;
    }

    visitor.exit_node(node, depth)
}

/// Walks every root of `forest` in order, starting at depth 1.
pub fn walk_forest<'a, V>(visitor: &mut V, forest: &'a [TreeNode]) -> VisitResult
where
    V: Visitor<'a>,
{
    for root in forest {
        walk_node(visitor, root, 1)?;
    }
    ControlFlow::Continue(())
}

struct Stats {
    nodes: usize,
    depth: usize,
}

impl<'a> Visitor<'a> for Stats {
    fn visit_node(&mut self, _node: &'a TreeNode, depth: usize) -> VisitResult {
        self.nodes += 1;
        self.depth = self.depth.max(depth);
        ControlFlow::Continue(())
    }
}

fn stats(forest: &[TreeNode]) -> Stats {
    let mut stats = Stats { nodes: 0, depth: 0 };
    let _ = walk_forest(&mut stats, forest);
    stats
}

/// Total number of nodes in the forest.
pub fn count_nodes(forest: &[TreeNode]) -> usize {
    stats(forest).nodes
}

/// Number of levels in the deepest branch; 0 for an empty forest.
pub fn max_depth(forest: &[TreeNode]) -> usize {
    stats(forest).depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::new("project").with_children(vec![
                TreeNode::new("src").with_children(vec![TreeNode::new("main.rs")]),
                TreeNode::new("Cargo.toml"),
            ]),
            TreeNode::new("README.md"),
        ]
    }

    struct NameCollector {
        names: Vec<(String, usize)>,
    }

    impl<'a> Visitor<'a> for NameCollector {
        fn visit_node(&mut self, node: &'a TreeNode, depth: usize) -> VisitResult {
            self.names.push((node.name.clone(), depth));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_walk_forest_is_pre_order() {
        let tree = sample();
        let mut collector = NameCollector { names: Vec::new() };

        let result = walk_forest(&mut collector, &tree);

        assert_eq!(result, ControlFlow::Continue(()));
        assert_eq!(
            collector.names,
            vec![
                ("project".to_string(), 1),
                ("src".to_string(), 2),
                ("main.rs".to_string(), 3),
                ("Cargo.toml".to_string(), 2),
                ("README.md".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_early_termination() {
        struct StopAt {
            seen: usize,
        }

        impl<'a> Visitor<'a> for StopAt {
            fn visit_node(&mut self, node: &'a TreeNode, _depth: usize) -> VisitResult {
                self.seen += 1;
                if node.name == "src" {
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            }
        }

        let tree = sample();
        let mut visitor = StopAt { seen: 0 };

        assert_eq!(walk_forest(&mut visitor, &tree), ControlFlow::Break(()));
        assert_eq!(visitor.seen, 2);
    }

    #[test]
    fn test_exit_node_runs_after_children() {
        struct Exits {
            order: Vec<String>,
        }

        impl<'a> Visitor<'a> for Exits {
            fn visit_node(&mut self, _node: &'a TreeNode, _depth: usize) -> VisitResult {
                ControlFlow::Continue(())
            }

            fn exit_node(&mut self, node: &'a TreeNode, _depth: usize) -> VisitResult {
                self.order.push(node.name.clone());
                ControlFlow::Continue(())
            }
        }

        let tree = sample();
        let mut visitor = Exits { order: Vec::new() };
        let _ = walk_forest(&mut visitor, &tree);

        assert_eq!(
            visitor.order,
            vec!["main.rs", "src", "Cargo.toml", "project", "README.md"]
        );
    }

    #[test]
    fn test_count_and_depth() {
        let tree = sample();
        assert_eq!(count_nodes(&tree), 5);
        assert_eq!(max_depth(&tree), 3);
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(count_nodes(&[]), 0);
        assert_eq!(max_depth(&[]), 0);
    }
}
