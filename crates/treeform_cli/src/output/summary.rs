//! Summary output formatter

use treeform_ast::{TreeNode, VisitResult, Visitor, count_nodes, max_depth, walk_forest};

/// Names of the nodes that carry a display flag.
#[derive(Debug, Default, PartialEq, Eq)]
struct Highlights<'a> {
    bold: Vec<&'a str>,
    selected: Vec<&'a str>,
    disabled: Vec<&'a str>,
}

impl<'a> Visitor<'a> for Highlights<'a> {
    fn visit_node(&mut self, node: &'a TreeNode, _depth: usize) -> VisitResult {
        if node.is_bold {
            self.bold.push(&node.name);
        }
        if node.is_selected {
            self.selected.push(&node.name);
        }
        if node.is_disabled {
            self.disabled.push(&node.name);
        }
        VisitResult::Continue(())
    }
}

fn collect_highlights(tree: &[TreeNode]) -> Highlights<'_> {
    let mut highlights = Highlights::default();
    let _ = walk_forest(&mut highlights, tree);
    highlights
}

fn render_summary(tree: &[TreeNode]) -> String {
    let highlights = collect_highlights(tree);

    let mut lines = vec![
        format!("roots: {}", tree.len()),
        format!("nodes: {}", count_nodes(tree)),
        format!("depth: {}", max_depth(tree)),
    ];
    for (label, names) in [
        ("bold", &highlights.bold),
        ("selected", &highlights.selected),
        ("disabled", &highlights.disabled),
    ] {
        if !names.is_empty() {
            lines.push(format!("{}: {}", label, names.join(", ")));
        }
    }
    lines.join("\n")
}

pub fn output_summary(tree: &[TreeNode]) {
    println!("{}", render_summary(tree));
}
