//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use treeform_ast::TreeNode;

pub fn output_json(tree: &[TreeNode], compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(tree)
    } else {
        serde_json::to_string_pretty(tree)
    };
    println!("{}", json.into_diagnostic()?);
    Ok(())
}
