//! Output formatting module

mod json;
mod summary;

use miette::Result;
use treeform_ast::TreeNode;

use crate::cli::OutputFormat;

pub fn output_tree(tree: &[TreeNode], format: OutputFormat, compact: bool) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(tree, compact)?,
        OutputFormat::Summary => summary::output_summary(tree),
    }
    Ok(())
}
