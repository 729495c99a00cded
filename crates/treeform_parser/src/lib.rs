//! # treeform_parser
//!
//! Parser layer for treeform.
//!
//! This crate provides:
//! - A `Parser` trait shared by every input notation
//! - Built-in parsers for lenient JSON, HTML lists, Markdown lists and a YAML subset
//! - A `ParserRegistry` that looks parsers up by format id
//!
//! ## Architecture
//!
//! Each parser converts source text into a forest of [`TreeNode`] values.
//! Parsers are pure: they keep no state between calls, and every failure is
//! reported as the single `ParseError::InvalidFormat` for their format.
//!
//! ## Example
//!
//! ```rust
//! use treeform_parser::ParserRegistry;
//!
//! let registry = ParserRegistry::builtin();
//! let tree = registry.parse("markdown", "* project\n  * src").unwrap();
//!
//! assert_eq!(tree[0].name, "project");
//! assert_eq!(tree[0].children[0].name, "src");
//! ```

mod error;
mod format;
mod html;
mod json;
mod markdown;
mod registry;
mod traits;
mod yaml;

pub use error::ParseError;
pub use format::Format;
pub use html::HtmlParser;
pub use json::JsonParser;
pub use markdown::{DuplicateSiblings, MarkdownParser};
pub use registry::{FormatParser, ParserRegistry};
pub use traits::{HelpEntry, Parser};
pub use treeform_ast::TreeNode;
pub use yaml::YamlParser;
