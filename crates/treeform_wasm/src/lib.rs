use treeform_ast::TreeNode;
use treeform_parser::{
    DuplicateSiblings, HelpEntry, MarkdownParser, ParseError, Parser, ParserRegistry,
};
use wasm_bindgen::prelude::*;

/// Converts any `Display`-implementing error into `JsError`.
///
/// The message is the error's display text unchanged, so a UI can show
/// `Invalid JSON format` and friends as they are.
fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Browser entry point: a parser registry with the built-in formats.
#[wasm_bindgen]
pub struct TreeParser {
    registry: ParserRegistry,
}

#[wasm_bindgen]
impl TreeParser {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TreeParser {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            registry: ParserRegistry::builtin(),
        }
    }

    /// Returns the registered format ids, in registration order.
    #[wasm_bindgen(js_name = formatIds)]
    pub fn format_ids(&self) -> Vec<String> {
        self.registry.ids().into_iter().map(String::from).collect()
    }

    /// Returns id, display name, placeholder, example, extensions and help
    /// for every format.
    #[wasm_bindgen]
    pub fn formats(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.format_infos()).map_err(to_js_error)
    }

    /// Parses `input` and returns the tree as JavaScript objects.
    #[wasm_bindgen]
    pub fn parse(&self, input: &str, format: &str) -> Result<JsValue, JsError> {
        let tree = self.parse_tree(input, format).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&tree).map_err(to_js_error)
    }

    /// Parses `input` and returns the tree as a JSON string.
    #[wasm_bindgen(js_name = parseJson)]
    pub fn parse_json(&self, input: &str, format: &str) -> Result<String, JsError> {
        let tree = self.parse_tree(input, format).map_err(to_js_error)?;
        serde_json::to_string(&tree).map_err(to_js_error)
    }

    /// Returns the example document for a format.
    #[wasm_bindgen]
    pub fn example(&self, format: &str) -> Result<String, JsError> {
        self.example_text(format)
            .map(String::from)
            .map_err(to_js_error)
    }

    /// Sets how the Markdown parser treats repeated sibling names
    /// (`drop`, `merge` or `keep`).
    #[wasm_bindgen(js_name = setDuplicateSiblings)]
    pub fn set_duplicate_siblings(&mut self, policy: &str) -> Result<(), JsError> {
        self.apply_duplicate_siblings(policy).map_err(to_js_error)
    }
}

impl TreeParser {
    fn parse_tree(&self, input: &str, format: &str) -> Result<Vec<TreeNode>, ParseError> {
        self.registry.parse(format, input)
    }

    fn example_text(&self, format: &str) -> Result<&'static str, ParseError> {
        self.registry
            .get(format)
            .map(|parser| parser.example())
            .ok_or_else(|| ParseError::not_found(format))
    }

    fn format_infos(&self) -> Vec<JsFormatInfo> {
        self.registry
            .parsers()
            .iter()
            .map(|parser| JsFormatInfo {
                id: parser.id(),
                display_name: parser.display_name(),
                placeholder: parser.placeholder(),
                example: parser.example(),
                extensions: parser.extensions().iter().map(|e| e.to_string()).collect(),
                help: parser.help().to_vec(),
            })
            .collect()
    }

    fn apply_duplicate_siblings(&mut self, policy: &str) -> Result<(), String> {
        let policy: DuplicateSiblings = policy.parse()?;
        self.registry
            .register(MarkdownParser::new().with_duplicate_siblings(policy));
        Ok(())
    }
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// JavaScript-friendly format description.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFormatInfo {
    id: &'static str,
    display_name: &'static str,
    placeholder: &'static str,
    example: &'static str,
    extensions: Vec<String>,
    help: Vec<HelpEntry>,
}
