//! Parser registry.
//!
//! The registry is an ordinary value: build it once at startup and pass it
//! by reference to whatever dispatches parse calls.

use treeform_ast::TreeNode;

use crate::{
    Format, HelpEntry, HtmlParser, JsonParser, MarkdownParser, ParseError, Parser, YamlParser,
};

/// One of the built-in parsers.
#[derive(Debug, Clone)]
pub enum FormatParser {
    Json(JsonParser),
    Html(HtmlParser),
    Markdown(MarkdownParser),
    Yaml(YamlParser),
}

impl FormatParser {
    /// Returns the default parser for `format`.
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Json => Self::Json(JsonParser::new()),
            Format::Html => Self::Html(HtmlParser::new()),
            Format::Markdown => Self::Markdown(MarkdownParser::new()),
            Format::Yaml => Self::Yaml(YamlParser::new()),
        }
    }

    fn inner(&self) -> &dyn Parser {
        match self {
            Self::Json(parser) => parser,
            Self::Html(parser) => parser,
            Self::Markdown(parser) => parser,
            Self::Yaml(parser) => parser,
        }
    }
}

impl Parser for FormatParser {
    fn format(&self) -> Format {
        self.inner().format()
    }

    fn extensions(&self) -> &[&str] {
        self.inner().extensions()
    }

    fn placeholder(&self) -> &'static str {
        self.inner().placeholder()
    }

    fn example(&self) -> &'static str {
        self.inner().example()
    }

    fn help(&self) -> &[HelpEntry] {
        self.inner().help()
    }

    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        self.inner().parse(source)
    }
}

impl From<JsonParser> for FormatParser {
    fn from(parser: JsonParser) -> Self {
        Self::Json(parser)
    }
}

impl From<HtmlParser> for FormatParser {
    fn from(parser: HtmlParser) -> Self {
        Self::Html(parser)
    }
}

impl From<MarkdownParser> for FormatParser {
    fn from(parser: MarkdownParser) -> Self {
        Self::Markdown(parser)
    }
}

impl From<YamlParser> for FormatParser {
    fn from(parser: YamlParser) -> Self {
        Self::Yaml(parser)
    }
}

/// Lookup table of parsers keyed by format id, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ParserRegistry {
    parsers: Vec<FormatParser>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the JSON, HTML, Markdown and YAML parsers.
    pub fn builtin() -> Self {
        Self::from_parsers(Format::ALL.into_iter().map(FormatParser::for_format))
    }

    /// Creates a registry from the given parsers, registered in order.
    pub fn from_parsers<I, P>(parsers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FormatParser>,
    {
        let mut registry = Self::new();
        for parser in parsers {
            registry.register(parser);
        }
        registry
    }

    /// Registers a parser.
    ///
    /// A parser with an id that is already registered replaces the previous
    /// one and keeps its position.
    pub fn register(&mut self, parser: impl Into<FormatParser>) {
        let parser = parser.into();
        match self.parsers.iter_mut().find(|p| p.id() == parser.id()) {
            Some(existing) => *existing = parser,
            None => self.parsers.push(parser),
        }
    }

    /// Looks up a parser by format id.
    pub fn get(&self, id: &str) -> Option<&FormatParser> {
        self.parsers.iter().find(|p| p.id() == id)
    }

    /// Returns all parsers in registration order.
    pub fn parsers(&self) -> &[FormatParser] {
        &self.parsers
    }

    /// Returns all registered ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.id()).collect()
    }

    /// Finds the first parser that handles the given file extension.
    pub fn find_by_extension(&self, extension: &str) -> Option<&FormatParser> {
        self.parsers.iter().find(|p| p.can_parse(extension))
    }

    /// Returns the number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parses `source` with the parser registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ParserNotFound`] for an unknown id, or the
    /// parser's own [`ParseError::InvalidFormat`].
    pub fn parse(&self, id: &str, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        let parser = self.get(id).ok_or_else(|| ParseError::not_found(id))?;
        parser.parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DuplicateSiblings;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_order() {
        let registry = ParserRegistry::builtin();

        assert_eq!(registry.ids(), vec!["json", "html", "markdown", "yaml"]);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_new_is_empty() {
        let registry = ParserRegistry::new();

        assert!(registry.is_empty());
        assert!(registry.get("json").is_none());
    }

    #[test]
    fn test_lookup() {
        let registry = ParserRegistry::builtin();

        let parser = registry.get("markdown").unwrap();
        assert_eq!(parser.format(), Format::Markdown);
        assert_eq!(parser.display_name(), "Markdown");
        assert!(registry.get("Markdown").is_none());
    }

    #[test]
    fn test_register_overwrites_in_place() {
        let mut registry = ParserRegistry::builtin();
        registry.register(MarkdownParser::new().with_duplicate_siblings(DuplicateSiblings::Keep));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.ids(), vec!["json", "html", "markdown", "yaml"]);

        let tree = registry.parse("markdown", "* a\n* a").unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_from_parsers_keeps_order() {
        let registry = ParserRegistry::from_parsers([
            FormatParser::for_format(Format::Yaml),
            FormatParser::for_format(Format::Json),
        ]);

        assert_eq!(registry.ids(), vec!["yaml", "json"]);
    }

    #[test]
    fn test_find_by_extension() {
        let registry = ParserRegistry::builtin();

        assert_eq!(registry.find_by_extension("md").unwrap().id(), "markdown");
        assert_eq!(registry.find_by_extension("YML").unwrap().id(), "yaml");
        assert_eq!(registry.find_by_extension("htm").unwrap().id(), "html");
        assert_eq!(registry.find_by_extension("jsonc").unwrap().id(), "json");
        assert!(registry.find_by_extension("toml").is_none());
    }

    #[test]
    fn test_parse_dispatches() {
        let registry = ParserRegistry::builtin();

        let tree = registry.parse("yaml", "- name: project").unwrap();

        assert_eq!(tree, vec![TreeNode::new("project")]);
    }

    #[test]
    fn test_parse_unknown_format() {
        let registry = ParserRegistry::builtin();

        let err = registry.parse("toml", "a = 1").unwrap_err();

        assert_eq!(err, ParseError::ParserNotFound("toml".to_string()));
    }

    #[test]
    fn test_every_parser_has_metadata() {
        let registry = ParserRegistry::builtin();

        for parser in registry.parsers() {
            assert!(parser.placeholder().contains(parser.display_name()));
            assert!(!parser.example().is_empty());
            assert!(!parser.help().is_empty());
            assert!(!parser.extensions().is_empty());
        }
    }

    #[test]
    fn test_every_example_parses() {
        let registry = ParserRegistry::builtin();

        for parser in registry.parsers() {
            let tree = parser.parse(parser.example()).unwrap();
            assert_eq!(tree.len(), 1, "{} example", parser.id());
            assert_eq!(tree[0].name, "project", "{} example", parser.id());
            assert_eq!(treeform_ast::count_nodes(&tree), 9, "{} example", parser.id());
        }
    }

    #[test]
    fn test_examples_agree_across_formats() {
        let registry = ParserRegistry::builtin();

        let trees: Vec<_> = registry
            .parsers()
            .iter()
            .map(|parser| parser.parse(parser.example()).unwrap())
            .collect();

        for tree in &trees[1..] {
            assert_eq!(tree, &trees[0]);
        }
    }
}
