//! HTML list parser using scraper (html5ever).
//!
//! Walks the first `<ul>`/`<ol>` in the document. Only direct children are
//! inspected at each level, so attributes of a nested item never leak into
//! its ancestors.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;
use treeform_ast::TreeNode;

use crate::{Format, HelpEntry, ParseError, Parser};

const EXAMPLE: &str = r#"<ul>
  <li>project
    <ul>
      <li>src
        <ul>
          <li>components
            <ul>
              <li class="selected">header.tsx</li>
              <li>footer.tsx</li>
            </ul>
          </li>
          <li><strong>pages</strong>
            <ul>
              <li>index.tsx</li>
              <li title="About page">about.tsx</li>
            </ul>
          </li>
        </ul>
      </li>
      <li class="disabled">package.json</li>
    </ul>
  </li>
</ul>"#;

const HELP: &[HelpEntry] = &[
    HelpEntry::new("<ul> and <li>", "create the tree hierarchy"),
    HelpEntry::new("<strong> or class=\"bold\"", "makes text bold"),
    HelpEntry::new("class=\"selected\"", "highlights the item"),
    HelpEntry::new("class=\"disabled\"", "grays out the item"),
    HelpEntry::new("title=\"...\"", "adds a tooltip message"),
];

const LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// HTML list parser implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Creates a new HTML parser.
    pub fn new() -> Self {
        Self
    }

    /// Converts the direct `<li>` children of a list element.
    fn convert_list(list: ElementRef<'_>) -> Vec<TreeNode> {
        child_elements(list)
            .filter(|el| el.value().name() == "li")
            .map(Self::convert_item)
            .collect()
    }

    fn convert_item(li: ElementRef<'_>) -> TreeNode {
        let element = li.value();
        let mut node = TreeNode::new(leading_text(li));

        node.is_selected = element.classes().any(|c| c == "selected");
        node.is_disabled = element.classes().any(|c| c == "disabled");
        node.is_bold = element.classes().any(|c| c == "bold");
        node.tooltip = element.attr("title").map(str::to_string);

        if let Some(strong) = child_elements(li).find(|el| el.value().name() == "strong") {
            node.is_bold = true;
            node.name = text_content(strong);
        }

        if let Some(nested) = child_elements(li).find(|el| is_list(*el)) {
            node.children = Self::convert_list(nested);
        }

        node
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn is_list(element: ElementRef<'_>) -> bool {
    LIST_TAGS.contains(&element.value().name())
}

fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the item's first child node, before any nested list.
fn leading_text(li: ElementRef<'_>) -> String {
    let Some(first) = li.first_child() else {
        return String::new();
    };

    match first.value() {
        Node::Text(text) => text.trim().to_string(),
        Node::Element(_) => match ElementRef::wrap(first) {
            Some(el) if !is_list(el) => text_content(el),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

impl Parser for HtmlParser {
    fn format(&self) -> Format {
        Format::Html
    }

    fn extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn placeholder(&self) -> &'static str {
        "Enter your project structure as HTML list (or use the example)..."
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn help(&self) -> &[HelpEntry] {
        HELP
    }

    fn parse(&self, source: &str) -> Result<Vec<TreeNode>, ParseError> {
        let document = Html::parse_document(source);
        let selector = Selector::parse("ul, ol").map_err(|e| {
            debug!("invalid list selector: {}", e);
            ParseError::invalid(Format::Html)
        })?;

        let Some(root) = document.select(&selector).next() else {
            debug!("HTML input has no <ul> element");
            return Err(ParseError::invalid(Format::Html));
        };

        Ok(Self::convert_list(root))
    }
}
