//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts them to the
//! [`Node`] tree the converter works on. Comments are kept: formula markup
//! sometimes stores its TeX source in one.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a document fragment node.
///
/// # Example
///
/// ```rust
/// use markdown_clip::{parse_html, MarkdownConverter};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
/// let markdown = MarkdownConverter::new().convert(&node);
/// assert_eq!(markdown, "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);

    // parse_fragment wraps the input in a synthetic <html> element
    let mut fragment = Node::document_fragment();
    fragment.children = convert_children(document.root_element());
    fragment
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);
    node.children = convert_children(element);
    node
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut children = Vec::new();
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => children.push(Node::text(&text.text)),
            ScraperNode::Comment(comment) => children.push(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
    children
}
