//! MarkdownConverter - the main entry point for selection to Markdown conversion.

use crate::convert::{convert, Context};
use crate::node::{Node, NodeRef};
use crate::options::{ConversionOptions, SourceDocument};
use crate::postprocess;
use crate::preprocess::preprocess;
use crate::{ConvertError, Result};

/// Converts selected node trees to Markdown.
///
/// The converter works on its own copy of the tree, so the caller's tree is
/// never mutated and one converter can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConversionOptions,
}

impl MarkdownConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConversionOptions {
        &mut self.options
    }

    /// Convert a node tree without a citation line.
    ///
    /// Never fails; unrecognized markup degrades to its text.
    pub fn convert(&self, root: &Node) -> String {
        self.convert_with_source(root, None)
    }

    /// Convert a node tree, citing `source` when `include_source` is set.
    pub fn convert_with_source(&self, root: &Node, source: Option<&SourceDocument>) -> String {
        // preprocessing only rewrites descendants, so the root needs a parent
        let mut working = Node::document_fragment().with_child(root.clone());
        preprocess(&mut working);

        let ctx = Context::new(&self.options, source);
        let markdown = convert(NodeRef::new(&working), &ctx, 0);
        let markdown = postprocess::finish(markdown.trim(), &self.options, source);

        log::debug!("converted selection to {} bytes of markdown", markdown.len());
        markdown
    }

    /// Convert a user selection, rejecting selections without any text.
    pub fn convert_selection(
        &self,
        root: &Node,
        source: Option<&SourceDocument>,
    ) -> Result<String> {
        if root.text_content().trim().is_empty() {
            return Err(ConvertError::EmptySelection);
        }
        Ok(self.convert_with_source(root, source))
    }

    /// Parse an HTML fragment and convert it as a selection.
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str, source: Option<&SourceDocument>) -> Result<String> {
        let root = crate::html::parse_html(html);
        self.convert_selection(&root, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> Node {
        Node::element("p").with_child(Node::text(text))
    }

    fn no_source() -> ConversionOptions {
        ConversionOptions {
            include_source: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_paragraph() {
        let converter = MarkdownConverter::new();
        assert_eq!(converter.convert(&paragraph("Hello World")), "Hello World");
    }

    #[test]
    fn test_result_is_trimmed_and_collapsed() {
        let root = Node::document_fragment()
            .with_child(paragraph("one"))
            .with_child(Node::text("\n\n\n"))
            .with_child(paragraph("two"));
        let converter = MarkdownConverter::with_options(no_source());
        assert_eq!(converter.convert(&root), "one\n\ntwo");
    }

    #[test]
    fn test_citation() {
        let converter = MarkdownConverter::new();
        let source = SourceDocument::new("Example", "https://example.com/a");
        let out = converter.convert_with_source(&paragraph("Body"), Some(&source));
        assert_eq!(out, "Body\n\n> Source: [Example](https://example.com/a)");

        let converter = MarkdownConverter::with_options(no_source());
        let out = converter.convert_with_source(&paragraph("Body"), Some(&source));
        assert_eq!(out, "Body");
    }

    #[test]
    fn test_caller_tree_is_untouched() {
        let root = Node::element("div")
            .with_child(Node::element("script").with_child(Node::text("x()")))
            .with_child(Node::element("sup").with_child(Node::text("2")));
        let before = root.clone();
        let out = MarkdownConverter::new().convert(&root);
        assert_eq!(out, "^2");
        assert_eq!(root, before);
    }

    #[test]
    fn test_empty_tree_any_options() {
        for (links, images, source) in [(true, true, true), (false, false, false), (true, false, true)] {
            let converter = MarkdownConverter::with_options(ConversionOptions {
                preserve_links: links,
                preserve_images: images,
                include_source: source,
            });
            assert_eq!(converter.convert(&Node::document_fragment()), "");
        }
    }

    #[test]
    fn test_empty_selection() {
        let converter = MarkdownConverter::new();
        let blank = Node::element("div").with_child(Node::text("   \n"));
        assert!(matches!(
            converter.convert_selection(&blank, None),
            Err(ConvertError::EmptySelection)
        ));
        assert_eq!(
            converter.convert_selection(&paragraph("x"), None).unwrap(),
            "x"
        );
    }

    #[test]
    fn test_root_element_is_preprocessed() {
        let converter = MarkdownConverter::with_options(no_source());

        let sup = Node::element("sup").with_child(Node::text("2"));
        assert_eq!(converter.convert(&sup), "^2");

        let sub = Node::element("sub").with_child(Node::text("i"));
        assert_eq!(converter.convert(&sub), "_i");

        let script = Node::element("script").with_child(Node::text("track()"));
        assert_eq!(converter.convert(&script), "");

        let chrome = Node::element_with_attrs("span", vec![("class", "mw-editsection")])
            .with_child(Node::text("[edit]"));
        assert_eq!(converter.convert(&chrome), "");
    }

    #[test]
    fn test_root_formula_is_preprocessed() {
        let formula = Node::element_with_attrs("span", vec![("class", "mwe-math-element")])
            .with_child(
                Node::element_with_attrs("span", vec![("class", "mwe-math-mathml-display")])
                    .with_child(Node::text("xy")),
            )
            .with_child(Node::element_with_attrs("img", vec![("alt", "x+y")]));
        let converter = MarkdownConverter::with_options(no_source());
        assert_eq!(converter.convert(&formula), "$$\nx+y\n$$");

        let span = Node::element_with_attrs("span", vec![("class", "math")])
            .with_child(Node::text("a=b"));
        assert_eq!(converter.convert(&span), "$a=b$");
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkdownConverter>();
    }

    #[test]
    fn test_options_mut() {
        let mut converter = MarkdownConverter::new();
        converter.options_mut().preserve_links = false;
        let a = Node::element_with_attrs("a", vec![("href", "https://e.co")])
            .with_child(Node::text("t"));
        assert!(!converter.options().preserve_links);
        assert_eq!(converter.convert(&a), "t");
    }
}
