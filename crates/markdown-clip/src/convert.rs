//! Recursive tree-to-Markdown transformer.
//!
//! Children are rendered first; the element's rule then wraps or combines
//! the resulting text. Lists and tables are handed to their own
//! sub-converters from the rule table.

use std::borrow::Cow;

use url::Url;

use crate::math::MATH_PLACEHOLDER_CLASS;
use crate::node::{Node, NodeRef, NodeType};
use crate::options::{ConversionOptions, SourceDocument};
use crate::rules;

/// Per-conversion state shared by every rule
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub options: &'a ConversionOptions,
    base_url: Option<Url>,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a ConversionOptions, source: Option<&SourceDocument>) -> Self {
        let base_url = source.and_then(|source| match Url::parse(&source.url) {
            Ok(url) => Some(url),
            Err(err) => {
                log::debug!("source URL {:?} is not absolute ({err}), links stay relative", source.url);
                None
            }
        });
        Self { options, base_url }
    }

    /// Resolve a link or image reference against the source document.
    ///
    /// Without a base URL, or when joining fails, the reference is returned
    /// unchanged.
    pub fn resolve<'s>(&self, reference: &'s str) -> Cow<'s, str> {
        let Some(base) = &self.base_url else {
            return Cow::Borrowed(reference);
        };
        match base.join(reference) {
            Ok(url) => Cow::Owned(url.to_string()),
            Err(err) => {
                log::debug!("cannot resolve {reference:?} against {base}: {err}");
                Cow::Borrowed(reference)
            }
        }
    }
}

/// Render one node.
///
/// `depth` grows by one per element level and is only observed by the
/// stray-`li` rule.
pub fn convert(node: NodeRef<'_>, ctx: &Context<'_>, depth: usize) -> String {
    let inner = node.node;
    match inner.node_type {
        NodeType::Text => inner.node_value.clone().unwrap_or_default(),
        NodeType::Comment => String::new(),
        NodeType::DocumentFragment => convert_children(inner, ctx, depth),
        NodeType::Element => convert_element(node, ctx, depth),
    }
}

/// Render and concatenate the children of a node
pub fn convert_children(node: &Node, ctx: &Context<'_>, depth: usize) -> String {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&convert(NodeRef::child_of(child, node), ctx, depth));
    }
    out
}

fn convert_element(node: NodeRef<'_>, ctx: &Context<'_>, depth: usize) -> String {
    // placeholders already hold final Markdown
    if node.node.has_class(MATH_PLACEHOLDER_CLASS) {
        return node.node.text_content();
    }

    match node.node.tag() {
        Some(tag) => rules::apply(tag, node, ctx, depth),
        None => convert_children(node.node, ctx, depth + 1),
    }
}
