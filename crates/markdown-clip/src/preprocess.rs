//! Working-tree cleanup run before Markdown generation.
//!
//! After [`preprocess`] the tree holds no script-like elements, no wiki
//! chrome (edit links, access keys, reference lists), no `sup`/`sub`
//! elements, and every recognizable formula has become a placeholder span
//! carrying finished Markdown-math text.

use crate::math::{self, MATH_PLACEHOLDER_CLASS};
use crate::node::{Node, Tag};

/// Classes marking page chrome that never belongs in a copied selection.
const CHROME_CLASSES: &[&str] = &["mw-editsection", "reference", "references"];

/// Rewrite the descendants of a working tree in place.
///
/// The root itself is never removed or replaced; callers wrap a tree in a
/// fragment when its root must be cleaned too.
///
/// Formula extraction runs before the chrome and `sup`/`sub` passes: formula
/// markup may itself contain superscripts that must be captured as LaTeX,
/// and reference markers are usually `sup` elements that should vanish
/// rather than turn into `^[1]`.
pub fn preprocess(root: &mut Node) {
    retain_descendants(root, &|node| {
        !node.tag().is_some_and(Tag::is_non_content)
    });
    rewrite_descendants(root, &rewrite_formula);
    rewrite_descendants(root, &rewrite_math_span);
    retain_descendants(root, &|node| !is_chrome(node));
    rewrite_descendants(root, &|node| rewrite_script(node, &Tag::Superscript, '^'));
    rewrite_descendants(root, &|node| rewrite_script(node, &Tag::Subscript, '_'));
}

/// Build a placeholder node holding literal Markdown.
pub fn math_placeholder(markdown: &str) -> Node {
    Node::element_with_attrs("span", vec![("class", MATH_PLACEHOLDER_CLASS)])
        .with_child(Node::text(markdown))
}

/// Outcome of visiting one node during a rewrite pass.
enum Rewrite {
    /// Leave the node and keep walking into it
    Descend,
    /// Put this node in its place and stop there
    Replace(Node),
    /// Drop the node
    Remove,
}

fn rewrite_descendants(node: &mut Node, visit: &dyn Fn(&Node) -> Rewrite) {
    let children = std::mem::take(&mut node.children);
    node.children = children
        .into_iter()
        .filter_map(|mut child| match visit(&child) {
            Rewrite::Descend => {
                rewrite_descendants(&mut child, visit);
                Some(child)
            }
            Rewrite::Replace(replacement) => Some(replacement),
            Rewrite::Remove => None,
        })
        .collect();
}

fn retain_descendants(node: &mut Node, keep: &dyn Fn(&Node) -> bool) {
    node.children.retain(|child| keep(child));
    for child in &mut node.children {
        retain_descendants(child, keep);
    }
}

fn rewrite_formula(node: &Node) -> Rewrite {
    if !math::is_formula_element(node) {
        return Rewrite::Descend;
    }

    if let Some(markdown) = math::extract_formula(node).to_markdown() {
        log::trace!("formula <{}> -> {markdown:?}", node.tag_name());
        return Rewrite::Replace(math_placeholder(&markdown));
    }

    match math::first_image_alt(node) {
        Some(alt) => Rewrite::Replace(math_placeholder(&math::wrap_math(alt, false))),
        None => {
            log::debug!("no LaTeX recoverable from <{}>, leaving it in place", node.tag_name());
            Rewrite::Descend
        }
    }
}

fn rewrite_math_span(node: &Node) -> Rewrite {
    if !math::is_math_span(node) {
        return Rewrite::Descend;
    }
    let text = node.text_content();
    let text = text.trim();
    if text.is_empty() {
        return Rewrite::Descend;
    }
    Rewrite::Replace(math_placeholder(&math::wrap_math(text, false)))
}

fn is_chrome(node: &Node) -> bool {
    node.is_element()
        && (node.has_attr("accesskey") || node.classes().any(|c| CHROME_CLASSES.contains(&c)))
}

fn rewrite_script(node: &Node, tag: &Tag, marker: char) -> Rewrite {
    if !node.is(tag) {
        return Rewrite::Descend;
    }
    let text = node.text_content();
    let text = text.trim();
    if text.is_empty() {
        Rewrite::Remove
    } else {
        Rewrite::Replace(Node::text(&format!("{marker}{text}")))
    }
}
