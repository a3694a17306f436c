//! Tag dispatch table for HTML to Markdown conversion.

mod commonmark;
mod list;
mod table;

pub use list::convert_list;
pub use table::convert_table;

use crate::convert::{convert_children, Context};
use crate::node::{NodeRef, Tag};

/// Render an element through the rule for its tag.
///
/// Every tag has an arm; elements without Markdown meaning pass their
/// children's output through untouched.
pub fn apply(tag: &Tag, node: NodeRef<'_>, ctx: &Context<'_>, depth: usize) -> String {
    let element = node.node;
    let content = || convert_children(element, ctx, depth + 1);

    match tag {
        Tag::Heading(level) => commonmark::heading(*level, &content()),
        Tag::Paragraph => commonmark::paragraph(&content()),
        Tag::LineBreak => commonmark::line_break(),
        Tag::Strong | Tag::Bold => commonmark::strong(&content()),
        Tag::Emphasis | Tag::Italic => commonmark::emphasis(&content()),
        Tag::Code => commonmark::code(node, &content()),
        Tag::Pre => commonmark::fenced_code_block(element, &content()),
        Tag::Blockquote => commonmark::blockquote(&content()),
        Tag::Anchor => commonmark::link(element, &content(), ctx),
        Tag::Image => commonmark::image(element, ctx),
        Tag::UnorderedList | Tag::OrderedList => convert_list(element, ctx, depth),
        Tag::ListItem => commonmark::list_item(node, &content(), depth),
        Tag::HorizontalRule => commonmark::horizontal_rule(),
        Tag::Table => convert_table(element, ctx),
        Tag::TableRow
        | Tag::TableHeaderCell
        | Tag::TableCell
        | Tag::Superscript
        | Tag::Subscript
        | Tag::Div
        | Tag::Span
        | Tag::Script
        | Tag::Style
        | Tag::NoScript
        | Tag::Svg
        | Tag::Iframe
        | Tag::Other(_) => content(),
    }
}
