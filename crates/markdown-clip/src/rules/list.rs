//! `ul`/`ol` rendering.

use crate::convert::{convert_children, Context};
use crate::node::{Node, Tag};

/// Render the direct `li` children of a list, one line per item.
///
/// Ordered lists always count from 1; `start` and `value` are ignored.
/// Nested lists get no extra indentation.
pub fn convert_list(list: &Node, ctx: &Context<'_>, depth: usize) -> String {
    let ordered = list.is(&Tag::OrderedList);
    let mut out = String::new();

    let items = list.element_children().filter(|c| c.is(&Tag::ListItem));
    for (index, item) in items.enumerate() {
        if ordered {
            out.push_str(&(index + 1).to_string());
            out.push_str(". ");
        } else {
            out.push_str("- ");
        }
        out.push_str(convert_children(item, ctx, depth + 1).trim());
        out.push('\n');
    }

    out.push('\n');
    out
}
