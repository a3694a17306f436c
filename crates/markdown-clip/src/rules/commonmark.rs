//! Per-tag Markdown rules.

use crate::convert::Context;
use crate::node::{Node, NodeRef, Tag};
use crate::utilities::{clean_attribute, code_language, repeat};

const FENCE: &str = "```";

pub fn heading(level: u8, content: &str) -> String {
    let level = level.clamp(1, 6) as usize;
    format!("{} {}\n\n", repeat("#", level), content)
}

pub fn paragraph(content: &str) -> String {
    format!("{content}\n\n")
}

pub fn line_break() -> String {
    "\n".to_string()
}

pub fn strong(content: &str) -> String {
    format!("**{content}**")
}

pub fn emphasis(content: &str) -> String {
    format!("*{content}*")
}

/// Inline code, or raw content when the code sits directly in a `pre`
pub fn code(node: NodeRef<'_>, content: &str) -> String {
    if node.parent_is(&Tag::Pre) {
        content.to_string()
    } else {
        format!("`{content}`")
    }
}

pub fn fenced_code_block(node: &Node, content: &str) -> String {
    let language = code_language(
        node.find_descendant(&Tag::Code)
            .and_then(|code| code.attr("class")),
    );
    format!("{FENCE}{language}\n{content}\n{FENCE}\n\n")
}

pub fn blockquote(content: &str) -> String {
    format!("> {}\n\n", content.replace('\n', "\n> "))
}

pub fn link(node: &Node, content: &str, ctx: &Context<'_>) -> String {
    let href = clean_attribute(node.attr("href"));
    if !ctx.options.preserve_links || href.is_empty() {
        return content.to_string();
    }

    let text = if content.is_empty() {
        node.text_content()
    } else {
        content.to_string()
    };

    // same-document anchors mean nothing once copied out of the page
    if href.starts_with('#') {
        return text;
    }

    let title = clean_attribute(node.attr("title"));
    let title_part = if title.is_empty() {
        String::new()
    } else {
        format!(" \"{title}\"")
    };

    format!("[{}]({}{})", text, ctx.resolve(&href), title_part)
}

pub fn image(node: &Node, ctx: &Context<'_>) -> String {
    let alt = node.attr("alt").unwrap_or("");
    let src = clean_attribute(node.attr("src"));

    if ctx.options.preserve_images && !src.is_empty() {
        format!("![{}]({})", alt, ctx.resolve(&src))
    } else {
        alt.to_string()
    }
}

/// An `li` reached outside of [`super::convert_list`]
pub fn list_item(node: NodeRef<'_>, content: &str, depth: usize) -> String {
    let prefix = if node.parent_is(&Tag::OrderedList) {
        format!("{depth}. ")
    } else {
        "- ".to_string()
    };
    format!("{prefix}{content}\n")
}

pub fn horizontal_rule() -> String {
    "---\n\n".to_string()
}
