//! Math formula recognition and LaTeX recovery.
//!
//! Wiki-style pages render formulas as a stack of MathML, a fallback image
//! whose alt text is the TeX source, and sometimes an HTML comment holding
//! the same source. [`extract_formula`] digs the LaTeX back out.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Node, Tag};

/// Class carried by synthesized placeholder nodes.
pub const MATH_PLACEHOLDER_CLASS: &str = "math-formula";

/// Class markers identifying a formula element.
pub const FORMULA_CLASSES: &[&str] = &[
    "mwe-math-element",
    "mwe-math-fallback-image-inline",
    "mwe-math-fallback-image-display",
    "tex",
    "mwe-math-mathml-a11y",
];

const MATH_ELEMENT_CLASS: &str = "mwe-math-element";
const DISPLAY_IMAGE_CLASS: &str = "mwe-math-fallback-image-display";
const MATHML_DISPLAY_CLASS: &str = "mwe-math-mathml-display";

static EQUATION_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{equation\}(.*?)\\end\{equation\}").unwrap());
static DISPLAY_DOLLARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
static INLINE_DOLLARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.*?)\$").unwrap());

/// LaTeX recovered from a formula element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathFormula {
    /// Recovered source, `None` when every strategy came up empty
    pub latex: Option<String>,
    /// Block formula on its own lines
    pub display: bool,
}

impl MathFormula {
    /// Markdown-math text for this formula, if any LaTeX was found
    pub fn to_markdown(&self) -> Option<String> {
        let latex = self.latex.as_deref()?;
        Some(wrap_math(latex, self.display))
    }
}

/// Wrap LaTeX in `$...$` or a `$$` block.
pub fn wrap_math(latex: &str, display: bool) -> String {
    if display {
        format!("$$\n{latex}\n$$")
    } else {
        format!("${latex}$")
    }
}

/// Check whether an element is one of the recognized formula containers
pub fn is_formula_element(node: &Node) -> bool {
    node.is_element() && node.classes().any(|c| FORMULA_CLASSES.contains(&c))
}

/// Check whether an element is a hand-written math span
/// (`<span class="math">` or a `style` mentioning math)
pub fn is_math_span(node: &Node) -> bool {
    node.is(&Tag::Span)
        && (node.attr("style").is_some_and(|s| s.contains("math")) || node.has_class("math"))
}

/// Inspect a formula element
pub fn extract_formula(node: &Node) -> MathFormula {
    MathFormula {
        latex: extract_latex(node),
        display: is_display(node),
    }
}

/// Recover LaTeX source, trying the alt text of an embedded image, TeX
/// comments, a `data-latex` attribute and finally the text content.
pub fn extract_latex(node: &Node) -> Option<String> {
    if let Some(alt) = first_image_alt(node) {
        let alt = alt.trim();
        if !alt.is_empty() {
            return Some(alt.to_string());
        }
    }

    if let Some(latex) = latex_from_comments(node) {
        return Some(latex);
    }

    if let Some(latex) = node.attr("data-latex").filter(|l| !l.is_empty()) {
        return Some(latex.to_string());
    }

    let text = node.text_content();
    let text = text.trim();
    if !text.is_empty() && !text.contains("<!--") {
        return Some(text.to_string());
    }

    None
}

/// Alt text of the first image inside a formula element
pub fn first_image_alt(node: &Node) -> Option<&str> {
    node.find_descendant(&Tag::Image)?
        .attr("alt")
        .filter(|alt| !alt.is_empty())
}

/// Block formulas: explicit display fallback image, or a math element
/// wrapping display MathML.
pub fn is_display(node: &Node) -> bool {
    if node.has_class(DISPLAY_IMAGE_CLASS) {
        return true;
    }
    node.has_class(MATH_ELEMENT_CLASS)
        && node
            .descendants()
            .any(|d| d.is_element() && d.has_class(MATHML_DISPLAY_CLASS))
}

fn latex_from_comments(node: &Node) -> Option<String> {
    node.comments()
        .filter(|c| c.contains("TeX") || c.contains("LaTeX"))
        .find_map(|comment| {
            [&*EQUATION_ENV, &*DISPLAY_DOLLARS, &*INLINE_DOLLARS]
                .iter()
                .find_map(|re| re.captures(comment))
                .map(|caps| caps[1].trim().to_string())
        })
        .filter(|latex| !latex.is_empty())
}
