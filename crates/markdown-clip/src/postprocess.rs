//! Final string cleanup applied after the tree has been rendered.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{ConversionOptions, SourceDocument};

static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse runs of three or more newlines to exactly two.
pub fn collapse_blank_lines(markdown: &str) -> String {
    BLANK_RUN.replace_all(markdown, "\n\n").into_owned()
}

/// Citation line pointing back at the page the selection came from
pub fn citation(source: &SourceDocument) -> String {
    format!("> Source: [{}]({})", source.title, source.url)
}

/// Collapse blank lines and append the citation when enabled.
pub fn finish(
    markdown: &str,
    options: &ConversionOptions,
    source: Option<&SourceDocument>,
) -> String {
    let mut out = collapse_blank_lines(markdown);

    match source {
        Some(source) if options.include_source => {
            out.push_str("\n\n");
            out.push_str(&citation(source));
        }
        None if options.include_source => {
            log::debug!("source citation requested without a source document");
        }
        _ => {}
    }

    out
}
