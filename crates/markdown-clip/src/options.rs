//! Conversion options and caller-supplied document context.

/// Options for one conversion.
///
/// The defaults mirror what a fresh install starts with: links kept,
/// images reduced to their alt text, source citation appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Emit `[text](href)` for links; otherwise keep only the link text
    pub preserve_links: bool,

    /// Emit `![alt](src)` for images; otherwise keep only the alt text
    pub preserve_images: bool,

    /// Append a `> Source: [title](url)` line when a source document is known
    pub include_source: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_links: true,
            preserve_images: false,
            include_source: true,
        }
    }
}

/// The page a selection was taken from.
///
/// Used for the citation line and as the base for resolving relative
/// `href`/`src` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub title: String,
    pub url: String,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
