//! # markdown-clip
//!
//! Convert a selected HTML fragment to Markdown.
//!
//! The converter runs in three stages over its own copy of the input tree:
//!
//! 1. **Preprocessing** strips non-content elements and wiki chrome, turns
//!    math formulas into `$...$` / `$$...$$` text and rewrites `sup`/`sub`
//!    into `^x` / `_x`.
//! 2. **Transformation** walks the tree depth-first and renders each element
//!    through a tag rule table, with dedicated list and table converters.
//! 3. **Post-processing** collapses blank lines and optionally appends a
//!    source citation.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use markdown_clip::{MarkdownConverter, Node};
//!
//! let converter = MarkdownConverter::new();
//!
//! let mut h2 = Node::element("h2");
//! h2.add_child(Node::text("Hello World"));
//!
//! assert_eq!(converter.convert(&h2), "## Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use markdown_clip::{MarkdownConverter, SourceDocument};
//!
//! let converter = MarkdownConverter::new();
//! let source = SourceDocument::new("Euler", "https://example.org/wiki/Euler");
//! let markdown = converter
//!     .convert_html("<p>Famous: <span class=\"math\">e^{i\\pi}+1=0</span></p>", Some(&source))
//!     .unwrap();
//! assert_eq!(
//!     markdown,
//!     "Famous: $e^{i\\pi}+1=0$\n\n> Source: [Euler](https://example.org/wiki/Euler)"
//! );
//! ```

pub mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod math;
pub mod node;
mod options;
pub mod postprocess;
pub mod preprocess;
mod rules;
mod service;
mod utilities;

pub use convert::{convert, Context};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use math::{extract_formula, extract_latex, MathFormula};
pub use node::{Node, NodeRef, NodeType, Tag};
pub use options::{ConversionOptions, SourceDocument};
pub use preprocess::preprocess;
pub use rules::{convert_list, convert_table};
pub use service::MarkdownConverter;

/// Error type for selection conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("no text selected")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
