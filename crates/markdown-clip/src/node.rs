//! DOM-like node tree consumed by the converter.
//!
//! Any HTML parser (scraper, html5ever, a browser selection serializer, ...)
//! can produce this structure. Element kinds the converter knows about are
//! resolved into a closed [`Tag`] enumeration once, at construction, so the
//! rule table can dispatch with an exhaustive `match`.

use indexmap::IndexMap;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// Recognized element kinds.
///
/// Everything the converter has no special rule for lands in [`Tag::Other`]
/// and is treated as a pass-through container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `h1` .. `h6`
    Heading(u8),
    Paragraph,
    LineBreak,
    Strong,
    Bold,
    Emphasis,
    Italic,
    Code,
    Pre,
    Blockquote,
    Anchor,
    Image,
    UnorderedList,
    OrderedList,
    ListItem,
    HorizontalRule,
    Table,
    TableRow,
    TableHeaderCell,
    TableCell,
    Superscript,
    Subscript,
    Div,
    Span,
    Script,
    Style,
    NoScript,
    Svg,
    Iframe,
    /// Any other element, keeping its lowercase name
    Other(String),
}

impl Tag {
    /// Resolve a tag name (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" => Tag::Paragraph,
            "br" => Tag::LineBreak,
            "strong" => Tag::Strong,
            "b" => Tag::Bold,
            "em" => Tag::Emphasis,
            "i" => Tag::Italic,
            "code" => Tag::Code,
            "pre" => Tag::Pre,
            "blockquote" => Tag::Blockquote,
            "a" => Tag::Anchor,
            "img" => Tag::Image,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "hr" => Tag::HorizontalRule,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "th" => Tag::TableHeaderCell,
            "td" => Tag::TableCell,
            "sup" => Tag::Superscript,
            "sub" => Tag::Subscript,
            "div" => Tag::Div,
            "span" => Tag::Span,
            "script" => Tag::Script,
            "style" => Tag::Style,
            "noscript" => Tag::NoScript,
            "svg" => Tag::Svg,
            "iframe" => Tag::Iframe,
            _ => Tag::Other(name),
        }
    }

    /// Lowercase tag name
    pub fn name(&self) -> &str {
        match self {
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6",
            Tag::Paragraph => "p",
            Tag::LineBreak => "br",
            Tag::Strong => "strong",
            Tag::Bold => "b",
            Tag::Emphasis => "em",
            Tag::Italic => "i",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::Blockquote => "blockquote",
            Tag::Anchor => "a",
            Tag::Image => "img",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::HorizontalRule => "hr",
            Tag::Table => "table",
            Tag::TableRow => "tr",
            Tag::TableHeaderCell => "th",
            Tag::TableCell => "td",
            Tag::Superscript => "sup",
            Tag::Subscript => "sub",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Script => "script",
            Tag::Style => "style",
            Tag::NoScript => "noscript",
            Tag::Svg => "svg",
            Tag::Iframe => "iframe",
            Tag::Other(name) => name.as_str(),
        }
    }

    /// Elements that never carry selectable content
    pub fn is_non_content(&self) -> bool {
        matches!(
            self,
            Tag::Script | Tag::Style | Tag::NoScript | Tag::Svg | Tag::Iframe
        )
    }
}

/// A node in the converter's working tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type (element, text, comment, fragment)
    pub node_type: NodeType,

    /// Resolved tag, only present for element nodes
    pub tag: Option<Tag>,

    /// Text for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order, names lowercased
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: Some(Tag::from_name(tag_name)),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag: None,
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            tag: None,
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            tag: None,
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is a comment node
    pub fn is_comment(&self) -> bool {
        self.node_type == NodeType::Comment
    }

    /// The resolved tag for element nodes
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Check the element kind
    pub fn is(&self, tag: &Tag) -> bool {
        self.tag.as_ref() == Some(tag)
    }

    /// Get the tag name (lowercase), empty for non-elements
    pub fn tag_name(&self) -> &str {
        self.tag.as_ref().map(Tag::name).unwrap_or("")
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        // stored names are lowercase
        let value = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.attributes.get(name.to_ascii_lowercase().as_str())
        } else {
            self.attributes.get(name)
        };
        value.map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Class markers from the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Check for a class marker
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All nodes below this one in document order (pre-order), excluding self
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant element of the given kind
    pub fn find_descendant(&self, tag: &Tag) -> Option<&Node> {
        self.descendants().find(|n| n.is(tag))
    }

    /// Text of every comment below this node, in document order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.descendants()
            .filter(|n| n.is_comment())
            .filter_map(|n| n.node_value.as_deref())
    }

    /// Get all text content from this node and descendants.
    ///
    /// Comments do not contribute, matching the DOM `textContent` of an element.
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment => String::new(),
            _ => {
                let mut out = String::new();
                for node in self.descendants().filter(|n| n.is_text()) {
                    out.push_str(node.node_value.as_deref().unwrap_or(""));
                }
                out
            }
        }
    }
}

/// Pre-order iterator over a subtree, see [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A reference to a node with parent context.
/// This allows navigation up the tree without storing parent pointers.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent_tag: Option<&'a Tag>,
}

impl<'a> NodeRef<'a> {
    /// Create a new NodeRef without parent context
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            parent_tag: None,
        }
    }

    /// Create a NodeRef for a child of `parent`
    pub fn child_of(node: &'a Node, parent: &'a Node) -> Self {
        Self {
            node,
            parent_tag: parent.tag(),
        }
    }

    /// Get the parent tag if known
    pub fn parent_tag(&self) -> Option<&'a Tag> {
        self.parent_tag
    }

    /// Check the parent element kind
    pub fn parent_is(&self, tag: &Tag) -> bool {
        self.parent_tag == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.tag(), Some(&Tag::Div));
    }

    #[test]
    fn test_unknown_tag_keeps_name() {
        let node = Node::element("Section");
        assert_eq!(node.tag(), Some(&Tag::Other("section".to_string())));
        assert_eq!(node.tag_name(), "section");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let name = format!("h{level}");
            let tag = Tag::from_name(&name);
            assert_eq!(tag, Tag::Heading(level));
            assert_eq!(tag.name(), name);
        }
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), "");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("HREF", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("Title"), Some("Example"));
        assert_eq!(node.attr("TITLE"), Some("Example"));
        assert_eq!(node.attr("class"), None);
        assert!(node.attributes.keys().all(|k| k == &k.to_ascii_lowercase()));
    }

    #[test]
    fn test_classes() {
        let node = Node::element_with_attrs("span", vec![("class", " mwe-math-element  tex ")]);
        assert!(node.has_class("tex"));
        assert!(node.has_class("mwe-math-element"));
        assert!(!node.has_class("math"));
        assert_eq!(node.classes().count(), 2);
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::comment("note"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().count(), 4);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let tree = Node::element("div")
            .with_child(Node::element("p").with_child(Node::text("a")))
            .with_child(Node::element("span").with_child(Node::text("b")));

        let names: Vec<&str> = tree
            .descendants()
            .map(|n| {
                if n.is_text() {
                    n.node_value.as_deref().unwrap_or("")
                } else {
                    n.tag_name()
                }
            })
            .collect();
        assert_eq!(names, vec!["p", "a", "span", "b"]);
    }

    #[test]
    fn test_text_content_skips_comments() {
        let div = Node::element("div")
            .with_child(Node::text("Hello "))
            .with_child(Node::comment("hidden"))
            .with_child(Node::element("span").with_child(Node::text("World")));

        assert_eq!(div.text_content(), "Hello World");
        assert_eq!(div.comments().collect::<Vec<_>>(), vec!["hidden"]);
    }

    #[test]
    fn test_find_descendant() {
        let pre = Node::element("pre").with_child(
            Node::element_with_attrs("code", vec![("class", "language-rust")])
                .with_child(Node::text("fn main() {}")),
        );
        let code = pre.find_descendant(&Tag::Code).unwrap();
        assert_eq!(code.attr("class"), Some("language-rust"));
        assert!(pre.find_descendant(&Tag::Image).is_none());
    }

    #[test]
    fn test_node_ref_parent() {
        let pre = Node::element("pre").with_child(Node::element("code"));
        let code = &pre.children[0];
        let node_ref = NodeRef::child_of(code, &pre);
        assert!(node_ref.parent_is(&Tag::Pre));
        assert!(NodeRef::new(code).parent_tag().is_none());
    }
}
