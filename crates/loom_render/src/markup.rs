//! Structural markup tree
//!
//! Renderers produce [`Node`]s rather than strings so composition can wrap,
//! inspect and count outputs before anything is serialized. The exact tag
//! shape is a presentation detail; the `data-*` hints are what the style
//! layer keys off.
//!
//! ```rust
//! use loom_render::markup::el;
//!
//! let node = el("a").attr("href", "/about").data("variant", "primary").text("About");
//! assert_eq!(
//!     node.to_html(),
//!     r#"<a href="/about" data-variant="primary">About</a>"#
//! );
//! ```

use indexmap::IndexMap;

/// Elements that never have a closing tag
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "source", "track", "wbr"];

/// A node in the rendered output
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Renders to nothing; used as the placeholder for a block that produced no output
    #[default]
    Empty,
}

/// An element with ordered attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`<video muted>`) when `on` is true
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Set a `data-<name>` render hint
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn get_data(&self, name: &str) -> Option<&str> {
        self.get_attr(&format!("data-{name}"))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn into_child_nodes(self) -> Vec<Node> {
        self.children
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(t),
        Node::Element(e) => {
            for child in &e.children {
                collect_text(child, out);
            }
        }
        Node::Empty => {}
    }
}

impl Node {
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Depth-first visit of this node and all descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Element(e) = self {
            for child in &e.children {
                child.walk(visit);
            }
        }
    }

    /// All elements (including this one) carrying `data-<name>`, in document order
    pub fn elements_with_data(&self, name: &str) -> Vec<&Element> {
        let attr = format!("data-{name}");
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Node::Element(e) = node {
                if e.attrs.contains_key(&attr) {
                    found.push(e);
                }
            }
        });
        found
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.write_html(out),
            Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
            Node::Empty => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Element {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let node: Node = el("p")
            .attr("title", "a \"quoted\" <value>")
            .text("1 < 2 & 3 > 2")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<p title="a &quot;quoted&quot; &lt;value&gt;">1 &lt; 2 &amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_void_and_flags() {
        let img = el("img").attr("src", "/a.png").flag("hidden", true).flag("loop", false);
        assert_eq!(img.to_html(), r#"<img src="/a.png" hidden>"#);
    }

    #[test]
    fn test_empty_renders_nothing() {
        let wrapper = el("div").child(Node::Empty).text("x");
        assert_eq!(wrapper.to_html(), "<div>x</div>");
        assert!(Node::Empty.is_empty());
        assert_eq!(Node::default(), Node::Empty);
    }

    #[test]
    fn test_attr_replaces_in_place() {
        let e = el("div").attr("a", "1").attr("b", "2").attr("a", "3");
        assert_eq!(e.to_html(), r#"<div a="3" b="2"></div>"#);
        assert_eq!(e.get_attr("a"), Some("3"));
    }

    #[test]
    fn test_inspection() {
        let tree: Node = el("main")
            .data("page", "home")
            .child(el("section").data("section", "s1").child(el("p").text("one")))
            .child(el("section").data("section", "s2").child(el("p").text("two")))
            .into();

        let sections = tree.elements_with_data("section");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].get_data("section"), Some("s2"));
        assert_eq!(tree.as_element().unwrap().text_content(), "onetwo");
    }
}
