//! A small element tree for composing pages server-side.

/// Elements that close themselves and never take children.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One node of a composed page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Literal text, escaped when serialized.
    Text(String),
    /// Pre-rendered markup, serialized verbatim.
    Raw(String),
}

impl Node {
    /// Serializes this node and its children to an HTML string.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with attributes and children, built fluently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    /// Attribute name and value; a `None` value renders a bare attribute.
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with the given tag and no attributes or children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute. Values are escaped when serialized.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Some(value.into())));
        self
    }

    /// Sets a bare boolean attribute such as `checked`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), None));
        self
    }

    /// Adds a class, merging with any classes already set.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if let Some((_, Some(existing))) = self.attrs.iter_mut().find(|(name, _)| name == "class")
        {
            existing.push(' ');
            existing.push_str(&class);
            return self;
        }
        self.attr("class", class)
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        if VOID_ELEMENTS.contains(&self.tag) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_nested_elements() {
        let tree: Node = Element::new("div")
            .attr("id", "app")
            .child(Element::new("p").text("hello"))
            .into();

        assert_eq!(tree.render_to_string(), "<div id=\"app\"><p>hello</p></div>");
    }

    #[test]
    fn test_escapes_text_content() {
        let tree: Node = Element::new("p").text("a < b & c > d").into();

        assert_eq!(
            tree.render_to_string(),
            "<p>a &lt; b &amp; c &gt; d</p>"
        );
    }

    #[test]
    fn test_escapes_attribute_values() {
        let tree: Node = Element::new("a")
            .attr("href", "https://example.com/?a=1&b=\"2\"")
            .into();

        assert_eq!(
            tree.render_to_string(),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\"></a>"
        );
    }

    #[test]
    fn test_void_elements_self_close() {
        let tree: Node = Element::new("input")
            .attr("type", "checkbox")
            .flag("checked")
            .into();

        assert_eq!(tree.render_to_string(), "<input type=\"checkbox\" checked/>");
    }

    #[test]
    fn test_class_calls_merge() {
        let tree: Node = Element::new("div").class("css-abc").class("css-def").into();

        assert_eq!(
            tree.render_to_string(),
            "<div class=\"css-abc css-def\"></div>"
        );
    }

    #[test]
    fn test_text_node_renders_alone() {
        assert_eq!(
            Node::Text("plain & text".to_string()).render_to_string(),
            "plain &amp; text"
        );
    }

    #[test]
    fn test_raw_markup_passes_through_unescaped() {
        let tree: Node = Element::new("div")
            .child(Node::Raw("<b>&copy;</b>".to_string()))
            .into();

        assert_eq!(tree.render_to_string(), "<div><b>&copy;</b></div>");
    }
}
