//! # Element Tree
//!
//! A small owned element tree standing in for the browser DOM. Renderers
//! look containers up by id, replace or remove children, and toggle classes;
//! [`Document::to_html`] serializes the tree deterministically (attributes in
//! insertion order, classes space-joined, text escaped).

use std::fmt::Write as _;

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Escaped text.
    Text(String),
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

const VOID_TAGS: &[&str] = &["input", "meta", "br", "hr", "img", "link"];

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    // -- builders ------------------------------------------------------------

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more space-separated classes.
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an inline style property.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Append a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append an element child.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append several element children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.append_children(children);
        self
    }

    // -- accessors -----------------------------------------------------------

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the element carries a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class (no duplicate).
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class.
    pub fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.attrs, name.into(), value.into());
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// Inline style value.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an inline style property.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.styles, property.into(), value.into());
    }

    /// Child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Element children only.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // -- mutation ------------------------------------------------------------

    /// Replace all children with one text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Remove all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Append one child.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a batch of children in one step.
    pub fn append_children(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children
            .extend(children.into_iter().map(Node::Element));
    }

    /// Replace all children.
    pub fn replace_children(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.clear();
        self.append_children(children);
    }

    /// Remove every direct child carrying `class`. Returns the count removed.
    pub fn remove_children_with_class(&mut self, class: &str) -> usize {
        let before = self.children.len();
        self.children
            .retain(|n| !matches!(n, Node::Element(e) if e.has_class(class)));
        before - self.children.len()
    }

    // -- queries -------------------------------------------------------------

    /// Find a descendant (or self) by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    /// Mutable [`find_by_id`](Self::find_by_id).
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) => e.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// All descendants (and self) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_class(self, class, &mut out);
        out
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        write_element(self, &mut out);
        out
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => pairs.push((key, value)),
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

fn collect_class<'a>(element: &'a Element, class: &str, out: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect_class(child, class, out);
    }
}

fn write_element(e: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&e.tag);
    if let Some(id) = &e.id {
        let _ = write!(out, " id=\"{}\"", esc(id));
    }
    if !e.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", esc(&e.classes.join(" ")));
    }
    for (k, v) in &e.attrs {
        let _ = write!(out, " {}=\"{}\"", k, esc(v));
    }
    if !e.styles.is_empty() {
        let style: Vec<String> = e.styles.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        let _ = write!(out, " style=\"{}\"", esc(&style.join("; ")));
    }
    out.push('>');
    if VOID_TAGS.contains(&e.tag.as_str()) {
        return;
    }
    for node in &e.children {
        match node {
            Node::Text(t) => out.push_str(&esc(t)),
            Node::Element(child) => write_element(child, out),
        }
    }
    let _ = write!(out, "</{}>", e.tag);
}

/// Escape text for HTML content and attribute values.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A page: `<html>` root plus document title and inline stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    stylesheet: &'static str,
    root: Element,
}

impl Document {
    /// Create a document around a `<body>` element.
    pub fn new(title: impl Into<String>, stylesheet: &'static str, body: Element) -> Self {
        Self {
            title: title.into(),
            stylesheet,
            root: Element::new("html")
                .with_attr("lang", "en")
                .with_attr("data-theme", "light")
                .with_child(body),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable `<html>` element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    /// Mutable element by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Element by id, logging a warning when it is missing.
    pub fn require_mut(&mut self, id: &str) -> Option<&mut Element> {
        let found = self.root.find_by_id_mut(id);
        if found.is_none() {
            tracing::warn!(id, "element not found");
        }
        found
    }

    /// The `<body>` element.
    pub fn body_mut(&mut self) -> Option<&mut Element> {
        self.root.children.iter_mut().find_map(|n| match n {
            Node::Element(e) if e.tag == "body" => Some(e),
            _ => None,
        })
    }

    /// Serialize as a standalone HTML document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        // Head is emitted inline so the tree only models the body.
        let html = self.root.to_html();
        let head = format!(
            "<head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><style>{}</style></head>",
            esc(&self.title),
            self.stylesheet
        );
        match html.find('>') {
            Some(open_end) => {
                out.push_str(&html[..=open_end]);
                out.push_str(&head);
                out.push_str(&html[open_end + 1..]);
            }
            None => out.push_str(&html),
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_id("root")
            .with_child(
                Element::new("span")
                    .with_class("a b")
                    .with_text("x < y"),
            )
            .with_child(Element::new("span").with_class("b").with_id("inner"))
    }

    #[test]
    fn serializes_deterministically_with_escaping() {
        let e = sample().with_attr("data-x", "\"q\"").with_style("left", "10%");
        assert_eq!(
            e.to_html(),
            "<div id=\"root\" data-x=\"&quot;q&quot;\" style=\"left: 10%\"><span class=\"a b\">x &lt; y</span><span id=\"inner\" class=\"b\"></span></div>"
        );
    }

    #[test]
    fn finds_by_id_and_class() {
        let mut e = sample();
        assert!(e.find_by_id("inner").is_some());
        assert!(e.find_by_id("missing").is_none());
        assert_eq!(e.find_by_class("b").len(), 2);
        e.find_by_id_mut("inner").unwrap().set_text("hi");
        assert_eq!(e.text_content(), "x < yhi");
    }

    #[test]
    fn removes_children_by_class() {
        let mut e = sample();
        assert_eq!(e.remove_children_with_class("a"), 1);
        assert_eq!(e.child_elements().count(), 1);
        assert_eq!(e.remove_children_with_class("zzz"), 0);
    }

    #[test]
    fn classes_do_not_duplicate() {
        let mut e = Element::new("div").with_class("x x");
        e.add_class("x");
        assert_eq!(e.classes(), &["x".to_string()]);
        e.set_class("x", false);
        assert!(!e.has_class("x"));
    }

    #[test]
    fn attrs_and_styles_replace_in_place() {
        let mut e = Element::new("div").with_attr("a", "1").with_style("top", "1%");
        e.set_attr("a", "2");
        e.set_style("top", "2%");
        assert_eq!(e.attr("a"), Some("2"));
        assert_eq!(e.style("top"), Some("2%"));
        assert_eq!(e.to_html(), "<div a=\"2\" style=\"top: 2%\"></div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let e = Element::new("input").with_attr("type", "range");
        assert_eq!(e.to_html(), "<input type=\"range\">");
    }

    #[test]
    fn document_injects_head() {
        let doc = Document::new("T & U", "body{}", Element::new("body"));
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"light\"><head>"));
        assert!(html.contains("<title>T &amp; U</title><style>body{}</style></head><body></body></html>"));
    }

    #[test]
    fn require_mut_returns_none_for_missing() {
        let mut doc = Document::new("t", "", Element::new("body"));
        assert!(doc.require_mut("nope").is_none());
        assert!(doc.body_mut().is_some());
    }
}
