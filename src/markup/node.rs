//! Node - Markup Tree Description

use hashlink::LinkedHashMap;

/// Ordered attribute map. Re-setting a key keeps its original position.
pub type Attributes = LinkedHashMap<String, String>;

/// A node in a rendered markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),
    /// Escaped text content
    Text(String),
    /// Trusted content emitted verbatim (stylesheets)
    Raw(String),
    /// A list of siblings without a wrapping element
    Fragment(Vec<Node>),
}

/// An element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        })
    }

    /// Create a text node
    pub fn text_node(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Create an empty fragment
    pub fn fragment() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Set an attribute (no-op on non-element nodes)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            el.set_attr(name, value);
        }
        self
    }

    /// Set an attribute only when a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Set a boolean attribute when `on` is true
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    /// Append a class to the `class` attribute
    pub fn class(mut self, class: &str) -> Self {
        if let Node::Element(el) = &mut self {
            el.add_class(class);
        }
        self
    }

    /// Append a class when `on` is true
    pub fn class_if(self, class: &str, on: bool) -> Self {
        if on { self.class(class) } else { self }
    }

    /// Append a child node
    pub fn child(mut self, child: Node) -> Self {
        match &mut self {
            Node::Element(el) => el.children.push(child),
            Node::Fragment(nodes) => nodes.push(child),
            _ => {}
        }
        self
    }

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ==================== Queries ====================

    /// The element payload, if this is an element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Attribute value on an element node
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|el| el.attr(name))
    }

    /// Whether this element carries the given class
    pub fn has_class(&self, class: &str) -> bool {
        self.as_element().is_some_and(|el| el.has_class(class))
    }

    /// Tag name for element nodes
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }

    fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Fragment(nodes) => nodes,
            _ => &[],
        }
    }

    /// Depth-first iterator over all nodes below this one (excluding self)
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.child_nodes().iter().rev().collect(),
        }
    }

    /// All descendant nodes matching `pred`, in document order
    pub fn find_all(&self, pred: impl Fn(&Node) -> bool) -> Vec<&Node> {
        self.descendants().filter(|n| pred(n)).collect()
    }

    /// All descendant elements carrying `class`
    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        self.find_all(|n| n.has_class(class))
    }

    /// First descendant element carrying `class`
    pub fn first_by_class(&self, class: &str) -> Option<&Node> {
        self.descendants().find(|n| n.has_class(class))
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        if let Node::Text(t) = self {
            out.push_str(t);
        }
        for node in self.descendants() {
            if let Node::Text(t) = node {
                out.push_str(t);
            }
        }
        out
    }
}

impl Element {
    /// Set or replace an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.get_mut(&name) {
            Some(existing) => *existing = value,
            None => {
                self.attrs.insert(name, value);
            }
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Add a class, skipping duplicates
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let next = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", next);
    }

    /// Whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let node = Node::element("div")
            .attr("id", "a")
            .attr("role", "img")
            .attr("id", "b");
        let el = node.as_element().expect("element");
        let keys: Vec<_> = el.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "role"]);
        assert_eq!(node.get_attr("id"), Some("b"));
    }

    #[test]
    fn classes_are_deduplicated() {
        let node = Node::element("span").class("a").class("b").class("a");
        assert_eq!(node.get_attr("class"), Some("a b"));
        assert!(node.has_class("b"));
        assert!(!node.has_class("c"));
    }

    #[test]
    fn descendants_are_document_order() {
        let tree = Node::element("ol")
            .child(Node::element("li").class("x").text("one"))
            .child(Node::fragment().child(Node::element("li").class("x").text("two")));
        let found = tree.find_by_class("x");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text_content(), "one");
        assert_eq!(found[1].text_content(), "two");
        assert_eq!(tree.text_content(), "onetwo");
    }

    #[test]
    fn flag_and_optional_attrs() {
        let node = Node::element("a")
            .flag("hidden", false)
            .flag("inert", true)
            .attr_opt("href", None::<String>)
            .attr_opt("title", Some("t"));
        assert_eq!(node.get_attr("hidden"), None);
        assert_eq!(node.get_attr("inert"), Some(""));
        assert_eq!(node.get_attr("href"), None);
        assert_eq!(node.get_attr("title"), Some("t"));
    }
}
