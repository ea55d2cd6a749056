//! Render - HTML Serialisation

use std::fmt::Write;

use super::node::{Element, Node};
use crate::helpers::{escape_attr, escape_text};

impl Node {
    /// Serialise this tree to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

/// Serialise a sequence of nodes
pub fn render_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Raw(raw) => out.push_str(raw),
        Node::Fragment(nodes) => {
            for child in nodes {
                write_node(out, child);
            }
        }
    }
}

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in el.attrs.iter() {
        if value.is_empty() && name != "class" && name != "style" {
            // Boolean attribute
            let _ = write!(out, " {name}");
        } else {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_nested_elements() {
        let html = Node::element("nav")
            .attr("aria-label", "Breadcrumb")
            .child(Node::element("a").attr("href", "/?q=\"x\"").text("Home & away"))
            .to_html();
        assert_eq!(
            html,
            r#"<nav aria-label="Breadcrumb"><a href="/?q=&quot;x&quot;">Home &amp; away</a></nav>"#
        );
    }

    #[test]
    fn boolean_attributes_render_bare() {
        let html = Node::element("glint-button").flag("disabled", true).to_html();
        assert_eq!(html, "<glint-button disabled></glint-button>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let html = Node::element("meta").attr("charset", "utf-8").to_html();
        assert_eq!(html, r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn raw_is_not_escaped() {
        let html = Node::element("style")
            .child(Node::Raw(":host > .a { color: red; }".into()))
            .to_html();
        assert_eq!(html, "<style>:host > .a { color: red; }</style>");
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = Node::element("div").class("a").text("x");
        assert_eq!(tree.to_html(), tree.clone().to_html());
        assert_eq!(render_nodes([&tree, &tree]), format!("{0}{0}", tree.to_html()));
    }
}
