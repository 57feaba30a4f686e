//! Markup node contract and the recursive renderer.

use std::fmt;

use loomgen_codegen::CodeBuilder;

use crate::Attributes;

/// How an element's closing tag is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosingTag {
    /// `<p>...</p>`
    #[default]
    Full,
    /// `<br />`, never has content.
    Slash,
    /// `<input>`, content (if any) follows with no closing tag.
    None,
}

/// A node in a markup tree.
///
/// Nodes that know how to render themselves return their text from
/// [`HtmlNode::own_statement`]; the renderer then uses it as-is and ignores
/// every other property of the node.
pub trait HtmlNode: fmt::Debug {
    /// Tag name.
    fn name(&self) -> &str;

    /// Attributes in insertion order. `None` values render as bare keys.
    fn attributes(&self) -> &Attributes;

    fn closing_tag(&self) -> ClosingTag {
        ClosingTag::Full
    }

    fn inner_html(&self) -> Option<&str> {
        None
    }

    fn children(&self) -> &[Box<dyn HtmlNode>] {
        &[]
    }

    /// Self-rendered markup, if the node renders itself.
    fn own_statement(&self, _indent: usize) -> Option<String> {
        None
    }

    /// Render this node and its children, starting at the given indent level.
    fn to_html(&self, indent: usize) -> String {
        render(self, indent)
    }
}

impl<T: HtmlNode + ?Sized> HtmlNode for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attributes(&self) -> &Attributes {
        (**self).attributes()
    }

    fn closing_tag(&self) -> ClosingTag {
        (**self).closing_tag()
    }

    fn inner_html(&self) -> Option<&str> {
        (**self).inner_html()
    }

    fn children(&self) -> &[Box<dyn HtmlNode>] {
        (**self).children()
    }

    fn own_statement(&self, indent: usize) -> Option<String> {
        (**self).own_statement(indent)
    }

    fn to_html(&self, indent: usize) -> String {
        (**self).to_html(indent)
    }
}

/// Render a node as markup.
///
/// A node without children renders on one line, with its inner html written
/// between the tags exactly as given. A node with children puts the opening
/// tag, each child (one level deeper) and the closing tag on their own lines,
/// with the inner html written unchanged after the last child.
pub fn render<N: HtmlNode + ?Sized>(node: &N, indent: usize) -> String {
    if let Some(statement) = node.own_statement(indent) {
        return statement;
    }

    let open = opening_tag(node);
    let mut builder = CodeBuilder::markup().at_level(indent);

    if node.closing_tag() == ClosingTag::Slash {
        builder.push_line(&open);
        return builder.build();
    }

    let close = match node.closing_tag() {
        ClosingTag::Full => format!("</{}>", node.name()),
        _ => String::new(),
    };

    let inner = node.inner_html().unwrap_or_default();
    let children = node.children();
    if children.is_empty() {
        builder.push_line(&format!("{}{}{}", open, inner, close));
        return builder.build();
    }

    builder.push_line(&open);
    let mut out = builder.build();
    for child in children {
        out.push_str(&child.to_html(indent + 1));
    }

    if !inner.is_empty() {
        out.push_str(inner);
        if !inner.ends_with('\n') {
            out.push('\n');
        }
    }
    if !close.is_empty() {
        let mut builder = CodeBuilder::markup().at_level(indent);
        builder.push_line(&close);
        out.push_str(builder.as_str());
    }
    out
}

fn opening_tag<N: HtmlNode + ?Sized>(node: &N) -> String {
    let mut tag = format!("<{}", node.name());
    for (key, value) in node.attributes() {
        match value {
            Some(value) => tag.push_str(&format!(" {}=\"{}\"", key, value)),
            None => {
                tag.push(' ');
                tag.push_str(key);
            }
        }
    }
    if node.closing_tag() == ClosingTag::Slash {
        tag.push_str(" />");
    } else {
        tag.push('>');
    }
    tag
}
