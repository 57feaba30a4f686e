//! Generic markup element and its fluent builder surface.

use indexmap::IndexMap;

use crate::{ClosingTag, HtmlNode};

/// Element attributes in insertion order. `None` values are bare attributes.
pub type Attributes = IndexMap<String, Option<String>>;

/// A markup element with attributes, children and optional raw content.
#[derive(Debug, Default)]
pub struct HtmlElement {
    name: String,
    attributes: Attributes,
    closing_tag: ClosingTag,
    inner_html: Option<String>,
    children: Vec<Box<dyn HtmlNode>>,
}

impl HtmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Set an attribute (mutable).
    ///
    /// Setting a key that is already present replaces its value and keeps its
    /// original position.
    pub fn push_attribute(&mut self, key: impl Into<String>, value: Option<String>) -> &mut Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Remove an attribute and return its value, keeping the order of the
    /// others.
    pub fn take_attribute(&mut self, key: &str) -> Option<Option<String>> {
        self.attributes.shift_remove(key)
    }

    /// Append a child node (mutable).
    pub fn push_child(&mut self, child: Box<dyn HtmlNode>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Remove the child at `index`, if there is one.
    pub fn take_child(&mut self, index: usize) -> Option<Box<dyn HtmlNode>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn set_closing_tag(&mut self, closing_tag: ClosingTag) -> &mut Self {
        self.closing_tag = closing_tag;
        self
    }

    pub fn set_inner(&mut self, html: Option<String>) -> &mut Self {
        self.inner_html = html;
        self
    }

    pub fn attribute(&self, key: &str) -> Option<Option<&str>> {
        self.attributes.get(key).map(Option::as_deref)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl HtmlNode for HtmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn closing_tag(&self) -> ClosingTag {
        self.closing_tag
    }

    fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    fn children(&self) -> &[Box<dyn HtmlNode>] {
        &self.children
    }
}

/// Fluent builder methods shared by [`HtmlElement`] and the element presets.
///
/// Every method consumes and returns the concrete type, so presets keep their
/// own type through a chain.
pub trait ElementBuilder: Sized {
    fn element_mut(&mut self) -> &mut HtmlElement;

    fn add_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_mut().push_attribute(key, Some(value.into()));
        self
    }

    /// Add an attribute with no value, such as `disabled`.
    fn add_bare_attribute(mut self, key: impl Into<String>) -> Self {
        self.element_mut().push_attribute(key, None);
        self
    }

    fn remove_attribute(mut self, key: &str) -> Self {
        self.element_mut().take_attribute(key);
        self
    }

    fn add_child(mut self, child: impl HtmlNode + 'static) -> Self {
        self.element_mut().push_child(Box::new(child));
        self
    }

    /// Remove the child at `index`. Out-of-range indices are ignored.
    fn remove_child(mut self, index: usize) -> Self {
        self.element_mut().take_child(index);
        self
    }

    fn set_inner_html(mut self, html: impl Into<String>) -> Self {
        self.element_mut().set_inner(Some(html.into()));
        self
    }

    fn with_closing_tag(mut self, closing_tag: ClosingTag) -> Self {
        self.element_mut().set_closing_tag(closing_tag);
        self
    }
}

impl ElementBuilder for HtmlElement {
    fn element_mut(&mut self) -> &mut HtmlElement {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_with_inner_html() {
        let html = HtmlElement::new("div")
            .add_attribute("id", "x")
            .set_inner_html("hi")
            .to_html(0);
        assert_eq!(html, "<div id=\"x\">hi</div>\n");
    }

    #[test]
    fn test_duplicate_attribute_overwrites_in_place() {
        let el = HtmlElement::new("a")
            .add_attribute("href", "/a")
            .add_attribute("class", "link")
            .add_attribute("href", "/b");

        let keys: Vec<_> = el.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["href", "class"]);
        assert_eq!(el.attribute("href"), Some(Some("/b")));
        assert_eq!(el.to_html(0), "<a href=\"/b\" class=\"link\"></a>\n");
    }

    #[test]
    fn test_bare_and_removed_attributes() {
        let html = HtmlElement::new("input")
            .add_attribute("type", "checkbox")
            .add_attribute("name", "agree")
            .add_bare_attribute("checked")
            .remove_attribute("name")
            .with_closing_tag(ClosingTag::None)
            .to_html(0);
        assert_eq!(html, "<input type=\"checkbox\" checked>\n");
    }

    #[test]
    fn test_slash_closing_ignores_content() {
        let html = HtmlElement::new("br")
            .set_inner_html("ignored")
            .with_closing_tag(ClosingTag::Slash)
            .to_html(0);
        assert_eq!(html, "<br />\n");
    }

    #[test]
    fn test_children_render_one_level_deeper() {
        let html = HtmlElement::new("ul")
            .add_child(HtmlElement::new("li").set_inner_html("one"))
            .add_child(
                HtmlElement::new("li")
                    .add_child(HtmlElement::new("b").set_inner_html("two")),
            )
            .to_html(1);

        assert_eq!(
            html,
            "  <ul>\n    <li>one</li>\n    <li>\n      <b>two</b>\n    </li>\n  </ul>\n"
        );
    }

    #[test]
    fn test_inner_html_follows_children() {
        let html = HtmlElement::new("p")
            .add_child(HtmlElement::new("br").with_closing_tag(ClosingTag::Slash))
            .set_inner_html("text")
            .to_html(0);
        assert_eq!(html, "<p>\n  <br />\ntext\n</p>\n");
    }

    #[test]
    fn test_multiline_inner_html_is_verbatim() {
        let inner = "fn main() {\n    body();\n   \n}";
        let html = HtmlElement::new("pre").set_inner_html(inner).to_html(1);

        assert!(html.contains(inner));
        assert_eq!(html, format!("  <pre>{}</pre>\n", inner));
    }

    #[test]
    fn test_inner_html_after_children_is_verbatim() {
        let inner = "  @if (show)\n  {\n      <b>x</b>\n  }\n";
        let html = HtmlElement::new("div")
            .add_child(HtmlElement::new("hr").with_closing_tag(ClosingTag::Slash))
            .set_inner_html(inner)
            .to_html(0);
        assert_eq!(html, format!("<div>\n  <hr />\n{}</div>\n", inner));
    }

    #[test]
    fn test_remove_child() {
        let el = HtmlElement::new("div")
            .add_child(HtmlElement::new("a"))
            .add_child(HtmlElement::new("b"))
            .remove_child(0)
            .remove_child(5);

        assert_eq!(el.child_count(), 1);
        assert_eq!(el.children()[0].name(), "b");
    }
}
