//! Element presets with a fixed tag name and default attributes.

use crate::{Attributes, ClosingTag, ElementBuilder, HtmlElement, HtmlNode};

macro_rules! preset {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $ty(HtmlElement);

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$ty> for HtmlElement {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl ElementBuilder for $ty {
            fn element_mut(&mut self) -> &mut HtmlElement {
                &mut self.0
            }
        }

        impl HtmlNode for $ty {
            fn name(&self) -> &str {
                self.0.name()
            }

            fn attributes(&self) -> &Attributes {
                self.0.attributes()
            }

            fn closing_tag(&self) -> ClosingTag {
                self.0.closing_tag()
            }

            fn inner_html(&self) -> Option<&str> {
                self.0.inner_html()
            }

            fn children(&self) -> &[Box<dyn HtmlNode>] {
                self.0.children()
            }
        }
    };
}

preset! {
    /// `<div>`
    DivElement
}

preset! {
    /// `<span>`
    SpanElement
}

preset! {
    /// `<input type="text">`, written without a closing tag.
    InputElement
}

preset! {
    /// `<button type="button">`
    ButtonElement
}

impl DivElement {
    pub fn new() -> Self {
        Self(HtmlElement::new("div"))
    }
}

impl SpanElement {
    pub fn new() -> Self {
        Self(HtmlElement::new("span"))
    }
}

impl InputElement {
    pub fn new() -> Self {
        Self(
            HtmlElement::new("input")
                .add_attribute("type", "text")
                .with_closing_tag(ClosingTag::None),
        )
    }

    /// Replace the default `type="text"`.
    pub fn with_type(self, ty: impl Into<String>) -> Self {
        self.add_attribute("type", ty)
    }
}

impl ButtonElement {
    pub fn new() -> Self {
        Self(HtmlElement::new("button").add_attribute("type", "button"))
    }

    /// A `type="submit"` button.
    pub fn submit() -> Self {
        Self::new().add_attribute("type", "submit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults() {
        let html = InputElement::new().add_attribute("name", "title").to_html(0);
        assert_eq!(html, "<input type=\"text\" name=\"title\">\n");
    }

    #[test]
    fn test_input_with_type_keeps_position() {
        let html = InputElement::new()
            .add_attribute("id", "pw")
            .with_type("password")
            .to_html(0);
        assert_eq!(html, "<input type=\"password\" id=\"pw\">\n");
    }

    #[test]
    fn test_button() {
        let html = ButtonElement::new()
            .add_attribute("class", "btn")
            .set_inner_html("Save")
            .to_html(0);
        assert_eq!(html, "<button type=\"button\" class=\"btn\">Save</button>\n");

        let submit = ButtonElement::submit();
        assert_eq!(submit.attributes().get("type"), Some(&Some("submit".to_string())));
    }

    #[test]
    fn test_presets_nest() {
        let html = DivElement::new()
            .add_attribute("class", "field")
            .add_child(SpanElement::new().set_inner_html("Title"))
            .add_child(InputElement::new())
            .to_html(0);

        assert_eq!(
            html,
            "<div class=\"field\">\n  <span>Title</span>\n  <input type=\"text\">\n</div>\n"
        );
    }
}
