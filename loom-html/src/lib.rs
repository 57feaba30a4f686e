//! Markup generation for loom.
//!
//! Build a tree of [`HtmlNode`]s with the fluent [`ElementBuilder`] methods,
//! then render it with [`HtmlNode::to_html`]. The [`table`] module renders
//! tables either from concrete rows or as a Razor `@foreach` template.
//!
//! # Example
//!
//! ```
//! use loomgen_html::{DivElement, ElementBuilder, HtmlNode, SpanElement};
//!
//! let html = DivElement::new()
//!     .add_attribute("id", "greeting")
//!     .add_child(SpanElement::new().set_inner_html("hi"))
//!     .to_html(0);
//!
//! assert_eq!(html, "<div id=\"greeting\">\n  <span>hi</span>\n</div>\n");
//! ```

mod element;
mod node;
mod presets;

pub mod table;

pub use element::{Attributes, ElementBuilder, HtmlElement};
pub use node::{ClosingTag, HtmlNode, render};
pub use presets::{ButtonElement, DivElement, InputElement, SpanElement};
pub use table::{
    Accessors, CellValue, RowControls, RowSource, TableElement, TableHeader, TableOptions,
    create_html_table, create_html_table_with, create_razor_table,
};
