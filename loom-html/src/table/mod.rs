//! Table generation.
//!
//! Tables come in two modes sharing the same [`TableHeader`] columns:
//!
//! - Static: one `<tr>` per data row, cells looked up by binding path through
//!   a [`RowSource`] or a typed [`Accessors`] table.
//! - Razor: the body is a `@foreach` template over a caller-supplied items
//!   expression, with one `<td>@item.Path</td>` per iterated column.

mod cell;
mod element;
mod header;

pub use cell::{Accessors, CellValue, RowSource};
pub use element::{
    RowControls, TableElement, TableOptions, create_html_table, create_html_table_with,
    create_razor_table,
};
pub use header::TableHeader;
