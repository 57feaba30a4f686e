//! Table element and the static/Razor generators.

use loomgen_codegen::CodeBuilder;
use loomgen_core::{Error, Result};

use super::{Accessors, CellValue, RowSource, TableHeader};
use crate::{Attributes, ClosingTag, ElementBuilder, HtmlElement, HtmlNode};

/// Optional `<table>` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub border: Option<u32>,
    pub width: Option<String>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    fn apply(&self, table: &mut HtmlElement) {
        if let Some(border) = self.border {
            table.push_attribute("border", Some(border.to_string()));
        }
        if let Some(width) = &self.width {
            table.push_attribute("width", Some(width.clone()));
        }
    }
}

/// A fixed column of per-row controls appended to Razor tables.
///
/// Each control is literal markup placed in its own `<td>` on every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowControls {
    pub caption: String,
    pub controls: Vec<String>,
}

impl RowControls {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            controls: Vec::new(),
        }
    }

    pub fn control(mut self, markup: impl Into<String>) -> Self {
        self.controls.push(markup.into());
        self
    }
}

/// A `<table>` node that renders itself.
///
/// The full element tree is built up front; rendering hands it to the
/// regular renderer at the requested indent.
#[derive(Debug)]
pub struct TableElement {
    table: HtmlElement,
}

impl TableElement {
    /// Build a static table from rows of cells, one cell per column.
    pub fn from_rows(
        columns: &[TableHeader],
        rows: impl IntoIterator<Item = Vec<CellValue>>,
        options: &TableOptions,
    ) -> Self {
        let mut body = HtmlElement::new("tbody");
        for cells in rows {
            let mut tr = HtmlElement::new("tr");
            for cell in cells {
                tr.push_child(Box::new(cell_element(cell)));
            }
            body.push_child(Box::new(tr));
        }
        Self::assemble(head(columns, None), body, options)
    }

    /// Build a table whose body is a Razor `@foreach` over `items_source`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `items_source` is blank.
    pub fn razor(
        columns: &[TableHeader],
        items_source: &str,
        controls: Option<&RowControls>,
        options: &TableOptions,
    ) -> Result<Self> {
        Error::ensure_not_blank("items_source", items_source)?;
        let body = RazorBody::new(columns, items_source, controls);
        Ok(Self::assemble(head(columns, controls), body, options))
    }

    fn assemble(
        head: HtmlElement,
        body: impl HtmlNode + 'static,
        options: &TableOptions,
    ) -> Self {
        let mut table = HtmlElement::new("table");
        options.apply(&mut table);
        table.push_child(Box::new(head));
        table.push_child(Box::new(body));
        Self { table }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.table
    }
}

impl ElementBuilder for TableElement {
    fn element_mut(&mut self) -> &mut HtmlElement {
        &mut self.table
    }
}

impl HtmlNode for TableElement {
    fn name(&self) -> &str {
        self.table.name()
    }

    fn attributes(&self) -> &Attributes {
        self.table.attributes()
    }

    fn closing_tag(&self) -> ClosingTag {
        self.table.closing_tag()
    }

    fn children(&self) -> &[Box<dyn HtmlNode>] {
        self.table.children()
    }

    fn own_statement(&self, indent: usize) -> Option<String> {
        Some(self.table.to_html(indent))
    }
}

fn head(columns: &[TableHeader], controls: Option<&RowControls>) -> HtmlElement {
    let mut tr = HtmlElement::new("tr");
    let captions = columns
        .iter()
        .map(|column| column.caption.as_str())
        .chain(controls.map(|controls| controls.caption.as_str()));
    for caption in captions {
        tr.push_child(Box::new(HtmlElement::new("th").set_inner_html(caption)));
    }
    HtmlElement::new("thead").add_child(tr)
}

fn cell_element(cell: CellValue) -> HtmlElement {
    let mut td = HtmlElement::new("td");
    match cell {
        CellValue::Text(text) => {
            td.set_inner(Some(text));
        }
        CellValue::Node(node) => {
            td.push_child(node);
        }
        CellValue::Nodes(nodes) => {
            for node in nodes {
                td.push_child(node);
            }
        }
        CellValue::Unresolved => {}
    }
    td
}

/// `<tbody>` holding the `@foreach` row template.
///
/// The template is laid out at render time so it lines up with the rest of
/// the table at any depth.
#[derive(Debug)]
struct RazorBody {
    attributes: Attributes,
    items_source: String,
    cells: Vec<String>,
}

impl RazorBody {
    fn new(columns: &[TableHeader], items_source: &str, controls: Option<&RowControls>) -> Self {
        let iterated = columns
            .iter()
            .filter(|column| column.show_in_iteration)
            .map(|column| format!("<td>@item.{}</td>", column.binding_path));
        let control_cells = controls
            .into_iter()
            .flat_map(|controls| &controls.controls)
            .map(|markup| format!("<td>{}</td>", markup));

        Self {
            attributes: Attributes::new(),
            items_source: items_source.to_string(),
            cells: iterated.chain(control_cells).collect(),
        }
    }
}

impl HtmlNode for RazorBody {
    fn name(&self) -> &str {
        "tbody"
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn own_statement(&self, indent: usize) -> Option<String> {
        let statement = CodeBuilder::markup()
            .at_level(indent)
            .block_with_close("<tbody>", "</tbody>", |b: CodeBuilder| {
                b.line(&format!("@foreach (var item in {})", self.items_source))
                    .block_with_close("{", "}", |b: CodeBuilder| {
                        b.block_with_close("<tr>", "</tr>", |b: CodeBuilder| {
                            b.each(&self.cells, |b, cell| b.line(cell))
                        })
                    })
            })
            .build();
        Some(statement)
    }
}

/// Render a static table from rows looked up by binding path.
///
/// Cells whose binding does not resolve render empty.
///
/// # Example
///
/// ```
/// use loomgen_html::{TableHeader, TableOptions, create_html_table};
/// use serde_json::json;
///
/// let html = create_html_table(
///     &[TableHeader::new("Name", "Name")],
///     &[json!({ "Name": "Ann" })],
///     &TableOptions::default(),
/// );
/// assert_eq!(html.matches("<th>Name</th>").count(), 1);
/// assert_eq!(html.matches("<td>Ann</td>").count(), 1);
/// ```
pub fn create_html_table<R: RowSource>(
    columns: &[TableHeader],
    rows: &[R],
    options: &TableOptions,
) -> String {
    let rows = rows.iter().enumerate().map(|(index, row)| {
        columns
            .iter()
            .map(|column| {
                let cell = row.cell(&column.binding_path);
                if cell.is_unresolved() {
                    tracing::debug!(row = index, binding = %column.binding_path, "unresolved table binding");
                }
                cell
            })
            .collect::<Vec<_>>()
    });
    TableElement::from_rows(columns, rows, options).to_html(0)
}

/// Render a static table through typed accessors.
///
/// Accessors are looked up once per column. Columns without a registered
/// accessor render empty cells.
pub fn create_html_table_with<T>(
    columns: &[TableHeader],
    rows: &[T],
    accessors: &Accessors<T>,
    options: &TableOptions,
) -> String {
    let resolved: Vec<_> = columns
        .iter()
        .map(|column| {
            let accessor = accessors.get(&column.binding_path);
            if accessor.is_none() {
                tracing::debug!(binding = %column.binding_path, "no accessor for table binding");
            }
            accessor
        })
        .collect();

    let rows = rows.iter().map(|row| {
        resolved
            .iter()
            .map(|accessor| match accessor {
                Some(accessor) => accessor(row),
                None => CellValue::Unresolved,
            })
            .collect::<Vec<_>>()
    });
    TableElement::from_rows(columns, rows, options).to_html(0)
}

/// Render a table whose body iterates `items_source` in a Razor template.
///
/// Every column gets a header cell; only columns with `show_in_iteration`
/// get a cell in the row template. A blank `items_source` is rejected.
pub fn create_razor_table(
    columns: &[TableHeader],
    items_source: &str,
    controls: Option<&RowControls>,
    options: &TableOptions,
) -> Result<String> {
    Ok(TableElement::razor(columns, items_source, controls, options)?.to_html(0))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ButtonElement;

    #[test]
    fn test_static_table_layout() {
        let html = create_html_table(
            &[TableHeader::new("Name", "Name"), TableHeader::new("Age", "Age")],
            &[json!({ "Name": "Ann", "Age": 41 })],
            &TableOptions::new().border(1).width("100%"),
        );

        assert_eq!(
            html,
            "<table border=\"1\" width=\"100%\">\n\
             \x20 <thead>\n\
             \x20   <tr>\n\
             \x20     <th>Name</th>\n\
             \x20     <th>Age</th>\n\
             \x20   </tr>\n\
             \x20 </thead>\n\
             \x20 <tbody>\n\
             \x20   <tr>\n\
             \x20     <td>Ann</td>\n\
             \x20     <td>41</td>\n\
             \x20   </tr>\n\
             \x20 </tbody>\n\
             </table>\n"
        );
    }

    #[test]
    fn test_unresolved_binding_renders_empty_cell() {
        let html = create_html_table(
            &[TableHeader::new("Email", "Email")],
            &[json!({ "Name": "Ann" })],
            &TableOptions::default(),
        );
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn test_node_cells() {
        let columns = [TableHeader::new("Actions", "")];
        let rows = vec![vec![CellValue::Nodes(vec![
            Box::new(ButtonElement::new().set_inner_html("Edit")) as Box<dyn HtmlNode>,
            Box::new(ButtonElement::new().set_inner_html("Delete")),
        ])]];

        let html = TableElement::from_rows(&columns, rows, &TableOptions::default()).to_html(0);
        assert!(html.contains(
            "      <td>\n\
             \x20       <button type=\"button\">Edit</button>\n\
             \x20       <button type=\"button\">Delete</button>\n\
             \x20     </td>\n"
        ));
    }

    #[test]
    fn test_accessor_table() {
        struct Person {
            name: &'static str,
        }

        let accessors = Accessors::new().with("Name", |p: &Person| p.name.into());
        let html = create_html_table_with(
            &[TableHeader::new("Name", "Name"), TableHeader::new("Email", "Email")],
            &[Person { name: "Ann" }, Person { name: "Bo" }],
            &accessors,
            &TableOptions::default(),
        );

        assert!(html.contains("<td>Ann</td>"));
        assert!(html.contains("<td>Bo</td>"));
        assert_eq!(html.matches("<td></td>").count(), 2);
    }

    #[test]
    fn test_razor_loop() {
        let html = create_razor_table(
            &[TableHeader::new("Name", "Name")],
            "Model.Items",
            None,
            &TableOptions::default(),
        )
        .unwrap();
        assert!(html.contains("@foreach (var item in Model.Items)"));
        assert!(html.contains("<td>@item.Name</td>"));
        assert!(html.contains("<th>Name</th>"));
    }

    #[test]
    fn test_razor_hidden_column() {
        let html = create_razor_table(
            &[TableHeader::new("Name", "Name").hidden()],
            "Model.Items",
            None,
            &TableOptions::default(),
        )
        .unwrap();
        assert!(!html.contains("@item.Name"));
        assert!(html.contains("<th>Name</th>"));
    }

    #[test]
    fn test_razor_controls() {
        let controls = RowControls::new("Actions")
            .control("<button>Edit</button>")
            .control("<button>Delete</button>");
        let html = create_razor_table(
            &[TableHeader::new("Name", "Name")],
            "Model.Items",
            Some(&controls),
            &TableOptions::default(),
        )
        .unwrap();

        assert!(html.contains("<th>Actions</th>"));
        assert!(html.contains("<td><button>Edit</button></td>"));
        assert!(html.contains("<td><button>Delete</button></td>"));
    }

    #[test]
    fn test_table_nests_inside_tree() {
        let table = TableElement::razor(
            &[TableHeader::new("Name", "Name")],
            "Items",
            None,
            &TableOptions::default(),
        )
        .unwrap()
        .add_attribute("class", "grid");

        let html = HtmlElement::new("div").add_child(table).to_html(0);
        assert!(html.starts_with("<div>\n  <table class=\"grid\">\n    <thead>\n"));
        assert!(html.contains(
            "    <tbody>\n\
             \x20     @foreach (var item in Items)\n\
             \x20     {\n\
             \x20       <tr>\n\
             \x20         <td>@item.Name</td>\n\
             \x20       </tr>\n\
             \x20     }\n\
             \x20   </tbody>\n"
        ));
        assert!(html.ends_with("  </table>\n</div>\n"));
    }

    #[test]
    fn test_razor_rejects_blank_items_source() {
        let columns = [TableHeader::new("Name", "Name")];
        for items_source in ["", "   "] {
            let err = create_razor_table(&columns, items_source, None, &TableOptions::default())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { .. }));
        }
        assert!(TableElement::razor(&columns, "", None, &TableOptions::default()).is_err());
    }
}
