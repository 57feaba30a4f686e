//! Snapshot tests for markup generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use loomgen_html::{
    ButtonElement, DivElement, ElementBuilder, HtmlNode, InputElement, RowControls, SpanElement,
    TableHeader, TableOptions, create_html_table, create_razor_table,
};
use serde_json::json;

fn columns() -> Vec<TableHeader> {
    vec![
        TableHeader::new("Name", "Name"),
        TableHeader::new("Address.City", "City"),
        TableHeader::new("Id", "Id").hidden(),
    ]
}

#[test]
fn test_razor_table() {
    let controls = RowControls::new("Actions").control("<a href=\"/people/@item.Id\">Edit</a>");
    let html = create_razor_table(
        &columns(),
        "Model.People",
        Some(&controls),
        &TableOptions::new().border(1),
    )
    .unwrap();

    insta::assert_snapshot!(html, @r#"
    <table border="1">
      <thead>
        <tr>
          <th>Name</th>
          <th>City</th>
          <th>Id</th>
          <th>Actions</th>
        </tr>
      </thead>
      <tbody>
        @foreach (var item in Model.People)
        {
          <tr>
            <td>@item.Name</td>
            <td>@item.Address.City</td>
            <td><a href="/people/@item.Id">Edit</a></td>
          </tr>
        }
      </tbody>
    </table>
    "#);
}

#[test]
fn test_static_table() {
    let rows = [
        json!({ "Name": "Ann", "Address": { "City": "Oslo" }, "Id": 1 }),
        json!({ "Name": "Bo", "Id": 2 }),
    ];
    let html = create_html_table(&columns(), &rows, &TableOptions::new().width("50%"));

    insta::assert_snapshot!(html, @r#"
    <table width="50%">
      <thead>
        <tr>
          <th>Name</th>
          <th>City</th>
          <th>Id</th>
        </tr>
      </thead>
      <tbody>
        <tr>
          <td>Ann</td>
          <td>Oslo</td>
          <td>1</td>
        </tr>
        <tr>
          <td>Bo</td>
          <td></td>
          <td>2</td>
        </tr>
      </tbody>
    </table>
    "#);
}

#[test]
fn test_form_fragment() {
    let html = DivElement::new()
        .add_attribute("class", "form-row")
        .add_child(SpanElement::new().set_inner_html("Name"))
        .add_child(InputElement::new().add_attribute("id", "name").add_bare_attribute("required"))
        .add_child(ButtonElement::submit().set_inner_html("Save"))
        .to_html(0);

    insta::assert_snapshot!(html, @r#"
    <div class="form-row">
      <span>Name</span>
      <input type="text" id="name" required>
      <button type="submit">Save</button>
    </div>
    "#);
}
