//! `[[tables]]` section: Razor table views.

use std::collections::HashSet;

use loomgen_html::{RowControls, TableHeader, TableOptions, create_razor_table};
use serde::Deserialize;

use crate::{Result, validate::ParseContext};

fn yes() -> bool {
    true
}

/// A Razor table rendered over a data-source expression.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Output unit name.
    pub name: String,
    /// Expression iterated by `@foreach`, such as `Model.People`.
    pub items_source: String,
    pub border: Option<u32>,
    pub width: Option<String>,
    pub controls: Option<ControlsDef>,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    pub binding_path: String,
    /// Defaults to the binding path.
    pub caption: Option<String>,
    #[serde(default = "yes")]
    pub show_in_iteration: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlsDef {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl TableDef {
    pub fn headers(&self) -> Vec<TableHeader> {
        self.columns
            .iter()
            .map(|column| TableHeader {
                binding_path: column.binding_path.clone(),
                caption: column
                    .caption
                    .clone()
                    .unwrap_or_else(|| column.binding_path.clone()),
                show_in_iteration: column.show_in_iteration,
            })
            .collect()
    }

    pub fn options(&self) -> TableOptions {
        TableOptions {
            border: self.border,
            width: self.width.clone(),
        }
    }

    pub fn row_controls(&self) -> Option<RowControls> {
        self.controls.as_ref().map(|controls| RowControls {
            caption: controls.caption.clone(),
            controls: controls.items.clone(),
        })
    }

    /// Render the table markup.
    pub fn render(&self) -> loomgen_core::Result<String> {
        create_razor_table(
            &self.headers(),
            &self.items_source,
            self.row_controls().as_ref(),
            &self.options(),
        )
    }

    pub(crate) fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_name(&self.name, "table")?;

        if self.items_source.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("table '{}' has an empty items_source", self.name),
                Some(&self.name),
            ));
        }
        if self.columns.is_empty() {
            return Err(ctx.validation_error(
                format!("table '{}' has no columns", self.name),
                Some(&self.name),
            ));
        }
        if let Some(column) = self
            .columns
            .iter()
            .find(|column| column.binding_path.trim().is_empty())
        {
            return Err(ctx.validation_error(
                format!("table '{}' has a column with an empty binding_path", self.name),
                column.caption.as_deref().or(Some(self.name.as_str())),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_tables(tables: &[TableDef], ctx: &ParseContext) -> Result<()> {
    let mut seen = HashSet::new();
    for table in tables {
        table.validate(ctx)?;
        if !seen.insert(table.name.as_str()) {
            return Err(ctx.duplicate_error("table", &table.name));
        }
    }
    Ok(())
}
