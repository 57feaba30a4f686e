//! Cell values and row lookups for static tables.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::HtmlNode;

/// The content of one static table cell.
#[derive(Debug)]
pub enum CellValue {
    Text(String),
    /// A single nested node.
    Node(Box<dyn HtmlNode>),
    /// Several nested nodes, one after another.
    Nodes(Vec<Box<dyn HtmlNode>>),
    /// The binding path did not resolve against the row.
    Unresolved,
}

impl CellValue {
    pub fn node(node: impl HtmlNode + 'static) -> Self {
        Self::Node(Box::new(node))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A data row that can be looked up by binding path.
pub trait RowSource {
    fn cell(&self, binding_path: &str) -> CellValue;
}

/// JSON rows resolve dotted paths through nested objects.
///
/// Strings render unquoted, `null` renders as an empty cell, and any other
/// value renders as its JSON text.
impl RowSource for Value {
    fn cell(&self, binding_path: &str) -> CellValue {
        let mut current = self;
        for segment in binding_path.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return CellValue::Unresolved,
            }
        }
        match current {
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Null => CellValue::Text(String::new()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> CellValue>;

/// A string-keyed table of typed cell accessors.
///
/// # Example
///
/// ```
/// use loomgen_html::{Accessors, CellValue};
///
/// struct Person {
///     name: String,
/// }
///
/// let accessors = Accessors::new().with("Name", |p: &Person| p.name.as_str().into());
/// let cell = accessors.get("Name").unwrap()(&Person { name: "Ann".into() });
/// assert!(matches!(cell, CellValue::Text(ref s) if s == "Ann"));
/// ```
pub struct Accessors<T> {
    accessors: IndexMap<String, Accessor<T>>,
}

impl<T> Accessors<T> {
    pub fn new() -> Self {
        Self {
            accessors: IndexMap::new(),
        }
    }

    /// Register an accessor for a binding path.
    pub fn with<F>(mut self, binding_path: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + 'static,
    {
        self.push(binding_path, accessor);
        self
    }

    /// Register an accessor for a binding path (mutable).
    pub fn push<F>(&mut self, binding_path: impl Into<String>, accessor: F) -> &mut Self
    where
        F: Fn(&T) -> CellValue + 'static,
    {
        self.accessors.insert(binding_path.into(), Box::new(accessor));
        self
    }

    pub fn get(&self, binding_path: &str) -> Option<&dyn Fn(&T) -> CellValue> {
        let accessor = self.accessors.get(binding_path)?;
        Some(accessor.as_ref())
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("binding_paths", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}
