//! Model manifest (`loom.toml`) parsing and validation.
//!
//! The manifest describes a namespace tree of types to generate as C# and a
//! list of Razor tables. Parsing validates every name against C# identifier
//! rules and reports problems as [`miette`] diagnostics.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod model;
mod table;
mod validate;

pub use error::{Error, Result};
pub use manifest::Manifest;
pub use model::{
    AttributeDef, EventDef, FieldDef, MemberDef, MethodDef, NamespaceDef, ParameterDef,
    PropertyDef, TypeDef,
};
pub use table::{ColumnDef, ControlsDef, TableDef};
pub use validate::ParseContext;
