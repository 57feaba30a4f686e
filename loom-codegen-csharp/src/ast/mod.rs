//! C# syntax builders for namespaces, classes and members.
//!
//! These provide a high-level API for constructing C# syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod members;
mod namespace;

pub use class::ClassDecl;
pub use members::{FieldDecl, MemberDecl, PropertyDecl};
pub use namespace::NamespaceDecl;
