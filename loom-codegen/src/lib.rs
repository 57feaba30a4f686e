//! Language-neutral code generation for loom.
//!
//! This crate provides the structural code model that backends render and
//! the text-building primitives they render with.
//!
//! # Module Organization
//!
//! - [`builder`] - Text building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`model`] - Namespaces, types and members to generate
//! - [`generator`] - Backend contracts (CodeGenerator, CodeGenProvider)

pub mod builder;
pub mod generator;
pub mod model;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generator::{CodeGenProvider, CodeGenerator, GenArgs};
pub use model::{
    AccessModifier, Attribute, Event, Field, Member, MemberKind, Method, Namespace, Parameter,
    Property, TypeDecl,
};
