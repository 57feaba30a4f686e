//! C# backend for loom.
//!
//! Renders the language-neutral code model into C# compilation units.
//! [`CodeDomCodeGenProvider`] splits a namespace into a main and a partial
//! unit; [`CSharpGenerator`] renders everything into a single unit.

mod compilation_unit;
mod generator;
mod lower;
mod provider;
mod type_mapper;

pub mod ast;

pub use ast::{ClassDecl, FieldDecl, MemberDecl, NamespaceDecl, PropertyDecl};
pub use compilation_unit::CompilationUnit;
pub use generator::CSharpGenerator;
pub use loomgen_codegen::{CodeGenProvider, CodeGenerator, GenArgs};
pub use provider::CodeDomCodeGenProvider;
pub use type_mapper::CSharpTypeMapper;
