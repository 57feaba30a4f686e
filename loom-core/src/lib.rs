//! Core types for the loom generator.
//!
//! This crate provides the value types shared by every generator backend:
//! the output [`Language`] table, structured [`TypePath`] references, and
//! the [`Code`]/[`Codes`] units that wrap generated text.

mod code;
mod error;
mod file;
mod language;
mod type_path;

// Generated units
pub use code::{Code, Codes};
// Errors
pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Output languages
pub use language::Language;
// Type references
pub use type_path::TypePath;
