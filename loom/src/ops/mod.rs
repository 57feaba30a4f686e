//! Core operations.
//!
//! Business logic for loom commands, separated from CLI argument parsing and
//! output rendering.

pub mod generate;

pub use generate::{collect_codes, write_codes};
