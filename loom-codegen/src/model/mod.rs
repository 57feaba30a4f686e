//! Language-neutral description of generatable types.
//!
//! A [`Namespace`] owns nested namespaces and [`TypeDecl`]s; a type owns its
//! [`Member`]s. Models are built in memory for one generation call and are
//! only read by the backends.

mod attribute;
mod member;
mod namespace;
mod type_decl;

pub use attribute::Attribute;
pub use member::{AccessModifier, Event, Field, Member, MemberKind, Method, Parameter, Property};
pub use namespace::Namespace;
pub use type_decl::TypeDecl;
