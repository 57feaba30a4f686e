//! Lowering from the language-neutral model to C# syntax nodes.

use loomgen_codegen::model::{Member, Namespace, TypeDecl};
use loomgen_core::{Error, Result};

use crate::{
    CSharpTypeMapper, CompilationUnit,
    ast::{ClassDecl, FieldDecl, MemberDecl, PropertyDecl},
};

/// A type together with the namespace it was declared in.
#[derive(Debug, Clone)]
pub(crate) struct TypeEntry<'a> {
    /// Full dotted namespace name.
    pub namespace: String,
    pub scope: &'a Namespace,
    pub ty: &'a TypeDecl,
}

/// Every type in the namespace tree, depth-first in declaration order.
pub(crate) fn type_entries(root: &Namespace) -> Vec<TypeEntry<'_>> {
    root.walk()
        .into_iter()
        .flat_map(|(name, scope)| {
            scope.types.iter().map(move |ty| TypeEntry {
                namespace: name.clone(),
                scope,
                ty,
            })
        })
        .collect()
}

/// Types split by their target compilation unit.
#[derive(Debug, Default)]
pub(crate) struct Buckets<'a> {
    pub main: Vec<TypeEntry<'a>>,
    pub partial: Vec<TypeEntry<'a>>,
}

impl<'a> Buckets<'a> {
    pub fn partition(root: &'a Namespace) -> Self {
        let (partial, main): (Vec<_>, Vec<_>) = type_entries(root)
            .into_iter()
            .partition(|entry| entry.ty.is_partial);
        Self { main, partial }
    }
}

/// Reject models with blank names before anything is rendered.
pub(crate) fn validate(root: &Namespace) -> Result<()> {
    for (_, scope) in root.walk() {
        Error::ensure_not_blank("namespace", &scope.name)?;
        for ty in &scope.types {
            Error::ensure_not_blank("type name", &ty.name)?;
            for member in &ty.members {
                Error::ensure_not_blank("member name", member.name())?;
            }
        }
    }
    Ok(())
}

/// Accumulate the given types into a compilation unit.
pub(crate) fn build_unit<'a, 'b>(
    entries: impl IntoIterator<Item = &'b TypeEntry<'a>>,
    header: Option<String>,
    mapper: &CSharpTypeMapper,
) -> CompilationUnit
where
    'a: 'b,
{
    let mut unit = CompilationUnit::new().with_header(header);
    for entry in entries {
        let ns = unit.namespace_mut(&entry.namespace);
        ns.push_usings(&entry.scope.usings);
        ns.push_usings(&entry.ty.usings);
        ns.push_class(lower_type(entry.ty, mapper));
    }
    unit
}

pub(crate) fn lower_type(ty: &TypeDecl, mapper: &CSharpTypeMapper) -> ClassDecl {
    let mut class = ClassDecl::new(&ty.name).access(ty.access.as_str());
    if let Some(doc) = &ty.doc {
        class = class.doc(doc);
    }
    if ty.is_partial {
        class = class.partial();
    }
    if ty.is_sealed {
        class = class.sealed();
    }
    if ty.is_abstract {
        class = class.abstract_();
    }
    for attr in &ty.attributes {
        let name = mapper.render_type(&attr.name);
        class = if attr.args.is_empty() {
            class.attribute(name)
        } else {
            class.attribute(format!("{}({})", name, attr.args.join(", ")))
        };
    }
    for base in &ty.base_types {
        class = class.base_type(mapper.render_type(base));
    }
    for member in &ty.members {
        match lower_member(member, mapper) {
            Some(decl) => class = class.member(decl),
            None => tracing::trace!(
                class = %ty.name,
                member = member.name(),
                kind = ?member.kind(),
                "member shape not emitted"
            ),
        }
    }
    class
}

/// Fields and properties lower to declarations; methods and events are not
/// emitted.
fn lower_member(member: &Member, mapper: &CSharpTypeMapper) -> Option<MemberDecl> {
    match member {
        Member::Field(field) => {
            let mut decl = FieldDecl::new(&field.name, mapper.render_type(&field.ty))
                .access(field.access.as_str());
            if let Some(doc) = &field.doc {
                decl = decl.doc(doc);
            }
            if field.is_static {
                decl = decl.static_();
            }
            if field.is_const {
                decl = decl.const_();
            }
            if field.is_readonly {
                decl = decl.readonly();
            }
            if let Some(init) = &field.initializer {
                decl = decl.initializer(init);
            }
            Some(decl.into())
        }
        Member::Property(prop) => {
            let mut ty = mapper.render_type(&prop.ty);
            if prop.is_nullable {
                ty = mapper.nullable(&ty);
            }
            let mut decl = PropertyDecl::new(&prop.name, ty)
                .access(prop.access.as_str())
                .accessors(prop.has_getter, prop.has_setter);
            if let Some(doc) = &prop.doc {
                decl = decl.doc(doc);
            }
            if prop.is_static {
                decl = decl.static_();
            }
            if prop.is_abstract {
                decl = decl.abstract_();
            }
            if let Some(field) = &prop.backing_field {
                decl = decl.backing_field(field);
            }
            if let Some(init) = &prop.initializer {
                decl = decl.initializer(init);
            }
            Some(decl.into())
        }
        Member::Method(_) | Member::Event(_) => None,
    }
}
