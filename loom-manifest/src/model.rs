//! `[namespace]` section: the code model to generate.

use std::collections::HashSet;

use loomgen_codegen::{
    Attribute, Event, Field, Member, Method, Namespace, Parameter, Property, TypeDecl,
};
use serde::Deserialize;

use crate::{Result, validate::ParseContext};

fn yes() -> bool {
    true
}

/// A namespace and everything declared inside it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDef {
    /// Dotted name, relative to the parent namespace.
    pub name: String,
    #[serde(default)]
    pub usings: Vec<String>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDef>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    pub name: String,
    pub doc: Option<String>,
    pub access: Option<String>,
    #[serde(default)]
    pub usings: Vec<String>,
    /// Base class first, then interfaces.
    #[serde(default)]
    pub base_types: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub sealed: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// A member, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberDef {
    Field(FieldDef),
    Property(PropertyDef),
    Method(MethodDef),
    Event(EventDef),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub doc: Option<String>,
    pub access: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub doc: Option<String>,
    pub access: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default = "yes")]
    pub get: bool,
    #[serde(default = "yes")]
    pub set: bool,
    pub backing_field: Option<String>,
    pub initializer: Option<String>,
    #[serde(default)]
    pub nullable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDef {
    pub name: String,
    pub returns: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub constructor: bool,
    pub doc: Option<String>,
    pub access: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub doc: Option<String>,
    pub access: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl MemberDef {
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
            Self::Event(e) => &e.name,
        }
    }

    /// Validate and convert to the code model.
    fn lower(&self, ctx: &ParseContext) -> Result<Member> {
        ctx.validate_name(self.name(), "member")?;

        let member = match self {
            Self::Field(def) => {
                ctx.validate_type_ref(&def.ty, &def.name)?;
                let mut field = Field::new(&def.name, def.ty.as_str())
                    .access(ctx.parse_access(def.access.as_deref())?);
                field.doc = def.doc.clone();
                field.is_static = def.is_static;
                field.is_readonly = def.readonly;
                field.is_const = def.is_const;
                field.initializer = def.initializer.clone();
                Member::Field(field)
            }
            Self::Property(def) => {
                ctx.validate_type_ref(&def.ty, &def.name)?;
                if !def.get && !def.set {
                    return Err(ctx.validation_error(
                        format!("property '{}' needs a getter or a setter", def.name),
                        Some(&def.name),
                    ));
                }
                let mut prop = Property::new(&def.name, def.ty.as_str())
                    .access(ctx.parse_access(def.access.as_deref())?);
                prop.doc = def.doc.clone();
                prop.is_static = def.is_static;
                prop.is_abstract = def.is_abstract;
                prop.has_getter = def.get;
                prop.has_setter = def.set;
                prop.backing_field = def.backing_field.clone();
                prop.initializer = def.initializer.clone();
                prop.is_nullable = def.nullable;
                Member::Property(prop)
            }
            Self::Method(def) => {
                let mut method = if def.constructor {
                    Method::constructor(&def.name)
                } else {
                    Method::new(&def.name)
                }
                .access(ctx.parse_access(def.access.as_deref())?);
                if let Some(ty) = &def.returns {
                    method = method.returns(ty.as_str());
                }
                for param in &def.parameters {
                    ctx.validate_name(&param.name, "parameter")?;
                    ctx.validate_type_ref(&param.ty, &param.name)?;
                    method = method.param(Parameter::new(&param.name, param.ty.as_str()));
                }
                method.body = def.body.clone();
                method.doc = def.doc.clone();
                method.is_static = def.is_static;
                method.is_abstract = def.is_abstract;
                Member::Method(method)
            }
            Self::Event(def) => {
                ctx.validate_type_ref(&def.ty, &def.name)?;
                let mut event = Event::new(&def.name, def.ty.as_str())
                    .access(ctx.parse_access(def.access.as_deref())?);
                event.doc = def.doc.clone();
                event.is_static = def.is_static;
                Member::Event(event)
            }
        };
        Ok(member)
    }
}

impl TypeDef {
    fn lower<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<TypeDecl> {
        ctx.validate_name(&self.name, "type")?;
        let member_ctx = ctx.push(&self.name);

        let mut ty = TypeDecl::new(&self.name).access(ctx.parse_access(self.access.as_deref())?);
        ty.doc = self.doc.clone();
        ty.usings = self.usings.clone();
        ty.is_partial = self.partial;
        ty.is_sealed = self.sealed;
        ty.is_abstract = self.is_abstract;

        for base in &self.base_types {
            ctx.validate_type_ref(base, &self.name)?;
            ty = ty.base_type(base.as_str());
        }
        for attr in &self.attributes {
            ctx.validate_type_ref(&attr.name, &self.name)?;
            let attribute = attr
                .args
                .iter()
                .fold(Attribute::new(attr.name.as_str()), |a, arg| a.arg(arg));
            ty = ty.attribute(attribute);
        }

        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.name()) {
                return Err(member_ctx.duplicate_error("member", member.name()));
            }
            ty = ty.member(member.lower(&member_ctx)?);
        }
        Ok(ty)
    }
}

impl NamespaceDef {
    /// Validate the namespace tree and convert it to the code model.
    pub(crate) fn lower<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<Namespace> {
        ctx.validate_namespace(&self.name)?;
        let inner = ctx.push(&self.name);

        let mut ns = Namespace::new(&self.name);
        ns.usings = self.usings.clone();

        let mut seen = HashSet::new();
        for ty in &self.types {
            if !seen.insert(ty.name.as_str()) {
                return Err(inner.duplicate_error("type", &ty.name));
            }
            ns = ns.type_decl(ty.lower(&inner)?);
        }
        for child in &self.namespaces {
            ns = ns.namespace(child.lower(&inner)?);
        }
        Ok(ns)
    }
}
