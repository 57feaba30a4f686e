use loomgen_core::TypePath;

use super::{AccessModifier, Attribute, Member};

/// A class declaration to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub doc: Option<String>,
    pub access: AccessModifier,
    /// Using directives required by this type only.
    pub usings: Vec<String>,
    /// Base class first, then interfaces.
    pub base_types: Vec<TypePath>,
    pub attributes: Vec<Attribute>,
    pub members: Vec<Member>,
    /// Routes the type to the partial compilation unit.
    pub is_partial: bool,
    pub is_sealed: bool,
    pub is_abstract: bool,
}

impl TypeDecl {
    /// Create a new public type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            access: AccessModifier::Public,
            usings: Vec::new(),
            base_types: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
            is_partial: false,
            is_sealed: false,
            is_abstract: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        self.usings.push(namespace.into());
        self
    }

    pub fn base_type(mut self, ty: impl Into<TypePath>) -> Self {
        self.base_types.push(ty.into());
        self
    }

    pub fn attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Add multiple members.
    pub fn members<M: Into<Member>>(mut self, members: impl IntoIterator<Item = M>) -> Self {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Members that backends render (fields and properties), in order.
    pub fn data_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_data())
    }
}
