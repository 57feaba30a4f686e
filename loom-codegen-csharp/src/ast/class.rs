//! C# class builder.

use loomgen_codegen::builder::{CodeFragment, Renderable};

use super::MemberDecl;

/// Builder for C# class declarations.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    name: String,
    doc: Option<String>,
    access: String,
    attributes: Vec<String>,
    base_types: Vec<String>,
    members: Vec<MemberDecl>,
    is_partial: bool,
    is_sealed: bool,
    is_abstract: bool,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            access: "public".to_string(),
            attributes: Vec::new(),
            base_types: Vec::new(),
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

    pub fn access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    /// Add an attribute, without the surrounding brackets.
    pub fn attribute(mut self, attr: impl Into<String>) -> Self {
        self.attributes.push(attr.into());
        self
    }

    pub fn base_type(mut self, ty: impl Into<String>) -> Self {
        self.base_types.push(ty.into());
        self
    }

    pub fn member(mut self, member: impl Into<MemberDecl>) -> Self {
        self.members.push(member.into());
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn header(&self) -> String {
        let mut parts = vec![self.access.as_str()];
        if self.is_abstract {
            parts.push("abstract");
        }
        if self.is_sealed {
            parts.push("sealed");
        }
        if self.is_partial {
            parts.push("partial");
        }
        parts.push("class");
        parts.push(&self.name);

        let mut header = parts.join(" ");
        if !self.base_types.is_empty() {
            header.push_str(" : ");
            header.push_str(&self.base_types.join(", "));
        }
        header
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.to_fragments());
        }
        body
    }
}

impl Renderable for ClassDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc.clone()));
        }

        for attr in &self.attributes {
            fragments.push(CodeFragment::line(format!("[{}]", attr)));
        }

        fragments.push(CodeFragment::braced(
            self.header(),
            self.members_to_fragments(),
        ));
        fragments
    }
}
