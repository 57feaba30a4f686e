//! C# field and property builders.

use loomgen_codegen::builder::{CodeFragment, Renderable};

/// A C# field declaration.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    name: String,
    ty: String,
    doc: Option<String>,
    access: String,
    is_static: bool,
    is_const: bool,
    is_readonly: bool,
    initializer: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            access: "private".to_string(),
            is_static: false,
            is_const: false,
            is_readonly: false,
            initializer: None,
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

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    fn declaration(&self) -> String {
        let mut parts = vec![self.access.as_str()];
        // const members are implicitly static
        if self.is_const {
            parts.push("const");
        } else {
            if self.is_static {
                parts.push("static");
            }
            if self.is_readonly {
                parts.push("readonly");
            }
        }
        parts.push(&self.ty);
        parts.push(&self.name);

        let mut decl = parts.join(" ");
        if let Some(init) = &self.initializer {
            decl.push_str(" = ");
            decl.push_str(init);
        }
        decl.push(';');
        decl
    }
}

impl Renderable for FieldDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc.clone()));
        }
        fragments.push(CodeFragment::line(self.declaration()));
        fragments
    }
}

/// A C# property declaration.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    name: String,
    ty: String,
    doc: Option<String>,
    access: String,
    is_static: bool,
    is_abstract: bool,
    has_getter: bool,
    has_setter: bool,
    backing_field: Option<String>,
    initializer: Option<String>,
}

impl PropertyDecl {
    /// Create a public read-write auto-property.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            access: "public".to_string(),
            is_static: false,
            is_abstract: false,
            has_getter: true,
            has_setter: true,
            backing_field: None,
            initializer: None,
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

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn accessors(mut self, getter: bool, setter: bool) -> Self {
        self.has_getter = getter;
        self.has_setter = setter;
        self
    }

    pub fn backing_field(mut self, field: impl Into<String>) -> Self {
        self.backing_field = Some(field.into());
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    fn accessor_block(&self) -> String {
        let mut accessors = Vec::new();
        match &self.backing_field {
            Some(field) => {
                if self.has_getter {
                    accessors.push(format!("get => {};", field));
                }
                if self.has_setter {
                    accessors.push(format!("set => {} = value;", field));
                }
            }
            None => {
                if self.has_getter {
                    accessors.push("get;".to_string());
                }
                if self.has_setter {
                    accessors.push("set;".to_string());
                }
            }
        }

        if accessors.is_empty() {
            "{ }".to_string()
        } else {
            format!("{{ {} }}", accessors.join(" "))
        }
    }

    fn declaration(&self) -> String {
        let mut parts = vec![self.access.as_str()];
        if self.is_static {
            parts.push("static");
        }
        if self.is_abstract {
            parts.push("abstract");
        }
        parts.push(&self.ty);
        parts.push(&self.name);

        let mut decl = format!("{} {}", parts.join(" "), self.accessor_block());
        // Initializers only apply to auto-properties
        if let (Some(init), None) = (&self.initializer, &self.backing_field) {
            decl.push_str(" = ");
            decl.push_str(init);
            decl.push(';');
        }
        decl
    }
}

impl Renderable for PropertyDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc.clone()));
        }
        fragments.push(CodeFragment::line(self.declaration()));
        fragments
    }
}

/// A member that the C# backend emits.
#[derive(Debug, Clone)]
pub enum MemberDecl {
    Field(FieldDecl),
    Property(PropertyDecl),
}

impl Renderable for MemberDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Field(field) => field.to_fragments(),
            Self::Property(property) => property.to_fragments(),
        }
    }
}

impl From<FieldDecl> for MemberDecl {
    fn from(value: FieldDecl) -> Self {
        Self::Field(value)
    }
}

impl From<PropertyDecl> for MemberDecl {
    fn from(value: PropertyDecl) -> Self {
        Self::Property(value)
    }
}
