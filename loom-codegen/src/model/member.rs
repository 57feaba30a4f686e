//! Type members: fields, properties, methods and events.

use std::{fmt, str::FromStr};

use loomgen_core::TypePath;

/// Access level for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessModifier {
    #[default]
    Public,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

impl AccessModifier {
    /// Canonical lower-case name (`"protected internal"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
            Self::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessModifier {
    type Err = String;

    /// Accepts the canonical names, ignoring case and extra whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "internal" => Ok(Self::Internal),
            "protected internal" => Ok(Self::ProtectedInternal),
            "private protected" => Ok(Self::PrivateProtected),
            "private" => Ok(Self::Private),
            _ => Err(format!("unknown access modifier '{}'", s)),
        }
    }
}

/// Builder methods shared by every member shape.
macro_rules! member_common {
    ($ty:ty) => {
        impl $ty {
            /// Set documentation comment.
            pub fn doc(mut self, doc: impl Into<String>) -> Self {
                self.doc = Some(doc.into());
                self
            }

            /// Set access modifier.
            pub fn access(mut self, access: AccessModifier) -> Self {
                self.access = access;
                self
            }

            /// Make this member private.
            pub fn private(mut self) -> Self {
                self.access = AccessModifier::Private;
                self
            }

            /// Mark this member static.
            pub fn static_(mut self) -> Self {
                self.is_static = true;
                self
            }

            /// Mark this member abstract.
            pub fn abstract_(mut self) -> Self {
                self.is_abstract = true;
                self
            }
        }
    };
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypePath,
    pub doc: Option<String>,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_readonly: bool,
    pub is_const: bool,
    /// Initializer expression in target syntax.
    pub initializer: Option<String>,
}

impl Field {
    /// Create a new public field.
    pub fn new(name: impl Into<String>, ty: impl Into<TypePath>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            access: AccessModifier::Public,
            is_static: false,
            is_abstract: false,
            is_readonly: false,
            is_const: false,
            initializer: None,
        }
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }
}

member_common!(Field);

/// A property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: TypePath,
    pub doc: Option<String>,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_abstract: bool,
    pub has_getter: bool,
    pub has_setter: bool,
    /// Field the accessors read and write; auto-property when `None`.
    pub backing_field: Option<String>,
    /// Initializer expression in target syntax.
    pub initializer: Option<String>,
    /// Whether the property type is annotated as nullable.
    pub is_nullable: bool,
}

impl Property {
    /// Create a new public read-write auto-property.
    pub fn new(name: impl Into<String>, ty: impl Into<TypePath>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            access: AccessModifier::Public,
            is_static: false,
            is_abstract: false,
            has_getter: true,
            has_setter: true,
            backing_field: None,
            initializer: None,
            is_nullable: false,
        }
    }

    /// Remove the setter.
    pub fn read_only(mut self) -> Self {
        self.has_setter = false;
        self
    }

    /// Remove the getter.
    pub fn write_only(mut self) -> Self {
        self.has_getter = false;
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

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }
}

member_common!(Property);

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypePath,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypePath>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    /// Return type; `None` means no value is returned.
    pub return_type: Option<TypePath>,
    pub parameters: Vec<Parameter>,
    /// Body statements, one per line, in target syntax.
    pub body: Vec<String>,
    pub is_constructor: bool,
    pub doc: Option<String>,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
            body: Vec::new(),
            is_constructor: false,
            doc: None,
            access: AccessModifier::Public,
            is_static: false,
            is_abstract: false,
        }
    }

    /// Create a constructor for the named type.
    pub fn constructor(type_name: impl Into<String>) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(type_name)
        }
    }

    pub fn returns(mut self, ty: impl Into<TypePath>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

member_common!(Method);

/// An event declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    /// Handler delegate type.
    pub ty: TypePath,
    pub doc: Option<String>,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl Event {
    pub fn new(name: impl Into<String>, ty: impl Into<TypePath>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            access: AccessModifier::Public,
            is_static: false,
            is_abstract: false,
        }
    }
}

member_common!(Event);

/// The shape of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Event,
}

/// A member of a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(Field),
    Property(Property),
    Method(Method),
    Event(Event),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Field(_) => MemberKind::Field,
            Self::Property(_) => MemberKind::Property,
            Self::Method(_) => MemberKind::Method,
            Self::Event(_) => MemberKind::Event,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
            Self::Event(e) => &e.name,
        }
    }

    pub fn access(&self) -> AccessModifier {
        match self {
            Self::Field(f) => f.access,
            Self::Property(p) => p.access,
            Self::Method(m) => m.access,
            Self::Event(e) => e.access,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Self::Field(f) => f.is_static,
            Self::Property(p) => p.is_static,
            Self::Method(m) => m.is_static,
            Self::Event(e) => e.is_static,
        }
    }

    pub fn is_abstract(&self) -> bool {
        match self {
            Self::Field(f) => f.is_abstract,
            Self::Property(p) => p.is_abstract,
            Self::Method(m) => m.is_abstract,
            Self::Event(e) => e.is_abstract,
        }
    }

    /// Check if this is a field or property.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Field(_) | Self::Property(_))
    }
}

impl From<Field> for Member {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}

impl From<Property> for Member {
    fn from(value: Property) -> Self {
        Self::Property(value)
    }
}

impl From<Method> for Member {
    fn from(value: Method) -> Self {
        Self::Method(value)
    }
}

impl From<Event> for Member {
    fn from(value: Event) -> Self {
        Self::Event(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_modifier_from_str() {
        assert_eq!(
            "public".parse::<AccessModifier>(),
            Ok(AccessModifier::Public)
        );
        assert_eq!(
            "Protected  Internal".parse::<AccessModifier>(),
            Ok(AccessModifier::ProtectedInternal)
        );
        assert!("friend".parse::<AccessModifier>().is_err());
    }

    #[test]
    fn test_property_defaults() {
        let prop = Property::new("Name", "System.String");
        assert!(prop.has_getter);
        assert!(prop.has_setter);
        assert!(prop.access.is_public());

        let prop = prop.read_only().nullable();
        assert!(!prop.has_setter);
        assert!(prop.is_nullable);
    }

    #[test]
    fn test_member_accessors() {
        let member: Member = Field::new("_count", "System.Int32")
            .private()
            .static_()
            .readonly()
            .into();

        assert_eq!(member.kind(), MemberKind::Field);
        assert_eq!(member.name(), "_count");
        assert_eq!(member.access(), AccessModifier::Private);
        assert!(member.is_static());
        assert!(member.is_data());
    }

    #[test]
    fn test_constructor() {
        let ctor = Method::constructor("Person")
            .param(Parameter::new("name", "System.String"))
            .body_line("Name = name;");

        let member = Member::from(ctor);
        assert_eq!(member.kind(), MemberKind::Method);
        assert!(!member.is_data());
        assert!(matches!(member, Member::Method(ref m) if m.is_constructor));
    }
}
