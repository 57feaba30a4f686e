//! Structured type references.

use std::{
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A possibly namespaced, possibly generic type reference.
///
/// Paths are normalized on construction: the segment after the last `.` is
/// the name, everything before it is the namespace, and a generic-arity
/// suffix (`` List`1 ``) is stripped from the name.
///
/// Equality and hashing only consider the name and namespace; two paths that
/// differ only in their generic arguments compare equal.
///
/// # Example
///
/// ```
/// use loomgen_core::TypePath;
///
/// let list = TypePath::new("System.Collections.Generic.List")
///     .add_generic_type(TypePath::new("System.Int32"));
///
/// assert_eq!(list.full_path(), "System.Collections.Generic.List<System.Int32>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypePath {
    name: Option<String>,
    namespace: Option<String>,
    generic_types: Vec<TypePath>,
}

impl TypePath {
    /// Parse a dotted path, including any `<...>` generic argument list.
    pub fn new(path: impl AsRef<str>) -> Self {
        parse(path.as_ref())
    }

    /// Create a path from an explicit name and namespace.
    pub fn with_namespace(name: impl AsRef<str>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            name: non_empty(strip_arity(name.as_ref())),
            namespace: non_empty(&namespace),
            generic_types: Vec::new(),
        }
    }

    /// Create a path for a Rust type from its [`std::any::type_name`].
    ///
    /// Module separators (`::`) become `.`, so `alloc::vec::Vec<i32>` yields
    /// name `Vec` in namespace `alloc.vec` with generic argument `i32`.
    pub fn of<T: ?Sized>() -> Self {
        parse(&std::any::type_name::<T>().replace("::", "."))
    }

    /// Append a generic argument. Arguments render in insertion order.
    pub fn add_generic_type(mut self, generic: impl Into<TypePath>) -> Self {
        self.generic_types.push(generic.into());
        self
    }

    /// Append a generic argument (mutable).
    pub fn push_generic_type(&mut self, generic: impl Into<TypePath>) -> &mut Self {
        self.generic_types.push(generic.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn generic_types(&self) -> &[TypePath] {
        &self.generic_types
    }

    /// Check if this path carries generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.generic_types.is_empty()
    }

    /// The name qualified by its namespace, without generic arguments.
    pub fn qualified_name(&self) -> String {
        match (self.namespace.as_deref(), self.name.as_deref()) {
            (_, None) => String::new(),
            (Some(ns), Some(name)) => format!("{}.{}", ns, name),
            (None, Some(name)) => name.to_string(),
        }
    }

    /// The full textual path: `Namespace.Name<G1,G2>`.
    ///
    /// Empty when the path has no name.
    pub fn full_path(&self) -> String {
        let mut path = self.qualified_name();
        if path.is_empty() || self.generic_types.is_empty() {
            return path;
        }
        let args: Vec<String> = self.generic_types.iter().map(Self::full_path).collect();
        path.push('<');
        path.push_str(&args.join(","));
        path.push('>');
        path
    }
}

impl PartialEq for TypePath {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.namespace == other.namespace
    }
}

impl Eq for TypePath {}

impl Hash for TypePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.namespace.hash(state);
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

impl FromStr for TypePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for TypePath {
    fn from(value: &str) -> Self {
        parse(value)
    }
}

impl From<String> for TypePath {
    fn from(value: String) -> Self {
        parse(&value)
    }
}

impl From<&TypePath> for String {
    fn from(value: &TypePath) -> Self {
        value.full_path()
    }
}

impl From<TypePath> for String {
    fn from(value: TypePath) -> Self {
        value.full_path()
    }
}

fn parse(input: &str) -> TypePath {
    let input = input.trim();
    let (base, args) = match input.find('<') {
        Some(open) if input.ends_with('>') => (&input[..open], Some(&input[open + 1..input.len() - 1])),
        _ => (input, None),
    };

    let mut path = match base.rfind('.') {
        Some(dot) => TypePath::with_namespace(&base[dot + 1..], &base[..dot]),
        None => TypePath::with_namespace(base, String::new()),
    };

    if let Some(args) = args {
        path.generic_types = split_top_level(args).into_iter().map(parse).collect();
    }
    path
}

/// Split a generic argument list on commas that are not nested in `<>`.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn strip_arity(name: &str) -> &str {
    name.split('`').next().unwrap_or_default().trim()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
