//! Validation utilities for C# identifiers

use loomgen_codegen::AccessModifier;
use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename, and current path through the
/// manifest hierarchy so nested validation can report where it failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "loom.toml");
/// ctx.validate_name("Person", "type")?;
///
/// // For nested validation
/// let nested = ctx.push("Acme").push("Person");
/// nested.validate_name("Name", "member")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    /// Path segments for nested validation (e.g., ["Acme", "Person"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member in 'Acme.Person'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name, 0)
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a validation error, labelled at `at` if it can be found.
    pub fn validation_error(&self, message: impl Into<String>, at: Option<&str>) -> Box<Error> {
        Error::validation(
            message,
            self.src,
            self.filename,
            at.and_then(|name| self.find_span(name)),
        )
    }

    /// Create a duplicate-name error pointing at the first two declarations.
    pub fn duplicate_error(&self, kind: &str, name: &str) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span: find_name_span(self.src, name, 0),
            second_span: find_name_span(self.src, name, 1),
            kind: kind.to_string(),
            name: name.to_string(),
            scope: self.path_string(),
        })
    }

    /// Validate that a name is a usable C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(Box::new(Error::ReservedKeyword {
                src: self.named_source(),
                span: self.find_span(name),
                name: name.to_string(),
                context: self.context_for(kind),
            }));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Box::new(Error::InvalidIdentifier {
                src: self.named_source(),
                span: self.find_span(name),
                name: name.to_string(),
                context: self.context_for(kind),
                reason: reason.to_string(),
            }));
        }

        Ok(())
    }

    /// Validate each segment of a dotted namespace name.
    pub fn validate_namespace(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(self.validation_error("namespace name cannot be empty", None));
        }
        for segment in name.split('.') {
            self.validate_name(segment, "namespace")?;
        }
        Ok(())
    }

    /// Parse an optional access modifier, defaulting to `public`.
    pub fn parse_access(&self, value: Option<&str>) -> Result<AccessModifier> {
        match value {
            None => Ok(AccessModifier::default()),
            Some(value) => value.parse::<AccessModifier>().map_err(|_| {
                Box::new(Error::InvalidAccess {
                    src: self.named_source(),
                    span: self.find_span(value),
                    value: value.to_string(),
                })
            }),
        }
    }

    /// Require a non-blank type reference.
    pub fn validate_type_ref(&self, ty: &str, owner: &str) -> Result<()> {
        if ty.trim().is_empty() {
            return Err(self.validation_error(
                format!("{} has an empty type", self.context_for(owner)),
                Some(owner),
            ));
        }
        Ok(())
    }
}

/// C# reserved keywords that cannot be used as identifiers
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of the `nth` occurrence of a quoted name in the TOML source,
/// falling back to the first bare occurrence.
pub(crate) fn find_name_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let quoted = format!("\"{}\"", name);
    if let Some((pos, _)) = src.match_indices(&quoted).nth(nth) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    if nth == 0 {
        return src.find(name).map(|pos| SourceSpan::from((pos, name.len())));
    }
    None
}

/// Validate that a name is a valid C# identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if is_csharp_keyword(name) {
        return Some("name is a C# reserved keyword");
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
