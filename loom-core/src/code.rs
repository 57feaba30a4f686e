//! Generated code units.

use std::hash::{Hash, Hasher};

use crate::{Error, Language, Result};

/// A named unit of generated text.
///
/// Two codes are equal when their names are equal; language, statement and
/// the partial flag are not compared.
#[derive(Debug, Clone)]
pub struct Code {
    name: String,
    language: Language,
    statement: String,
    is_partial: bool,
    file_name: Option<String>,
}

impl Code {
    /// Create a code unit. Fails if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        language: Language,
        statement: impl Into<String>,
        is_partial: bool,
    ) -> Result<Self> {
        let name = name.into();
        Error::ensure_not_blank("name", &name)?;
        Ok(Self {
            name,
            language,
            statement: statement.into(),
            is_partial,
            file_name: None,
        })
    }

    /// Override the derived file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The generated text.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    /// File name for this unit.
    ///
    /// `{Name}.{ext}` for main units and `{Name}.partial.tmp.{ext}` for
    /// partial units, unless overridden with [`Code::with_file_name`].
    pub fn file_name(&self) -> String {
        if let Some(file_name) = &self.file_name {
            return file_name.clone();
        }
        let base = if self.is_partial {
            format!("{}.partial.tmp", self.name)
        } else {
            self.name.clone()
        };
        self.language.apply_extension(&base)
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Code {}

impl Hash for Code {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// An ordered collection of [`Code`] units.
///
/// Names are not required to be unique; [`Codes::get`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codes(Vec<Code>);

impl Codes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a code unit.
    pub fn push(&mut self, code: Code) -> &mut Self {
        self.0.push(code);
        self
    }

    /// Append a code unit (consuming).
    pub fn with(mut self, code: Code) -> Self {
        self.0.push(code);
        self
    }

    /// First unit with the given name.
    pub fn get(&self, name: &str) -> Option<&Code> {
        self.0.iter().find(|code| code.name == name)
    }

    /// Units for the given language, in order.
    pub fn by_language(&self, language: Language) -> Codes {
        self.filtered(|code| code.language == language)
    }

    /// Units with the given partial flag, in order.
    pub fn by_partial(&self, is_partial: bool) -> Codes {
        self.filtered(|code| code.is_partial == is_partial)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&Code) -> bool) -> Codes {
        self.0.iter().filter(|code| predicate(code)).cloned().collect()
    }
}

impl FromIterator<Code> for Codes {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Code> for Codes {
    fn extend<I: IntoIterator<Item = Code>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Codes {
    type Item = Code;
    type IntoIter = std::vec::IntoIter<Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Codes {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(name: &str, language: Language, is_partial: bool) -> Code {
        Code::new(name, language, "// body", is_partial).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(code("Foo", Language::CSHARP, false).file_name(), "Foo.cs");
        assert_eq!(
            code("Foo", Language::CSHARP, true).file_name(),
            "Foo.partial.tmp.cs"
        );
        assert_eq!(code("Index", Language::BLAZOR, false).file_name(), "Index.razor");
        assert_eq!(code("README", Language::NONE, false).file_name(), "README");
    }

    #[test]
    fn test_file_name_override() {
        let code = code("Foo", Language::CSHARP, true).with_file_name("Foo.g.cs");
        assert_eq!(code.file_name(), "Foo.g.cs");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Code::new("", Language::CSHARP, "", false).is_err());
        assert!(Code::new("  ", Language::CSHARP, "", false).is_err());
    }

    #[test]
    fn test_equality_by_name() {
        let a = Code::new("Main", Language::CSHARP, "class A {}", false).unwrap();
        let b = Code::new("Main", Language::HTML, "<div></div>", true).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, code("Partial", Language::CSHARP, true));
    }

    #[test]
    fn test_indexers() {
        let codes = Codes::new()
            .with(code("Main", Language::CSHARP, false))
            .with(code("Partial", Language::CSHARP, true))
            .with(code("View", Language::BLAZOR, false));

        assert_eq!(codes.get("Main").map(Code::name), Some("Main"));
        assert!(codes.get("Missing").is_none());

        let csharp = codes.by_language(Language::CSHARP);
        let names: Vec<_> = csharp.iter().map(Code::name).collect();
        assert_eq!(names, ["Main", "Partial"]);

        let partial = codes.by_partial(true);
        assert_eq!(partial.len(), 1);
        assert_eq!(partial.get("Partial").map(Code::is_partial), Some(true));
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let mut codes = Codes::new();
        codes
            .push(Code::new("Main", Language::CSHARP, "first", false).unwrap())
            .push(Code::new("Main", Language::CSHARP, "second", false).unwrap());

        assert_eq!(codes.len(), 2);
        assert_eq!(codes.get("Main").map(Code::statement), Some("first"));
    }
}
