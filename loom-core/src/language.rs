//! Output language table.

use std::fmt;

/// A target language for generated text.
///
/// The set is closed: use the associated constants or [`Language::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    name: &'static str,
    file_extension: &'static str,
}

impl Language {
    /// C# source (`.cs`).
    pub const CSHARP: Self = Self::new("CSharp", "cs");

    /// XAML markup (`.xaml`).
    pub const XAML: Self = Self::new("Xaml", "xaml");

    /// Blazor/Razor component templates (`.razor`).
    pub const BLAZOR: Self = Self::new("Blazor", "razor");

    /// Plain HTML (`.html`).
    pub const HTML: Self = Self::new("Html", "html");

    /// No language; file names get no extension.
    pub const NONE: Self = Self::new("None", "");

    /// Every known language, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::CSHARP,
        Self::XAML,
        Self::BLAZOR,
        Self::HTML,
        Self::NONE,
    ];

    const fn new(name: &'static str, file_extension: &'static str) -> Self {
        Self {
            name,
            file_extension,
        }
    }

    /// Display name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// File extension without the leading dot (empty for [`Language::NONE`]).
    pub fn file_extension(&self) -> &'static str {
        self.file_extension
    }

    /// Look up a language by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// Append this language's extension to a base file name.
    pub fn apply_extension(&self, base: &str) -> String {
        if self.file_extension.is_empty() {
            base.to_string()
        } else {
            format!("{}.{}", base, self.file_extension)
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
