//! Backend contracts.

use loomgen_core::{Code, Codes, Language, Result};

use crate::model::Namespace;

/// A language backend that renders a namespace to text.
///
/// Each backend owns its own grammar; nothing about the output format is
/// fixed at this level.
pub trait CodeGenerator {
    /// Render the namespace to source text.
    fn generate(&self, namespace: &Namespace) -> String;

    /// Render the namespace and wrap the text in a [`Code`] unit.
    fn generate_code(
        &self,
        namespace: &Namespace,
        name: &str,
        language: Language,
        is_partial: bool,
    ) -> Result<Code> {
        Code::new(name, language, self.generate(namespace), is_partial)
    }
}

/// Options for [`CodeGenProvider::generate_behind_code`].
#[derive(Debug, Clone)]
pub struct GenArgs {
    /// Name of the unit holding non-partial types.
    pub main_name: String,
    /// Name of the unit holding partial types.
    pub partial_name: String,
    /// Comment text placed at the top of each unit.
    pub header: Option<String>,
}

impl GenArgs {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Override the unit names.
    pub fn names(mut self, main: impl Into<String>, partial: impl Into<String>) -> Self {
        self.main_name = main.into();
        self.partial_name = partial.into();
        self
    }
}

impl Default for GenArgs {
    fn default() -> Self {
        Self {
            main_name: "Main".to_string(),
            partial_name: "Partial".to_string(),
            header: None,
        }
    }
}

/// A provider that splits a namespace into main and partial code units.
pub trait CodeGenProvider {
    /// Generate the code-behind units for a namespace.
    ///
    /// Fails before rendering anything if the input is invalid.
    fn generate_behind_code(&self, namespace: &Namespace, args: &GenArgs) -> Result<Codes>;
}
