//! Main/partial code-behind provider.

use loomgen_codegen::{CodeGenProvider, GenArgs, model::Namespace};
use loomgen_core::{Code, Codes, Language, Result};

use crate::{
    CSharpTypeMapper,
    lower::{self, Buckets},
};

/// Renders a namespace into two C# units: one holding the non-partial types
/// and one holding the partial types.
///
/// Both units are always returned, even when one of them has no types.
///
/// # Example
///
/// ```
/// use loomgen_codegen::{GenArgs, Namespace, Property, TypeDecl};
/// use loomgen_codegen_csharp::{CodeDomCodeGenProvider, CodeGenProvider};
///
/// let ns = Namespace::new("Acme").type_decl(
///     TypeDecl::new("Person").member(Property::new("Name", "System.String")),
/// );
///
/// let codes = CodeDomCodeGenProvider::new()
///     .generate_behind_code(&ns, &GenArgs::default())
///     .unwrap();
///
/// assert!(codes.get("Main").unwrap().statement().contains("public string Name { get; set; }"));
/// assert!(codes.get("Partial").unwrap().statement().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeDomCodeGenProvider {
    mapper: CSharpTypeMapper,
}

impl CodeDomCodeGenProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeGenProvider for CodeDomCodeGenProvider {
    fn generate_behind_code(&self, namespace: &Namespace, args: &GenArgs) -> Result<Codes> {
        lower::validate(namespace)?;
        tracing::debug!(namespace = %namespace.name, "generating code-behind");

        let buckets = Buckets::partition(namespace);
        let main = lower::build_unit(&buckets.main, args.header.clone(), &self.mapper);
        let partial = lower::build_unit(&buckets.partial, args.header.clone(), &self.mapper);

        let codes = Codes::new()
            .with(Code::new(
                &args.main_name,
                Language::CSHARP,
                main.render(),
                false,
            )?)
            .with(Code::new(
                &args.partial_name,
                Language::CSHARP,
                partial.render(),
                true,
            )?);

        tracing::debug!(
            namespace = %namespace.name,
            main_types = main.class_count(),
            partial_types = partial.class_count(),
            "generated code-behind"
        );
        Ok(codes)
    }
}
