//! Single-unit C# generator.

use loomgen_codegen::{CodeGenerator, model::Namespace};

use crate::{CSharpTypeMapper, lower};

/// Renders a whole namespace tree, partial and non-partial types alike, into
/// one C# unit.
///
/// Member coverage matches [`CodeDomCodeGenProvider`](crate::CodeDomCodeGenProvider):
/// fields and properties are emitted, methods and events are not.
#[derive(Debug, Clone, Default)]
pub struct CSharpGenerator {
    mapper: CSharpTypeMapper,
    header: Option<String>,
}

impl CSharpGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment placed at the top of the output.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl CodeGenerator for CSharpGenerator {
    fn generate(&self, namespace: &Namespace) -> String {
        let entries = lower::type_entries(namespace);
        lower::build_unit(&entries, self.header.clone(), &self.mapper).render()
    }
}

#[cfg(test)]
mod tests {
    use loomgen_codegen::model::{Property, TypeDecl};
    use loomgen_core::Language;

    use super::*;

    #[test]
    fn test_single_unit_holds_all_types() {
        let ns = Namespace::new("Acme")
            .type_decl(TypeDecl::new("A").member(Property::new("Id", "System.Int32")))
            .type_decl(TypeDecl::new("B").partial());

        let text = CSharpGenerator::new().generate(&ns);
        assert!(text.contains("public class A"));
        assert!(text.contains("public int Id { get; set; }"));
        assert!(text.contains("public partial class B"));
        assert_eq!(text.matches("namespace Acme").count(), 1);
    }

    #[test]
    fn test_generate_code() {
        let ns = Namespace::new("Acme").type_decl(TypeDecl::new("A"));
        let code = CSharpGenerator::new()
            .with_header("<auto-generated />")
            .generate_code(&ns, "Acme", Language::CSHARP, false)
            .unwrap();

        assert_eq!(code.file_name(), "Acme.cs");
        assert!(code.statement().starts_with("// <auto-generated />"));
    }
}
