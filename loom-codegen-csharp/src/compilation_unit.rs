//! C# compilation unit accumulator.

use indexmap::IndexMap;
use loomgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::NamespaceDecl;

/// One C# source file under construction.
///
/// Namespace blocks are created on first use and reused afterwards, so types
/// from the same namespace end up in the same block.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    header: Option<String>,
    namespaces: IndexMap<String, NamespaceDecl>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment placed at the top of the file.
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Get the namespace block with the given name, creating it if needed.
    pub fn namespace_mut(&mut self, name: &str) -> &mut NamespaceDecl {
        self.namespaces
            .entry(name.to_string())
            .or_insert_with(|| NamespaceDecl::new(name))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceDecl> {
        self.namespaces.values()
    }

    /// Number of classes across all namespace blocks.
    pub fn class_count(&self) -> usize {
        self.namespaces.values().map(|ns| ns.classes().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Render the unit with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for CompilationUnit {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(header) = &self.header {
            for line in header.lines() {
                fragments.push(CodeFragment::line(format!("// {}", line).trim_end().to_string()));
            }
            if !self.namespaces.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
        }

        for (i, ns) in self.namespaces.values().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(ns.to_fragments());
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ClassDecl;

    #[test]
    fn test_empty_unit() {
        assert_eq!(CompilationUnit::new().render(), "");
    }

    #[test]
    fn test_namespace_created_once() {
        let mut unit = CompilationUnit::new();
        unit.namespace_mut("Acme").push_class(ClassDecl::new("A"));
        unit.namespace_mut("Acme").push_class(ClassDecl::new("B"));
        unit.namespace_mut("Acme.Views").push_class(ClassDecl::new("C"));

        assert_eq!(unit.namespaces().count(), 2);
        assert_eq!(unit.class_count(), 3);
    }

    #[test]
    fn test_header() {
        let mut unit = CompilationUnit::new().with_header(Some("<auto-generated />".to_string()));
        unit.namespace_mut("Acme").push_class(ClassDecl::new("A"));

        let code = unit.render();
        assert!(code.starts_with("// <auto-generated />\n\nnamespace Acme\n"));
    }
}
