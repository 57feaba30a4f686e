//! C# namespace builder.

use indexmap::IndexSet;
use loomgen_codegen::builder::{CodeFragment, Renderable};

use super::ClassDecl;

/// A namespace block with its using directives and classes.
///
/// Using directives are deduplicated and kept in first-seen order. A
/// namespace with an empty name renders its contents at file scope.
#[derive(Debug, Clone, Default)]
pub struct NamespaceDecl {
    name: String,
    usings: IndexSet<String>,
    classes: Vec<ClassDecl>,
}

impl NamespaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a using directive (mutable).
    pub fn push_using(&mut self, namespace: impl Into<String>) -> &mut Self {
        let namespace = namespace.into();
        if !namespace.trim().is_empty() {
            self.usings.insert(namespace);
        }
        self
    }

    /// Add several using directives (mutable).
    pub fn push_usings<S: AsRef<str>>(&mut self, namespaces: impl IntoIterator<Item = S>) -> &mut Self {
        for namespace in namespaces {
            self.push_using(namespace.as_ref());
        }
        self
    }

    /// Add a class (mutable).
    pub fn push_class(&mut self, class: ClassDecl) -> &mut Self {
        self.classes.push(class);
        self
    }

    pub fn usings(&self) -> impl Iterator<Item = &str> {
        self.usings.iter().map(String::as_str)
    }

    pub fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .usings
            .iter()
            .map(|u| CodeFragment::line(format!("using {};", u)))
            .collect();

        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 || !self.usings.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(class.to_fragments());
        }
        body
    }
}

impl Renderable for NamespaceDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.name.is_empty() {
            self.body_fragments()
        } else {
            vec![CodeFragment::braced(
                format!("namespace {}", self.name),
                self.body_fragments(),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use loomgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(ns: &NamespaceDecl) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(ns);
        builder.build()
    }

    #[test]
    fn test_usings_deduplicated_in_order() {
        let mut ns = NamespaceDecl::new("Acme");
        ns.push_usings(["System", "System.Linq", "System", ""]);
        let usings: Vec<_> = ns.usings().collect();
        assert_eq!(usings, ["System", "System.Linq"]);
    }

    #[test]
    fn test_namespace_block() {
        let mut ns = NamespaceDecl::new("Acme.Models");
        ns.push_using("System").push_class(ClassDecl::new("Person"));

        assert_eq!(
            render(&ns),
            "namespace Acme.Models\n\
             {\n\
             \x20   using System;\n\
             \n\
             \x20   public class Person\n\
             \x20   {\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_global_namespace() {
        let mut ns = NamespaceDecl::new("");
        ns.push_class(ClassDecl::new("A")).push_class(ClassDecl::new("B"));

        assert_eq!(
            render(&ns),
            "public class A\n{\n}\n\npublic class B\n{\n}\n"
        );
    }
}
