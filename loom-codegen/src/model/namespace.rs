use super::TypeDecl;

/// A namespace owning nested namespaces and type declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Namespace {
    /// Dotted name, relative to the parent namespace.
    pub name: String,
    /// Using directives applied to every type in this namespace.
    pub usings: Vec<String>,
    pub namespaces: Vec<Namespace>,
    pub types: Vec<TypeDecl>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        self.usings.push(namespace.into());
        self
    }

    /// Add a nested namespace.
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Add a type declaration.
    pub fn type_decl(mut self, ty: TypeDecl) -> Self {
        self.types.push(ty);
        self
    }

    /// Add multiple type declarations.
    pub fn types(mut self, types: impl IntoIterator<Item = TypeDecl>) -> Self {
        self.types.extend(types);
        self
    }

    /// This namespace and all nested ones, depth-first, with full dotted names.
    pub fn walk(&self) -> Vec<(String, &Namespace)> {
        let mut out = Vec::new();
        self.walk_into(None, &mut out);
        out
    }

    fn walk_into<'a>(&'a self, parent: Option<&str>, out: &mut Vec<(String, &'a Namespace)>) {
        let full_name = match parent {
            Some(parent) if !parent.is_empty() => format!("{}.{}", parent, self.name),
            _ => self.name.clone(),
        };
        out.push((full_name.clone(), self));
        for child in &self.namespaces {
            child.walk_into(Some(&full_name), out);
        }
    }

    /// Number of types in this namespace and all nested ones.
    pub fn type_count(&self) -> usize {
        self.walk().iter().map(|(_, ns)| ns.types.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_full_names() {
        let ns = Namespace::new("Acme")
            .type_decl(TypeDecl::new("Root"))
            .namespace(
                Namespace::new("Models")
                    .type_decl(TypeDecl::new("Person"))
                    .namespace(Namespace::new("Dto").type_decl(TypeDecl::new("PersonDto"))),
            )
            .namespace(Namespace::new("Views"));

        let names: Vec<String> = ns.walk().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["Acme", "Acme.Models", "Acme.Models.Dto", "Acme.Views"]
        );
        assert_eq!(ns.type_count(), 3);
    }
}
