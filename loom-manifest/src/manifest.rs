use std::{path::Path, str::FromStr};

use loomgen_codegen::Namespace;
use serde::Deserialize;

use crate::{
    Error, NamespaceDef, Result, TableDef, table::validate_tables, validate::ParseContext,
};

/// On-disk shape of loom.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    namespace: NamespaceDef,
    #[serde(default)]
    tables: Vec<TableDef>,
}

/// A parsed and validated loom.toml
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The code model to generate
    pub namespace: Namespace,
    /// Razor tables to generate
    pub tables: Vec<TableDef>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "loom.toml")
    }
}

impl Manifest {
    /// Parse a loom.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a loom.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawManifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        let ctx = ParseContext::new(content, filename);
        let namespace = raw.namespace.lower(&ctx)?;
        validate_tables(&raw.tables, &ctx)?;

        Ok(Self {
            namespace,
            tables: raw.tables,
        })
    }

    /// Number of types across all namespaces
    pub fn type_count(&self) -> usize {
        self.namespace.type_count()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use loomgen_codegen::{AccessModifier, Member};

    use super::*;

    const PEOPLE: &str = r##"
[namespace]
name = "Acme"
usings = ["System"]

[[namespace.types]]
name = "Person"
doc = "A person."
base_types = ["Acme.EntityBase"]

[[namespace.types.attributes]]
name = "System.Serializable"

[[namespace.types.members]]
kind = "field"
name = "_age"
type = "System.Int32"
access = "private"

[[namespace.types.members]]
kind = "property"
name = "Age"
type = "System.Int32"
backing_field = "_age"

[[namespace.types.members]]
kind = "method"
name = "Save"
returns = "System.Boolean"

[[namespace.types]]
name = "PersonView"
partial = true

[[namespace.namespaces]]
name = "Models"

[[namespace.namespaces.types]]
name = "Address"

[[namespace.namespaces.types.members]]
kind = "property"
name = "City"
type = "System.String"
set = false

[[tables]]
name = "PeopleTable"
items_source = "Model.People"
border = 1

[[tables.columns]]
binding_path = "Name"

[[tables.columns]]
binding_path = "Id"
caption = "#"
show_in_iteration = false
"##;

    #[test]
    fn test_parse_model() {
        let manifest: Manifest = PEOPLE.parse().unwrap();
        let ns = &manifest.namespace;

        assert_eq!(ns.name, "Acme");
        assert_eq!(ns.usings, ["System"]);
        assert_eq!(manifest.type_count(), 3);

        let person = &ns.types[0];
        assert_eq!(person.doc.as_deref(), Some("A person."));
        assert_eq!(person.base_types[0].full_path(), "Acme.EntityBase");
        assert_eq!(person.attributes.len(), 1);
        assert_eq!(person.members.len(), 3);
        assert!(matches!(&person.members[0], Member::Field(f) if f.access == AccessModifier::Private));
        assert!(matches!(&person.members[2], Member::Method(_)));
        assert!(ns.types[1].is_partial);

        let address = &ns.namespaces[0].types[0];
        match &address.members[0] {
            Member::Property(p) => assert!(p.has_getter && !p.has_setter),
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_tables() {
        let manifest: Manifest = PEOPLE.parse().unwrap();
        let table = &manifest.tables[0];

        let headers = table.headers();
        assert_eq!(headers[0].caption, "Name");
        assert_eq!(headers[1].caption, "#");
        assert!(!headers[1].show_in_iteration);
        assert_eq!(table.options().border, Some(1));

        let html = table.render().unwrap();
        assert!(html.contains("@foreach (var item in Model.People)"));
        assert!(!html.contains("@item.Id"));
    }

    #[test]
    fn test_reserved_keyword_type() {
        let err = r#"
[namespace]
name = "Acme"

[[namespace.types]]
name = "class"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_duplicate_type() {
        let err = r#"
[namespace]
name = "Acme"

[[namespace.types]]
name = "Person"

[[namespace.types]]
name = "Person"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { ref kind, .. } if kind == "type"));
    }

    #[test]
    fn test_invalid_access() {
        let err = r#"
[namespace]
name = "Acme"

[[namespace.types]]
name = "Person"
access = "friend"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidAccess { .. }));
    }

    #[test]
    fn test_unknown_member_kind() {
        let err = r#"
[namespace]
name = "Acme"

[[namespace.types]]
name = "Person"

[[namespace.types.members]]
kind = "indexer"
name = "Item"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_table_without_columns() {
        let err = r#"
[namespace]
name = "Acme"

[[tables]]
name = "People"
items_source = "Model.People"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(err.to_string().contains("no columns"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PEOPLE.as_bytes()).unwrap();

        let manifest = Manifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.tables.len(), 1);

        let err = Manifest::from_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
