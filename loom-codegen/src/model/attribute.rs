use loomgen_core::TypePath;

/// An attribute applied to a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: TypePath,
    /// Arguments in source order, already in target syntax.
    pub args: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<TypePath>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Add a named argument: `name = value`.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(format!("{} = {}", name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_args() {
        let attr = Attribute::new("System.Obsolete")
            .arg("\"use Person2\"")
            .named("DiagnosticId", "\"ACME001\"");

        assert_eq!(attr.name.name(), Some("Obsolete"));
        assert_eq!(attr.args, ["\"use Person2\"", "DiagnosticId = \"ACME001\""]);
    }
}
