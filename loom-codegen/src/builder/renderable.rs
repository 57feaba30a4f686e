//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Syntax nodes produce fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// An XML documentation comment (`/// <summary>`), one line per text line.
    XmlDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a brace-delimited block whose header and braces sit on their
    /// own lines.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::Block {
                header: "{".to_string(),
                body,
                close: Some("}".to_string()),
            },
        ])
    }

    /// Create an XML doc comment fragment.
    pub fn xml_doc(s: impl Into<String>) -> Self {
        Self::XmlDoc(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(
            CodeFragment::xml_doc("A person"),
            CodeFragment::XmlDoc("A person".to_string())
        );
    }

    #[test]
    fn test_braced_fragment() {
        let braced = CodeFragment::braced("class A", vec![CodeFragment::line("int x;")]);
        match braced {
            CodeFragment::Sequence(parts) => {
                assert_eq!(parts[0], CodeFragment::line("class A"));
                assert!(matches!(&parts[1], CodeFragment::Block { header, .. } if header == "{"));
            }
            _ => panic!("Expected Sequence variant"),
        }
    }
}
