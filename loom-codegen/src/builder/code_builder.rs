//! Code builder utility for generating properly indented text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building text with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`, prefixed with `push_`).
///
/// # Example (Consuming API)
///
/// ```
/// use loomgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .line("class Foo")
///     .line("{")
///     .indent()
///     .line("int x;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Foo\n{\n    int x;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use loomgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::markup();
/// builder
///     .push_line("<tr>")
///     .push_indent()
///     .push_line("<td>Ann</td>")
///     .push_dedent()
///     .push_line("</tr>");
/// assert_eq!(builder.build(), "<tr>\n  <td>Ann</td>\n</tr>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Create a new CodeBuilder with 2-space indentation (markup default).
    pub fn markup() -> Self {
        Self::new(Indent::MARKUP)
    }

    /// Start writing at the given indentation level.
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an XML documentation comment (mutable).
    pub fn push_xml_doc(&mut self, text: &str) -> &mut Self {
        self.push_line("/// <summary>");
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line));
            }
        }
        self.push_line("/// </summary>")
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::XmlDoc(text) => {
                self.push_xml_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use loomgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::markup()
    ///     .block_with_close("<tbody>", "</tbody>", |b: CodeBuilder| {
    ///         b.line("<tr></tr>")
    ///     })
    ///     .build();
    /// assert_eq!(code, "<tbody>\n  <tr></tr>\n</tbody>\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
