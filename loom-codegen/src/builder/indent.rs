//! Indentation configuration for code generation.

/// Indentation style for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// This many spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 4-space indentation (C#).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation (HTML, Razor templates).
    pub const MARKUP: Self = Self::Spaces(2);

    /// Append the indentation for `level` levels to `buf`.
    pub fn write_to(&self, buf: &mut String, level: usize) {
        match *self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', level * width as usize)),
            Self::Tab => buf.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(style: Indent, level: usize) -> String {
        let mut buf = String::new();
        style.write_to(&mut buf, level);
        buf
    }

    #[test]
    fn test_write_to() {
        assert_eq!(indent(Indent::MARKUP, 3), "      ");
        assert_eq!(indent(Indent::CSHARP, 1), "    ");
        assert_eq!(indent(Indent::Spaces(3), 2), "      ");
        assert_eq!(indent(Indent::Tab, 2), "\t\t");
        assert_eq!(indent(Indent::CSHARP, 0), "");
    }
}
