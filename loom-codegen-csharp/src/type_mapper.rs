//! C# type mapper implementation.

use loomgen_core::TypePath;

/// Maps [`TypePath`]s to C# type syntax.
///
/// Well-known `System` types render as their C# keyword aliases and
/// `System.Nullable<T>` renders as `T?`. Everything else renders as its
/// full dotted path with `, `-separated generic arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl CSharpTypeMapper {
    /// Render a type reference.
    pub fn render_type(&self, ty: &TypePath) -> String {
        if ty.namespace() == Some("System") {
            if let Some(keyword) = ty.name().and_then(keyword_alias) {
                return keyword.to_string();
            }
            if ty.name() == Some("Nullable") && ty.generic_types().len() == 1 {
                return self.nullable(&self.render_type(&ty.generic_types()[0]));
            }
        }

        let base = ty.qualified_name();
        if base.is_empty() || !ty.is_generic() {
            return base;
        }
        let args: Vec<String> = ty
            .generic_types()
            .iter()
            .map(|arg| self.render_type(arg))
            .collect();
        format!("{}<{}>", base, args.join(", "))
    }

    /// Annotate a rendered type as nullable.
    pub fn nullable(&self, rendered: &str) -> String {
        if rendered.ends_with('?') {
            rendered.to_string()
        } else {
            format!("{}?", rendered)
        }
    }
}

fn keyword_alias(name: &str) -> Option<&'static str> {
    let keyword = match name {
        "Boolean" => "bool",
        "Byte" => "byte",
        "SByte" => "sbyte",
        "Char" => "char",
        "Decimal" => "decimal",
        "Double" => "double",
        "Single" => "float",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Object" => "object",
        "String" => "string",
        "Void" => "void",
        _ => return None,
    };
    Some(keyword)
}
