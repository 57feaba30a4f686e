//! Snapshot tests for C# code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use loomgen_codegen::{Field, GenArgs, Namespace, Property, TypeDecl};
use loomgen_codegen_csharp::{CSharpGenerator, CodeDomCodeGenProvider, CodeGenProvider, CodeGenerator};

fn people() -> Namespace {
    Namespace::new("Acme").namespace(
        Namespace::new("Models")
            .using("System")
            .type_decl(
                TypeDecl::new("Person")
                    .doc("A person.")
                    .base_type("Acme.EntityBase")
                    .member(Field::new("_age", "System.Int32").private())
                    .member(Property::new("Age", "System.Int32").backing_field("_age"))
                    .member(Property::new("Name", "System.String").nullable())
                    .member(
                        Property::new("Tags", "System.Collections.Generic.List<System.String>")
                            .read_only()
                            .initializer("new()"),
                    ),
            )
            .type_decl(
                TypeDecl::new("PersonView")
                    .partial()
                    .member(Property::new("Title", "System.String")),
            ),
    )
}

fn generate(ns: &Namespace) -> (String, String) {
    let args = GenArgs::default().header("<auto-generated />");
    let codes = CodeDomCodeGenProvider::new()
        .generate_behind_code(ns, &args)
        .expect("generation failed");

    let main = codes.get("Main").expect("main unit not found");
    let partial = codes.get("Partial").expect("partial unit not found");
    (main.statement().to_string(), partial.statement().to_string())
}

#[test]
fn test_main_unit() {
    let (main, _) = generate(&people());
    insta::assert_snapshot!(main, @r"
    // <auto-generated />

    namespace Acme.Models
    {
        using System;

        /// <summary>
        /// A person.
        /// </summary>
        public class Person : Acme.EntityBase
        {
            private int _age;

            public int Age { get => _age; set => _age = value; }

            public string? Name { get; set; }

            public System.Collections.Generic.List<string> Tags { get; } = new();
        }
    }
    ");
}

#[test]
fn test_partial_unit() {
    let (_, partial) = generate(&people());
    insta::assert_snapshot!(partial, @r"
    // <auto-generated />

    namespace Acme.Models
    {
        using System;

        public partial class PersonView
        {
            public string Title { get; set; }
        }
    }
    ");
}

#[test]
fn test_single_unit_generator() {
    let ns = Namespace::new("Acme")
        .type_decl(TypeDecl::new("A").member(Field::new("Count", "System.Int64").const_().initializer("0")))
        .type_decl(TypeDecl::new("B").partial().sealed());

    let text = CSharpGenerator::new().generate(&ns);
    insta::assert_snapshot!(text, @r"
    namespace Acme
    {
        public class A
        {
            public const long Count = 0;
        }

        public sealed partial class B
        {
        }
    }
    ");
}
