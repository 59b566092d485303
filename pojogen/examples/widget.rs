//! Compiles a small model and prints the generated declarations.
//!
//! Run with: `cargo run --example widget`

use pojogen::prelude::*;

fn print_type(name: &ClassName, spec: &TypeSpec, indent: usize) {
    let pad = " ".repeat(indent);
    println!("{}{} {} {{", pad, spec.modifiers(), name);
    for field in spec.fields() {
        println!("{}    {}", pad, field);
    }
    for method in spec.methods() {
        println!("{}    {} {{", pad, method.signature());
        for line in method.code.to_string().lines() {
            println!("{}        {}", pad, line.trim_start());
        }
        println!("{}    }}", pad);
    }
    for nested in spec.type_specs() {
        print_type(&name.nested_class(nested.name()), nested, indent + 4);
    }
    println!("{}}}", pad);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("pojogen_codegen=debug")
        .init();

    let json = r#"{
        "name": "Widget",
        "interfaceNames": ["java.io.Serializable"],
        "nested": [
            { "name": "Part", "properties": [ { "name": "size", "type": "int", "required": true } ] }
        ],
        "properties": [
            { "name": "id", "type": "string", "required": true },
            { "name": "parts", "type": "List<Widget.Part>" },
            {
                "name": "tag",
                "serializedName": "Tag",
                "object": { "properties": [ { "name": "v", "type": "int" } ] }
            }
        ],
        "methods": [
            {
                "name": "partCount",
                "returnType": "int",
                "body": "return parts == null ? 0 : parts.size();\n"
            }
        ]
    }"#;
    let model: ObjectModel = serde_json::from_str(json)?;

    let resolver = PackageResolver::new("com.example.model")
        .with_alias("string", ClassName::new("java.lang", "String"));
    let mut compiler = PojoCompiler::new(resolver);
    compiler.add_generated_object("Widget", &model, "Widget")?;

    for (name, spec) in compiler.generated_types() {
        print_type(name, spec, 0);
        println!();
    }
    Ok(())
}
