use pojogen_codegen::{CodegenError, PackageResolver, PojoCompiler, TypeResolver};
use pojogen_core::{ClassName, TypeSpec, TypeVariableName};
use pojogen_model::{MethodModel, ObjectModel, Property, TemplateArg};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("pojogen_codegen=trace")
        .with_test_writer()
        .try_init();
}

fn widget_resolver() -> PackageResolver {
    PackageResolver::new("com.example.model")
        .with_alias("string", ClassName::new("java.lang", "String"))
}

fn widget_model() -> ObjectModel {
    ObjectModel::named("Widget")
        .with_property(Property::typed("id", "string").required())
        .with_property(
            Property::object(
                "tag",
                ObjectModel::default().with_property(Property::typed("v", "int")),
            )
            .serialized_as("Tag"),
        )
}

fn field_type(spec: &TypeSpec, name: &str) -> String {
    spec.field(name)
        .map(|f| f.type_name.to_string())
        .unwrap_or_else(|| panic!("field {} missing", name))
}

#[test]
fn test_widget_scenario() {
    init_tracing();
    let mut compiler = PojoCompiler::new(widget_resolver());

    let widget = compiler
        .generate_object("Widget", &widget_model(), "Widget")
        .expect("widget compiles");

    assert_eq!(field_type(&widget, "id"), "java.lang.String");
    assert_eq!(field_type(&widget, "tag"), "com.example.model.WidgetTag");

    let tag_class = ClassName::new("com.example.model", "WidgetTag");
    let tag = compiler
        .generated_types()
        .get(&tag_class)
        .expect("inline object registered");
    assert_eq!(field_type(tag, "v"), "int");

    let set_id = widget.method("setId").expect("setId present");
    assert_eq!(
        set_id.signature(),
        "public com.example.model.Widget setId(java.lang.String id)"
    );

    let set_tag = widget.method("setTag").expect("setTag present");
    assert_eq!(
        set_tag.signature(),
        "public com.example.model.Widget setTag(@jakarta.annotation.Nonnull com.example.model.WidgetTag tag)"
    );

    let tag_field = widget.field("tag").expect("tag field");
    assert_eq!(
        tag_field.annotation("JsonProperty").map(ToString::to_string).as_deref(),
        Some("@com.fasterxml.jackson.annotation.JsonProperty(\"Tag\")")
    );
    assert!(widget.field("id").expect("id field").annotations.is_empty());
}

#[test]
fn test_widget_from_json() {
    init_tracing();
    let json = r#"{
        "name": "Widget",
        "properties": [
            { "name": "id", "type": "string", "required": true },
            {
                "name": "tag",
                "object": { "properties": [ { "name": "v", "type": "int" } ] },
                "serializedName": "Tag"
            }
        ],
        "methods": [
            {
                "name": "tagOrDefault",
                "returnType": "WidgetTag",
                "body": "return tag != null ? tag : new $T();\n",
                "bodyArguments": ["<type>WidgetTag"]
            }
        ]
    }"#;
    let model: ObjectModel = serde_json::from_str(json).expect("valid model json");

    let mut compiler = PojoCompiler::new(widget_resolver());
    let name = compiler
        .add_generated_object("Widget", &model, "Widget")
        .expect("widget compiles");

    let registry = compiler.into_generated_types();
    let names: Vec<&str> = registry.names().map(ClassName::simple_name).collect();
    assert_eq!(names, ["WidgetTag", "Widget"]);

    let widget = registry.get(&name).expect("widget registered");
    let method = widget.method("tagOrDefault").expect("declared method present");
    assert_eq!(
        method.code.to_string(),
        "    return tag != null ? tag : new com.example.model.WidgetTag();\n"
    );
}

#[test]
fn test_property_count_matches_members() {
    let mut model = ObjectModel::named("Record");
    for i in 0..5 {
        model = model.with_property(Property::typed(format!("f{}", i), "long"));
    }

    let spec = PojoCompiler::new(widget_resolver())
        .generate_object("Record", &model, "Record")
        .expect("record compiles");

    assert_eq!(spec.fields().len(), 5);
    assert_eq!(spec.methods().len(), 5);
    assert!(spec.methods().iter().all(|m| m.name.starts_with("setF")));
}

#[test]
fn test_missing_variant_is_fatal() {
    let mut model = widget_model();
    model.properties[0].type_name = None;

    let mut compiler = PojoCompiler::new(widget_resolver());
    let err = compiler
        .add_generated_object("Widget", &model, "Widget")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "model error: no type specified for property 'id'"
    );
    assert!(compiler.generated_types().is_empty());
}

#[test]
fn test_failed_run_leaves_no_partial_entries() {
    init_tracing();
    let mut compiler = PojoCompiler::new(widget_resolver());
    compiler
        .add_generated_object(
            "Keep",
            &ObjectModel::named("Keep").with_property(Property::typed("x", "int")),
            "Keep",
        )
        .expect("first object compiles");

    let broken = widget_model().with_method(
        MethodModel::new("broken", "void", "use($T);\n")
            .with_body_argument(TemplateArg::literal("not a type")),
    );
    let err = compiler
        .add_generated_object("Widget", &broken, "Widget")
        .unwrap_err();

    assert!(matches!(err, CodegenError::Format(_)));
    let names: Vec<&str> = compiler
        .generated_types()
        .names()
        .map(ClassName::simple_name)
        .collect();
    assert_eq!(names, ["Keep"]);
}

#[test]
fn test_generic_object_with_customizer() {
    let model = ObjectModel::named("Page")
        .with_property(Property::typed("items", "List<T>").required())
        .with_property(Property::typed("next", "Page<T>"))
        .with_method(
            MethodModel::new("first", "T", "return items.isEmpty() ? null : items.get(0);\n"),
        );

    let resolver = widget_resolver();
    let mut compiler = PojoCompiler::new(resolver.clone());
    let page = compiler
        .generate_object_with("Page", &model, "Page", |builder| {
            builder.add_type_variable(TypeVariableName::new("T"));
        })
        .expect("page compiles");

    assert_eq!(page.type_variables().len(), 1);
    assert_eq!(resolver.spec_type_name(&page).to_string(), "com.example.model.Page<T>");
    assert_eq!(
        page.method("setNext").expect("setter").signature(),
        "public com.example.model.Page<T> setNext(@jakarta.annotation.Nonnull com.example.model.Page<T> next)"
    );
}
