//! Field and setter generation for object properties.

use super::methods::resolve_arguments;
use super::objects::PojoCompiler;
use crate::error::{CodegenError, Result};
use crate::resolver::TypeResolver;
use pojogen_core::{
    AnnotationSpec, CodeArg, FieldSpec, MethodSpec, Modifiers, ParameterSpec, TypeName,
    TypeSpecBuilder,
};
use pojogen_model::naming::capitalize;
use pojogen_model::{AnnotationModel, ObjectModel, Property, PropertyType};

impl<R: TypeResolver> PojoCompiler<R> {
    /// Adds a field for every property, then a setter for every property.
    ///
    /// Each property's type is computed once and shared by its field and
    /// its setter, so an inline object is never generated twice.
    pub(super) fn add_properties(
        &mut self,
        builder: &mut TypeSpecBuilder,
        spec_name: &TypeName,
        model: &ObjectModel,
        prefix: &str,
    ) -> Result<()> {
        let mut typed = Vec::with_capacity(model.properties.len());

        for property in &model.properties {
            let type_name = self.property_type_name(property, prefix)?;
            builder.add_field(self.generate_field(property, &type_name)?);
            typed.push((property, type_name));
        }

        for (property, type_name) in typed {
            builder.add_method(self.generate_setter(property, type_name, spec_name)?);
        }

        Ok(())
    }

    /// Resolves the type of a property.
    ///
    /// An inline object becomes a generated type named after `prefix` and
    /// the property, registered on first use. Its own inline objects get an
    /// empty prefix unless scoped prefixes are enabled.
    fn property_type_name(&mut self, property: &Property, prefix: &str) -> Result<TypeName> {
        match property.property_type()? {
            PropertyType::Named(token) => self.resolver.type_name(token),
            PropertyType::Object(object) => {
                let class_name = self.resolver.type_name_for(&[prefix, property.name.as_str()]);
                let scoped = self.options.scoped_prefixes;
                self.generated_type(&class_name, |compiler, simple| {
                    let inline_prefix = if scoped { simple } else { "" };
                    compiler.build_object(simple, object, inline_prefix, |_| {})
                })?;
                Ok(TypeName::Class(class_name))
            }
        }
    }

    /// Generates the public field backing a property.
    fn generate_field(&self, property: &Property, type_name: &TypeName) -> Result<FieldSpec> {
        let mut field =
            FieldSpec::builder(type_name.clone(), &property.name).add_modifiers(Modifiers::PUBLIC);

        let serialized_name = property.serialized_name();
        if serialized_name != property.name {
            let annotation = AnnotationSpec::builder(self.options.serialized_name_annotation.clone())
                .add_member("value", "$S", &[CodeArg::from(serialized_name)])?
                .build();
            field = field.add_annotation(annotation);
        }

        for annotation in &property.annotations {
            field = field.add_annotation(self.generate_annotation(annotation)?);
        }

        Ok(field.build())
    }

    /// Generates a model annotation with its members formatted.
    fn generate_annotation(&self, model: &AnnotationModel) -> Result<AnnotationSpec> {
        let class_name = match self.resolver.type_name(&model.type_name)? {
            TypeName::Class(class_name) => class_name,
            other => return Err(CodegenError::unsupported_shape(&other, "as an annotation")),
        };

        let mut builder = AnnotationSpec::builder(class_name);
        for member in &model.members {
            let arguments = resolve_arguments(&self.resolver, &member.value.arguments)?;
            builder = builder.add_member(&member.name, &member.value.format, &arguments)?;
        }
        Ok(builder.build())
    }

    /// Generates the chaining setter of a property.
    fn generate_setter(
        &self,
        property: &Property,
        type_name: TypeName,
        spec_name: &TypeName,
    ) -> Result<MethodSpec> {
        let mut parameter = ParameterSpec::new(type_name, &property.name);
        if !property.required {
            parameter =
                parameter.with_annotation(AnnotationSpec::of(self.options.not_null_annotation.clone()));
        }

        let name = format!("{}{}", self.options.setter_prefix, capitalize(&property.name));
        let field = CodeArg::from(property.name.as_str());

        Ok(MethodSpec::builder(name)
            .add_modifiers(Modifiers::PUBLIC)
            .returns(spec_name.clone())
            .add_parameter(parameter)
            .add_statement("this.$L = $L", &[field.clone(), field])?
            .add_statement("return this", &[])?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CodegenError;
    use crate::java::PojoCompiler;
    use crate::options::CompilerOptions;
    use crate::resolver::PackageResolver;
    use pojogen_core::ClassName;
    use pojogen_model::{AnnotationModel, MemberValue, ObjectModel, Property, TemplateArg};

    fn compiler() -> PojoCompiler<PackageResolver> {
        PojoCompiler::new(
            PackageResolver::new("com.example.model")
                .with_alias("string", ClassName::new("java.lang", "String")),
        )
    }

    #[test]
    fn test_fields_precede_setters() {
        let model = ObjectModel::named("Account")
            .with_property(Property::typed("id", "long").required())
            .with_property(Property::typed("owner", "string"))
            .with_property(Property::typed("tags", "List<string>"));

        let spec = compiler()
            .generate_object("Account", &model, "Account")
            .expect("object generates");

        let fields: Vec<&str> = spec.fields().iter().map(|f| f.name.as_str()).collect();
        let setters: Vec<&str> = spec.methods().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(fields, ["id", "owner", "tags"]);
        assert_eq!(setters, ["setId", "setOwner", "setTags"]);
    }

    #[test]
    fn test_setter_shape() {
        let model = ObjectModel::named("Account").with_property(Property::typed("owner", "string"));

        let spec = compiler()
            .generate_object("Account", &model, "Account")
            .expect("object generates");
        let setter = spec.method("setOwner").expect("setter present");

        assert_eq!(
            setter.signature(),
            "public com.example.model.Account setOwner(@jakarta.annotation.Nonnull java.lang.String owner)"
        );
        assert_eq!(setter.code.to_string(), "this.owner = owner;\nreturn this;\n");
    }

    #[test]
    fn test_not_null_follows_required() {
        let model = ObjectModel::named("Account")
            .with_property(Property::typed("id", "long").required())
            .with_property(Property::typed("owner", "string"));

        let spec = compiler()
            .generate_object("Account", &model, "Account")
            .expect("object generates");

        let id = spec.method("setId").and_then(|m| m.parameter("id")).expect("parameter");
        let owner = spec
            .method("setOwner")
            .and_then(|m| m.parameter("owner"))
            .expect("parameter");
        assert!(id.annotations.is_empty());
        assert!(owner.annotation("Nonnull").is_some());
    }

    #[test]
    fn test_serialized_name_annotation() {
        let model = ObjectModel::named("Account")
            .with_property(Property::typed("id", "long").serialized_as("id"))
            .with_property(Property::typed("owner", "string").serialized_as("owner_name"));

        let spec = compiler()
            .generate_object("Account", &model, "Account")
            .expect("object generates");

        assert!(spec.field("id").expect("field").annotations.is_empty());
        let owner = spec.field("owner").expect("field");
        assert_eq!(
            owner.to_string(),
            "@com.fasterxml.jackson.annotation.JsonProperty(\"owner_name\") public java.lang.String owner;"
        );
    }

    #[test]
    fn test_model_annotations_resolve_type_arguments() {
        let annotation = AnnotationModel::new("com.example.json.Codec")
            .with_member(
                "using",
                MemberValue::new("$T.class", vec![TemplateArg::parse("<type>OwnerCodec")]),
            )
            .with_member("label", MemberValue::new("$S", vec![TemplateArg::literal("owner")]));
        let model = ObjectModel::named("Account")
            .with_property(Property::typed("owner", "string").with_annotation(annotation));

        let spec = compiler()
            .generate_object("Account", &model, "Account")
            .expect("object generates");

        let codec = spec
            .field("owner")
            .and_then(|f| f.annotation("Codec"))
            .expect("annotation present");
        assert_eq!(
            codec.to_string(),
            "@com.example.json.Codec(using = com.example.model.OwnerCodec.class, label = \"owner\")"
        );
    }

    #[test]
    fn test_annotation_must_be_a_class() {
        let model = ObjectModel::named("Account").with_property(
            Property::typed("owner", "string").with_annotation(AnnotationModel::new("int")),
        );

        let err = compiler()
            .generate_object("Account", &model, "Account")
            .unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedNameShape { shape: "primitive", .. }
        ));
    }

    #[test]
    fn test_inline_object_generated_once() {
        let mut compiler = compiler();
        let model = ObjectModel::named("Widget").with_property(Property::object(
            "tag",
            ObjectModel::default().with_property(Property::typed("v", "int")),
        ));

        let spec = compiler
            .generate_object("Widget", &model, "Widget")
            .expect("object generates");
        compiler
            .generate_object("Widget", &model, "Widget")
            .expect("object generates again");

        assert_eq!(compiler.generated_types().len(), 1);
        assert_eq!(
            spec.field("tag").map(|f| f.type_name.to_string()).as_deref(),
            Some("com.example.model.WidgetTag")
        );
    }

    #[test]
    fn test_deep_inline_objects() {
        let inner = ObjectModel::default().with_property(Property::typed("depth", "int"));
        let outer = ObjectModel::default().with_property(Property::object("inner", inner));
        let model = ObjectModel::named("Root").with_property(Property::object("outer", outer));

        let mut compiler = compiler();
        compiler
            .generate_object("Root", &model, "Root")
            .expect("object generates");

        let names: Vec<String> = compiler
            .generated_types()
            .names()
            .map(ClassName::canonical_name)
            .collect();
        assert_eq!(names, ["com.example.model.Inner", "com.example.model.RootOuter"]);
    }

    #[test]
    fn test_deep_inline_objects_with_scoped_prefixes() {
        let inner = ObjectModel::default().with_property(Property::typed("depth", "int"));
        let outer = ObjectModel::default().with_property(Property::object("inner", inner));
        let model = ObjectModel::named("Root").with_property(Property::object("outer", outer));

        let mut compiler = PojoCompiler::with_options(
            PackageResolver::new("com.example.model"),
            CompilerOptions::new().scoped_prefixes(true),
        );
        compiler
            .generate_object("Root", &model, "Root")
            .expect("object generates");

        let names: Vec<String> = compiler
            .generated_types()
            .names()
            .map(ClassName::canonical_name)
            .collect();
        assert_eq!(
            names,
            [
                "com.example.model.RootOuterInner",
                "com.example.model.RootOuter"
            ]
        );
    }

    #[test]
    fn test_failed_inline_object_drops_its_inline_objects() {
        let outer = ObjectModel::default()
            .with_property(Property::object(
                "inner",
                ObjectModel::default().with_property(Property::typed("d", "int")),
            ))
            .with_property(Property::typed("bad", "Map<,>"));
        let model = ObjectModel::named("Root").with_property(Property::object("outer", outer));

        for scoped in [false, true] {
            let mut compiler = PojoCompiler::with_options(
                PackageResolver::new("com.example.model"),
                CompilerOptions::new().validate(false).scoped_prefixes(scoped),
            );
            let err = compiler
                .generate_object("Root", &model, "Root")
                .unwrap_err();

            assert!(matches!(err, CodegenError::InvalidTypeName { .. }));
            assert!(compiler.generated_types().is_empty());
        }
    }

    #[test]
    fn test_missing_variant_without_validation() {
        let mut property = Property::typed("tag", "int");
        property.type_name = None;
        let model = ObjectModel::named("Widget").with_property(property);

        let mut compiler = PojoCompiler::with_options(
            PackageResolver::new("com.example.model"),
            CompilerOptions::new().validate(false),
        );
        let err = compiler
            .generate_object("Widget", &model, "Widget")
            .unwrap_err();

        assert_eq!(err.to_string(), "model error: no type specified for property 'tag'");
    }

    #[test]
    fn test_custom_setter_prefix() {
        let model = ObjectModel::named("Account").with_property(Property::typed("id", "long"));
        let mut compiler = PojoCompiler::with_options(
            PackageResolver::new("com.example.model"),
            CompilerOptions::new().setter_prefix("with"),
        );

        let spec = compiler
            .generate_object("Account", &model, "Account")
            .expect("object generates");
        assert!(spec.method("withId").is_some());
    }
}
