//! Type (class) definitions.

use crate::annotation::AnnotationSpec;
use crate::modifiers::Modifiers;
use crate::spec::{FieldSpec, MethodSpec};
use crate::types::{TypeName, TypeVariableName};

/// A complete class definition, ready to be handed to an emitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    name: String,
    modifiers: Modifiers,
    type_variables: Vec<TypeVariableName>,
    superclass: Option<TypeName>,
    superinterfaces: Vec<TypeName>,
    annotations: Vec<AnnotationSpec>,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
    type_specs: Vec<TypeSpec>,
}

impl TypeSpec {
    /// Creates a builder for a class with the given simple name.
    #[must_use]
    pub fn class_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder {
            spec: Self {
                name: name.into(),
                modifiers: Modifiers::empty(),
                type_variables: Vec::new(),
                superclass: None,
                superinterfaces: Vec::new(),
                annotations: Vec::new(),
                fields: Vec::new(),
                methods: Vec::new(),
                type_specs: Vec::new(),
            },
        }
    }

    /// Returns the simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaration modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns the generic type variables.
    #[must_use]
    pub fn type_variables(&self) -> &[TypeVariableName] {
        &self.type_variables
    }

    /// Returns the superclass, if any.
    #[must_use]
    pub fn superclass(&self) -> Option<&TypeName> {
        self.superclass.as_ref()
    }

    /// Returns the implemented interfaces in declaration order.
    #[must_use]
    pub fn superinterfaces(&self) -> &[TypeName] {
        &self.superinterfaces
    }

    /// Returns the type-level annotations.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the methods in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    /// Returns the nested types in declaration order.
    #[must_use]
    pub fn type_specs(&self) -> &[TypeSpec] {
        &self.type_specs
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up the first method with the given name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Looks up a nested type by simple name.
    #[must_use]
    pub fn nested_type(&self, name: &str) -> Option<&TypeSpec> {
        self.type_specs.iter().find(|t| t.name == name)
    }
}

/// Builder for [`TypeSpec`].
///
/// Unlike the member builders this one is filled in place, so a definition
/// can be populated step by step and finished later.
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    spec: TypeSpec,
}

impl TypeSpecBuilder {
    /// Returns the simple name of the type being built.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Adds modifiers.
    pub fn add_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.spec.modifiers |= modifiers;
        self
    }

    /// Adds a generic type variable.
    pub fn add_type_variable(&mut self, variable: TypeVariableName) -> &mut Self {
        self.spec.type_variables.push(variable);
        self
    }

    /// Sets the single superclass, replacing any previous one.
    pub fn superclass(&mut self, superclass: TypeName) -> &mut Self {
        self.spec.superclass = Some(superclass);
        self
    }

    /// Adds an implemented interface.
    pub fn add_superinterface(&mut self, interface: TypeName) -> &mut Self {
        self.spec.superinterfaces.push(interface);
        self
    }

    /// Adds a type-level annotation.
    pub fn add_annotation(&mut self, annotation: AnnotationSpec) -> &mut Self {
        self.spec.annotations.push(annotation);
        self
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: FieldSpec) -> &mut Self {
        self.spec.fields.push(field);
        self
    }

    /// Adds a method.
    pub fn add_method(&mut self, method: MethodSpec) -> &mut Self {
        self.spec.methods.push(method);
        self
    }

    /// Adds a nested type.
    pub fn add_type(&mut self, nested: TypeSpec) -> &mut Self {
        self.spec.type_specs.push(nested);
        self
    }

    /// Builds a snapshot of the current definition.
    #[must_use]
    pub fn build(&self) -> TypeSpec {
        self.spec.clone()
    }

    /// Consumes the builder and returns the definition.
    #[must_use]
    pub fn into_spec(self) -> TypeSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassName, PrimitiveType};

    #[test]
    fn test_empty_class() {
        let spec = TypeSpec::class_builder("Empty").build();

        assert_eq!(spec.name(), "Empty");
        assert!(spec.modifiers().is_empty());
        assert!(spec.superclass().is_none());
        assert!(spec.fields().is_empty());
        assert!(spec.methods().is_empty());
        assert!(spec.type_specs().is_empty());
    }

    #[test]
    fn test_builder_populates_in_place() {
        let mut builder = TypeSpec::class_builder("Widget");
        builder
            .add_modifiers(Modifiers::PUBLIC)
            .superclass(TypeName::from(ClassName::new("com.example", "Base")))
            .add_superinterface(TypeName::from(ClassName::new("java.io", "Serializable")))
            .add_field(FieldSpec::builder(TypeName::from(PrimitiveType::Int), "id").build())
            .add_method(MethodSpec::builder("reset").build());

        let mut nested = TypeSpec::class_builder("Part");
        nested.add_modifiers(Modifiers::STATIC);
        builder.add_type(nested.into_spec());

        let spec = builder.build();
        assert_eq!(spec.modifiers(), Modifiers::PUBLIC);
        assert_eq!(
            spec.superclass().map(ToString::to_string).as_deref(),
            Some("com.example.Base")
        );
        assert_eq!(spec.superinterfaces().len(), 1);
        assert!(spec.field("id").is_some());
        assert!(spec.method("reset").is_some());
        assert_eq!(
            spec.nested_type("Part").map(TypeSpec::modifiers),
            Some(Modifiers::STATIC)
        );
    }

    #[test]
    fn test_superclass_replaces_previous() {
        let mut builder = TypeSpec::class_builder("Widget");
        builder
            .superclass(TypeName::from(ClassName::new("a", "First")))
            .superclass(TypeName::from(ClassName::new("a", "Second")));

        assert_eq!(
            builder.build().superclass().map(ToString::to_string).as_deref(),
            Some("a.Second")
        );
    }
}
