//! Declarative object model definitions.
//!
//! These types describe *what* to generate: an object with an optional
//! supertype and interfaces, nested objects, properties and methods. They
//! are plain values produced by an external loader (keys are camelCase when
//! deserialized) and only read by the compiler.

use crate::error::{ModelError, Result};
use crate::template::TemplateArg;
use serde::{Deserialize, Serialize};

/// Declarative description of one generated type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectModel {
    /// Type name. Required for nested objects, ignored for inline
    /// property objects whose name is synthesized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Symbolic name of the supertype.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    /// Symbolic names of implemented interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interface_names: Vec<String>,
    /// Nested objects, compiled as static member types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ObjectModel>,
    /// Properties, each becoming a field and a setter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    /// Methods with templated bodies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodModel>,
}

impl ObjectModel {
    /// Creates an empty named model.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the supertype.
    #[must_use]
    pub fn extends(mut self, super_name: impl Into<String>) -> Self {
        self.super_name = Some(super_name.into());
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.interface_names.push(interface_name.into());
        self
    }

    /// Adds a nested object.
    #[must_use]
    pub fn with_nested(mut self, nested: ObjectModel) -> Self {
        self.nested.push(nested);
        self
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }
}

/// Declarative description of one field and its setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Property (and field) name.
    pub name: String,
    /// Symbolic type token. Exclusive with `object`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Inline object definition. Exclusive with `type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Box<ObjectModel>>,
    /// Whether the property must be set.
    #[serde(default)]
    pub required: bool,
    /// Name used on the wire; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_name: Option<String>,
    /// Additional field annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationModel>,
}

/// The resolved one-of choice of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType<'a> {
    /// A symbolic type token.
    Named(&'a str),
    /// An inline object definition.
    Object(&'a ObjectModel),
}

impl Property {
    /// Creates a property of a named type.
    #[must_use]
    pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
            object: None,
            required: false,
            serialized_name: None,
            annotations: Vec::new(),
        }
    }

    /// Creates a property whose type is an inline object.
    #[must_use]
    pub fn object(name: impl Into<String>, object: ObjectModel) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            object: Some(Box::new(object)),
            required: false,
            serialized_name: None,
            annotations: Vec::new(),
        }
    }

    /// Marks the property as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the serialized name.
    #[must_use]
    pub fn serialized_as(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = Some(serialized_name.into());
        self
    }

    /// Adds a field annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationModel) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns the serialized name, defaulting to the property name.
    #[must_use]
    pub fn serialized_name(&self) -> &str {
        self.serialized_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the property's type choice.
    ///
    /// # Errors
    /// Returns `MissingVariant` when neither a type nor an object is given,
    /// and `ConflictingVariants` when both are.
    pub fn property_type(&self) -> Result<PropertyType<'_>> {
        match (&self.type_name, &self.object) {
            (Some(type_name), None) => Ok(PropertyType::Named(type_name)),
            (None, Some(object)) => Ok(PropertyType::Object(object)),
            (None, None) => Err(ModelError::missing_variant(&self.name)),
            (Some(_), Some(_)) => Err(ModelError::ConflictingVariants {
                property: self.name.clone(),
            }),
        }
    }
}

/// An annotation attached to a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationModel {
    /// Symbolic annotation type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Members in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AnnotationMember>,
}

impl AnnotationModel {
    /// Creates a member-less annotation.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: MemberValue) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value,
        });
        self
    }
}

/// One `name = value` pair of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMember {
    /// Member name.
    pub name: String,
    /// Member value template.
    #[serde(flatten)]
    pub value: MemberValue,
}

/// A templated annotation member value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberValue {
    /// Format string with `$` placeholders.
    pub format: String,
    /// Arguments substituted into `format`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TemplateArg>,
}

impl MemberValue {
    /// Creates a member value.
    #[must_use]
    pub fn new(format: impl Into<String>, arguments: Vec<TemplateArg>) -> Self {
        Self {
            format: format.into(),
            arguments,
        }
    }
}

/// Declarative description of one generated method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodModel {
    /// Method name.
    pub name: String,
    /// Symbolic return type.
    pub return_type: String,
    /// Generic type parameter names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    /// Parameters in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<MethodParameter>,
    /// Body template.
    pub body: String,
    /// Arguments substituted into `body`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_arguments: Vec<TemplateArg>,
}

impl MethodModel {
    /// Creates a method with an empty parameter list.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            body: body.into(),
            body_arguments: Vec::new(),
        }
    }

    /// Adds a generic type parameter.
    #[must_use]
    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(MethodParameter {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }

    /// Adds a body argument.
    #[must_use]
    pub fn with_body_argument(mut self, argument: TemplateArg) -> Self {
        self.body_arguments.push(argument);
        self
    }
}

/// A named method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameter {
    /// Parameter name.
    pub name: String,
    /// Symbolic parameter type.
    #[serde(rename = "type")]
    pub type_name: String,
}
