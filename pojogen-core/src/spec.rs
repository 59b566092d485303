//! Member definitions: fields, parameters and methods.

use crate::annotation::AnnotationSpec;
use crate::code::{CodeArg, CodeBlock};
use crate::error::Result;
use crate::modifiers::Modifiers;
use crate::types::{TypeName, TypeVariableName};
use std::fmt;

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field type.
    pub type_name: TypeName,
    /// Field name.
    pub name: String,
    /// Declaration modifiers.
    pub modifiers: Modifiers,
    /// Annotations in declaration order.
    pub annotations: Vec<AnnotationSpec>,
    /// Optional initializer expression.
    pub initializer: Option<CodeBlock>,
}

impl FieldSpec {
    /// Creates a new field builder.
    #[must_use]
    pub fn builder(type_name: TypeName, name: impl Into<String>) -> FieldSpecBuilder {
        FieldSpecBuilder {
            spec: Self {
                type_name,
                name: name.into(),
                modifiers: Modifiers::empty(),
                annotations: Vec::new(),
                initializer: None,
            },
        }
    }

    /// Returns the first annotation of the given simple type name.
    #[must_use]
    pub fn annotation(&self, simple_name: &str) -> Option<&AnnotationSpec> {
        find_annotation(&self.annotations, simple_name)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_annotations(f, &self.annotations)?;
        write_modifiers(f, self.modifiers)?;
        write!(f, "{} {}", self.type_name, self.name)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        f.write_str(";")
    }
}

/// Builder for [`FieldSpec`].
#[derive(Debug, Clone)]
pub struct FieldSpecBuilder {
    spec: FieldSpec,
}

impl FieldSpecBuilder {
    /// Adds modifiers.
    #[must_use]
    pub fn add_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.spec.modifiers |= modifiers;
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    /// Sets the initializer expression.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn initializer(mut self, format: &str, args: &[CodeArg]) -> Result<Self> {
        self.spec.initializer = Some(CodeBlock::of(format, args)?);
        Ok(self)
    }

    /// Builds the field.
    #[must_use]
    pub fn build(self) -> FieldSpec {
        self.spec
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSpec {
    /// Parameter type.
    pub type_name: TypeName,
    /// Parameter name.
    pub name: String,
    /// Declaration modifiers.
    pub modifiers: Modifiers,
    /// Annotations in declaration order.
    pub annotations: Vec<AnnotationSpec>,
}

impl ParameterSpec {
    /// Creates a plain parameter.
    #[must_use]
    pub fn new(type_name: TypeName, name: impl Into<String>) -> Self {
        Self {
            type_name,
            name: name.into(),
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
        }
    }

    /// Returns a copy of this parameter with an added annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns the first annotation of the given simple type name.
    #[must_use]
    pub fn annotation(&self, simple_name: &str) -> Option<&AnnotationSpec> {
        find_annotation(&self.annotations, simple_name)
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_annotations(f, &self.annotations)?;
        write_modifiers(f, self.modifiers)?;
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Declaration modifiers.
    pub modifiers: Modifiers,
    /// Generic type variables in declaration order.
    pub type_variables: Vec<TypeVariableName>,
    /// Return type; `None` means `void`.
    pub return_type: Option<TypeName>,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,
    /// Annotations in declaration order.
    pub annotations: Vec<AnnotationSpec>,
    /// Method body.
    pub code: CodeBlock,
}

impl MethodSpec {
    /// Creates a new method builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> MethodSpecBuilder {
        MethodSpecBuilder {
            spec: Self {
                name: name.into(),
                modifiers: Modifiers::empty(),
                type_variables: Vec::new(),
                return_type: None,
                parameters: Vec::new(),
                annotations: Vec::new(),
                code: CodeBlock::default(),
            },
            code: CodeBlock::builder(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Returns the signature line (`public <T> T get(java.lang.String key)`).
    #[must_use]
    pub fn signature(&self) -> String {
        let mut out = self.modifiers.to_string();
        if !out.is_empty() {
            out.push(' ');
        }
        if !self.type_variables.is_empty() {
            let vars: Vec<String> = self
                .type_variables
                .iter()
                .map(TypeVariableName::declaration)
                .collect();
            out.push_str(&format!("<{}> ", vars.join(", ")));
        }
        match &self.return_type {
            Some(return_type) => out.push_str(&return_type.to_string()),
            None => out.push_str("void"),
        }
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        out.push_str(&format!(" {}({})", self.name, params.join(", ")));
        out
    }
}

/// Builder for [`MethodSpec`].
#[derive(Debug, Clone)]
pub struct MethodSpecBuilder {
    spec: MethodSpec,
    code: crate::code::CodeBlockBuilder,
}

impl MethodSpecBuilder {
    /// Adds modifiers.
    #[must_use]
    pub fn add_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.spec.modifiers |= modifiers;
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, return_type: TypeName) -> Self {
        self.spec.return_type = Some(return_type);
        self
    }

    /// Adds a generic type variable.
    #[must_use]
    pub fn add_type_variable(mut self, variable: TypeVariableName) -> Self {
        self.spec.type_variables.push(variable);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.spec.parameters.push(parameter);
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    /// Appends a code block to the body.
    #[must_use]
    pub fn add_code(mut self, block: &CodeBlock) -> Self {
        self.code.add_code(block);
        self
    }

    /// Appends a statement to the body.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn add_statement(mut self, format: &str, args: &[CodeArg]) -> Result<Self> {
        self.code.add_statement(format, args)?;
        Ok(self)
    }

    /// Builds the method.
    #[must_use]
    pub fn build(mut self) -> MethodSpec {
        self.spec.code = self.code.build();
        self.spec
    }
}

fn find_annotation<'a>(
    annotations: &'a [AnnotationSpec],
    simple_name: &str,
) -> Option<&'a AnnotationSpec> {
    annotations
        .iter()
        .find(|a| a.type_name().simple_name() == simple_name)
}

fn write_annotations(f: &mut fmt::Formatter<'_>, annotations: &[AnnotationSpec]) -> fmt::Result {
    for annotation in annotations {
        write!(f, "{} ", annotation)?;
    }
    Ok(())
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: Modifiers) -> fmt::Result {
    if !modifiers.is_empty() {
        write!(f, "{} ", modifiers)?;
    }
    Ok(())
}
