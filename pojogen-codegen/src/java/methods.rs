//! Method generation.

use crate::error::Result;
use crate::resolver::TypeResolver;
use pojogen_core::{CodeArg, CodeBlock, MethodSpec, Modifiers, ParameterSpec};
use pojogen_model::{MethodModel, TemplateArg};

/// Generator for declared methods.
pub struct MethodGenerator<'a, R: TypeResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: TypeResolver + ?Sized> MethodGenerator<'a, R> {
    /// Creates a new method generator.
    #[must_use]
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Generates a public method from its model.
    ///
    /// Type parameters are declared in order, parameter types and the
    /// return type go through the resolver, and the body is formatted with
    /// its resolved arguments one level indented.
    ///
    /// # Errors
    /// Returns an error if a type token cannot be resolved or the body
    /// template does not match its arguments.
    pub fn generate(&self, model: &MethodModel) -> Result<MethodSpec> {
        let mut builder = MethodSpec::builder(&model.name)
            .add_modifiers(Modifiers::PUBLIC)
            .returns(self.resolver.type_name(&model.return_type)?);

        for type_parameter in &model.type_parameters {
            builder = builder.add_type_variable(self.resolver.type_variable(type_parameter));
        }

        for parameter in &model.parameters {
            let type_name = self.resolver.type_name(&parameter.type_name)?;
            builder = builder.add_parameter(ParameterSpec::new(type_name, &parameter.name));
        }

        let arguments = resolve_arguments(self.resolver, &model.body_arguments)?;
        let mut body = CodeBlock::builder();
        body.indent().add(&model.body, &arguments)?.unindent();

        tracing::trace!("generated method {}", model.name);
        Ok(builder.add_code(&body.build()).build())
    }
}

/// Turns template arguments into code arguments.
///
/// Type tokens are resolved through `resolver`; literals pass through.
///
/// # Errors
/// Returns an error if a type token cannot be resolved.
pub fn resolve_arguments<R: TypeResolver + ?Sized>(
    resolver: &R,
    arguments: &[TemplateArg],
) -> Result<Vec<CodeArg>> {
    arguments
        .iter()
        .map(|argument| match argument {
            TemplateArg::Literal(text) => Ok(CodeArg::Literal(text.clone())),
            TemplateArg::Type(token) => resolver.type_name(token).map(CodeArg::Type),
        })
        .collect()
}
