//! Object compilation.

use super::methods::MethodGenerator;
use crate::error::{CodegenError, Result};
use crate::options::CompilerOptions;
use crate::registry::TypeRegistry;
use crate::resolver::TypeResolver;
use pojogen_core::{ClassName, Modifiers, TypeName, TypeSpec, TypeSpecBuilder};
use pojogen_model::naming::{capitalize, is_identifier};
use pojogen_model::{ModelError, ObjectModel, validate_object};

/// Compiles object models into type definitions.
///
/// The compiler owns the registry of generated types. Inline objects met
/// while compiling a property are generated once, registered, and referred
/// to by name from then on.
///
/// # Example
/// ```
/// use pojogen_codegen::{PackageResolver, PojoCompiler};
/// use pojogen_model::{ObjectModel, Property};
///
/// let model = ObjectModel::named("Point")
///     .with_property(Property::typed("x", "int").required())
///     .with_property(Property::typed("y", "int").required());
///
/// let mut compiler = PojoCompiler::new(PackageResolver::new("com.example"));
/// let point = compiler.generate_object("Point", &model, "Point").unwrap();
/// assert_eq!(point.fields().len(), 2);
/// assert_eq!(point.methods().len(), 2);
/// ```
#[derive(Debug)]
pub struct PojoCompiler<R: TypeResolver> {
    pub(super) resolver: R,
    pub(super) options: CompilerOptions,
    pub(super) registry: TypeRegistry,
}

impl<R: TypeResolver> PojoCompiler<R> {
    /// Creates a compiler with default options.
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self::with_options(resolver, CompilerOptions::default())
    }

    /// Creates a compiler with the given options.
    #[must_use]
    pub fn with_options(resolver: R, options: CompilerOptions) -> Self {
        Self {
            resolver,
            options,
            registry: TypeRegistry::new(),
        }
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Returns the types generated so far.
    #[must_use]
    pub fn generated_types(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Consumes the compiler and returns the generated types.
    #[must_use]
    pub fn into_generated_types(self) -> TypeRegistry {
        self.registry
    }

    /// Compiles `model` into a public class named `name`.
    ///
    /// The result is returned, not registered. Inline objects found along
    /// the way are registered under names starting with `prefix`.
    ///
    /// # Errors
    /// Returns an error if the model is malformed or a type cannot be
    /// resolved. Inline objects registered by the failed call are dropped.
    pub fn generate_object(
        &mut self,
        name: &str,
        model: &ObjectModel,
        prefix: &str,
    ) -> Result<TypeSpec> {
        self.generate_object_with(name, model, prefix, |_| {})
    }

    /// Like [`generate_object`](Self::generate_object), letting `customizer`
    /// adjust the class before compilation.
    ///
    /// Type variables added by the customizer make the class refer to
    /// itself in parameterized form, so setters of `Page<T>` return
    /// `Page<T>`.
    ///
    /// # Errors
    /// See [`generate_object`](Self::generate_object).
    pub fn generate_object_with<F>(
        &mut self,
        name: &str,
        model: &ObjectModel,
        prefix: &str,
        customizer: F,
    ) -> Result<TypeSpec>
    where
        F: FnOnce(&mut TypeSpecBuilder),
    {
        self.validate(name, model)?;

        let checkpoint = self.registry.checkpoint();
        let result = self.build_object(name, model, prefix, customizer);
        if let Err(err) = &result {
            let class_name = self.resolver.generated_class(name);
            self.registry.discard(&class_name, checkpoint, err);
        }
        result
    }

    /// Compiles `model` and registers it as a generated type.
    ///
    /// Returns the qualified name it was registered under. A name that is
    /// already registered is returned without compiling again.
    ///
    /// # Errors
    /// Returns an error if compilation fails. The registry is then rolled
    /// back, dropping inline objects registered by this call.
    pub fn add_generated_object(
        &mut self,
        name: &str,
        model: &ObjectModel,
        prefix: &str,
    ) -> Result<ClassName> {
        self.add_generated_object_with(name, model, prefix, |_| {})
    }

    /// Like [`add_generated_object`](Self::add_generated_object), with a
    /// customizer applied as in
    /// [`generate_object_with`](Self::generate_object_with).
    ///
    /// # Errors
    /// See [`add_generated_object`](Self::add_generated_object).
    pub fn add_generated_object_with<F>(
        &mut self,
        name: &str,
        model: &ObjectModel,
        prefix: &str,
        customizer: F,
    ) -> Result<ClassName>
    where
        F: FnOnce(&mut TypeSpecBuilder),
    {
        self.validate(name, model)?;

        let class_name = self.resolver.generated_class(name);
        self.generated_type(&class_name, |compiler, simple| {
            compiler.build_object(simple, model, prefix, customizer)
        })?;
        Ok(class_name)
    }

    /// Generates and registers `name` unless it is already registered.
    ///
    /// A failed generation leaves the registry as it was before the call.
    pub(super) fn generated_type<F>(&mut self, name: &ClassName, generate: F) -> Result<()>
    where
        F: FnOnce(&mut Self, &str) -> Result<TypeSpec>,
    {
        if self.registry.contains(name) {
            tracing::trace!("reusing generated type {}", name);
            return Ok(());
        }

        let checkpoint = self.registry.begin(name)?;
        let result = generate(self, name.simple_name());
        self.registry.finish(name.clone(), checkpoint, result)?;
        Ok(())
    }

    /// Starts a public class, customizes it and compiles `model` into it.
    pub(super) fn build_object<F>(
        &mut self,
        name: &str,
        model: &ObjectModel,
        prefix: &str,
        customizer: F,
    ) -> Result<TypeSpec>
    where
        F: FnOnce(&mut TypeSpecBuilder),
    {
        tracing::debug!("generating object {}", name);

        let mut builder = TypeSpec::class_builder(name);
        builder.add_modifiers(Modifiers::PUBLIC);
        customizer(&mut builder);

        let spec_name = self.resolver.spec_type_name(&builder.build());
        self.compile_into(&mut builder, &spec_name, model, prefix)?;
        Ok(builder.into_spec())
    }

    /// Populates `builder` from `model`.
    ///
    /// Order is fixed: superclass, interfaces, nested types, fields and
    /// setters, declared methods.
    fn compile_into(
        &mut self,
        builder: &mut TypeSpecBuilder,
        spec_name: &TypeName,
        model: &ObjectModel,
        prefix: &str,
    ) -> Result<()> {
        if let Some(super_name) = &model.super_name {
            builder.superclass(self.resolver.type_name(super_name)?);
        }

        for interface_name in &model.interface_names {
            builder.add_superinterface(self.resolver.type_name(interface_name)?);
        }

        self.add_nested_objects(builder, spec_name, model, prefix)?;
        self.add_properties(builder, spec_name, model, prefix)?;

        let methods = MethodGenerator::new(&self.resolver);
        for method in &model.methods {
            builder.add_method(methods.generate(method)?);
        }

        Ok(())
    }

    /// Compiles nested models into static member classes.
    fn add_nested_objects(
        &mut self,
        builder: &mut TypeSpecBuilder,
        spec_name: &TypeName,
        model: &ObjectModel,
        prefix: &str,
    ) -> Result<()> {
        if model.nested.is_empty() {
            return Ok(());
        }

        let enclosing = spec_name
            .enclosing_class_name()
            .cloned()
            .ok_or_else(|| CodegenError::unsupported_shape(spec_name, "as an enclosing type"))?;

        for (index, nested) in model.nested.iter().enumerate() {
            let nested_name = nested.name.as_deref().ok_or_else(|| ModelError::MissingName {
                owner: enclosing.simple_name().to_string(),
                index,
            })?;

            let mut child = TypeSpec::class_builder(nested_name);
            child.add_modifiers(Modifiers::STATIC);

            let child_name = TypeName::Class(enclosing.nested_class(nested_name));
            let child_prefix = if self.options.scoped_prefixes {
                format!("{}{}", prefix, capitalize(nested_name))
            } else {
                String::new()
            };
            self.compile_into(&mut child, &child_name, nested, &child_prefix)?;

            tracing::trace!("added nested type {}", child_name);
            builder.add_type(child.into_spec());
        }

        Ok(())
    }

    fn validate(&self, name: &str, model: &ObjectModel) -> Result<()> {
        if !self.options.validate {
            return Ok(());
        }
        if !is_identifier(name) {
            return Err(ModelError::invalid_identifier("object", name).into());
        }
        validate_object(name, model)?;
        Ok(())
    }
}
