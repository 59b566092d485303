//! # pojogen Codegen
//!
//! Compiles declarative object models into type definitions.
//!
//! This crate provides:
//! - The object compiler with its registry of generated types
//! - Field, setter and method generation
//! - Type token resolution through a pluggable resolver
//! - Compiler options

pub mod error;
pub mod java;
pub mod options;
pub mod registry;
pub mod resolver;

pub use error::{CodegenError, Result};
pub use java::{MethodGenerator, PojoCompiler};
pub use options::CompilerOptions;
pub use registry::{Checkpoint, TypeRegistry};
pub use resolver::{PackageResolver, TypeResolver};

use pojogen_model::{ModelError, ObjectModel};

/// Compiles top-level object models into a package.
///
/// Each model must be named; its name is also the prefix of its inline
/// objects.
///
/// # Arguments
/// * `package` - Package of every generated type
/// * `models` - Top-level object models
///
/// # Returns
/// The registry holding the models and all inline objects.
///
/// # Errors
/// Returns `CodegenError` if a model is unnamed or fails to compile.
pub fn generate_objects(package: &str, models: &[ObjectModel]) -> Result<TypeRegistry> {
    let mut compiler = PojoCompiler::new(PackageResolver::new(package));

    for (index, model) in models.iter().enumerate() {
        let name = model.name.as_deref().ok_or_else(|| ModelError::MissingName {
            owner: package.to_string(),
            index,
        })?;
        compiler.add_generated_object(name, model, name)?;
    }

    Ok(compiler.into_generated_types())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pojogen_model::Property;

    #[test]
    fn test_generate_objects() {
        let models = [
            ObjectModel::named("Order").with_property(Property::typed("item", "Item")),
            ObjectModel::named("Item").with_property(Property::object(
                "price",
                ObjectModel::default().with_property(Property::typed("amount", "long")),
            )),
        ];

        let registry = generate_objects("com.shop", &models).expect("models compile");
        let names: Vec<String> = registry.names().map(ToString::to_string).collect();
        assert_eq!(names, ["com.shop.Order", "com.shop.ItemPrice", "com.shop.Item"]);
    }

    #[test]
    fn test_generate_objects_requires_names() {
        let err = generate_objects("com.shop", &[ObjectModel::default()]).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Model(ModelError::MissingName { index: 0, .. })
        ));
    }
}
