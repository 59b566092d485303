//! # pojogen
//!
//! Compiles declarative object models into Java-style POJO type definitions.
//!
//! A model describes a class by its supertypes, nested classes, properties
//! and methods. The compiler turns it into a [`TypeSpec`](core::TypeSpec)
//! with one public field and one chaining setter per property, generating
//! inline object types on the way and registering each of them once.
//!
//! ## Quick Start
//!
//! ```
//! use pojogen::prelude::*;
//!
//! let model = ObjectModel::named("Widget")
//!     .with_property(Property::typed("id", "String").required())
//!     .with_property(Property::object(
//!         "tag",
//!         ObjectModel::default().with_property(Property::typed("v", "int")),
//!     ));
//!
//! let mut compiler = PojoCompiler::new(PackageResolver::new("com.example"));
//! let widget = compiler.generate_object("Widget", &model, "Widget")?;
//!
//! assert!(widget.method("setTag").is_some());
//! assert_eq!(compiler.generated_types().len(), 1);
//! # Ok::<(), pojogen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Type references, code blocks and type definitions
//! - [`model`] - Object model types and validation
//! - [`codegen`] - The object compiler, registry and resolvers

pub mod prelude;

/// Type references, code blocks and type definitions.
pub mod core {
    pub use pojogen_core::*;
}

/// Object model types and validation.
pub mod model {
    pub use pojogen_model::*;
}

/// Object compilation.
pub mod codegen {
    pub use pojogen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use pojogen_codegen::{
    CompilerOptions, PackageResolver, PojoCompiler, TypeRegistry, TypeResolver, generate_objects,
};
pub use pojogen_core::{ClassName, TypeName, TypeSpec};
pub use pojogen_model::{ObjectModel, Property};
