//! Java type generation from object models.
//!
//! [`PojoCompiler`] turns an [`ObjectModel`](pojogen_model::ObjectModel)
//! into a public class: supertypes, static nested classes, one public field
//! and one chaining setter per property, and the declared methods.

mod methods;
mod objects;
mod properties;

pub use methods::{MethodGenerator, resolve_arguments};
pub use objects::PojoCompiler;
