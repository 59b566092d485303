//! # pojogen Model
//!
//! Declarative object model definitions.
//!
//! This crate provides:
//! - Object, property, annotation and method model types (serde-ready)
//! - Template arguments distinguishing literals from type tokens
//! - Model validation
//! - Identifier helpers used during generation

pub mod error;
pub mod model;
pub mod naming;
pub mod template;
pub mod validation;

pub use error::{ModelError, Result};
pub use model::{
    AnnotationMember, AnnotationModel, MemberValue, MethodModel, MethodParameter, ObjectModel,
    Property, PropertyType,
};
pub use template::{TYPE_MARKER, TemplateArg};
pub use validation::validate_object;
