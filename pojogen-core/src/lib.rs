//! # pojogen Core
//!
//! Target representation for generated object types.
//!
//! This crate provides:
//! - Type names (primitives, classes, parameterized types, arrays, type variables)
//! - Code blocks with typed `$L`/`$S`/`$T`/`$N` placeholder substitution
//! - Annotation, field, parameter, method and type definitions with builders
//! - Error types for formatting operations

pub mod annotation;
pub mod code;
pub mod error;
pub mod modifiers;
pub mod spec;
pub mod type_spec;
pub mod types;

pub use annotation::{AnnotationSpec, AnnotationSpecBuilder};
pub use code::{CodeArg, CodeBlock, CodeBlockBuilder};
pub use error::{Error, Result};
pub use modifiers::Modifiers;
pub use spec::{FieldSpec, FieldSpecBuilder, MethodSpec, MethodSpecBuilder, ParameterSpec};
pub use type_spec::{TypeSpec, TypeSpecBuilder};
pub use types::{
    ClassName, ParameterizedTypeName, PrimitiveType, TypeName, TypeVariableName, WildcardTypeName,
};
