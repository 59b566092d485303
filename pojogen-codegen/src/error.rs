//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Malformed object model (missing or conflicting property type, bad names).
    #[error("model error: {0}")]
    Model(#[from] pojogen_model::ModelError),

    /// Template formatting error.
    #[error("format error: {0}")]
    Format(#[from] pojogen_core::Error),

    /// A type token could not be parsed or resolved.
    #[error("invalid type name '{token}': {reason}")]
    InvalidTypeName {
        /// The offending token.
        token: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A type reference has a shape that cannot be used in this position.
    #[error("unsupported {shape} type '{type_name}' {context}")]
    UnsupportedNameShape {
        /// Rendered type name.
        type_name: String,
        /// Shape of the reference.
        shape: &'static str,
        /// Where it was used.
        context: &'static str,
    },

    /// Generating a type requires that same type to be generated first.
    #[error("cyclic generation of type '{name}'")]
    CyclicType {
        /// Qualified name of the type.
        name: String,
    },
}

impl CodegenError {
    /// Creates an invalid type name error.
    pub fn invalid_type_name(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported name shape error for `type_name`.
    pub fn unsupported_shape(type_name: &pojogen_core::TypeName, context: &'static str) -> Self {
        Self::UnsupportedNameShape {
            type_name: type_name.to_string(),
            shape: type_name.shape(),
            context,
        }
    }
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
