//! Error types for model validation.

use thiserror::Error;

/// Error type for malformed object models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A property declares neither a type nor an inline object.
    #[error("no type specified for property '{property}'")]
    MissingVariant {
        /// Property name.
        property: String,
    },

    /// A property declares both a type and an inline object.
    #[error("property '{property}' specifies both a type and an inline object")]
    ConflictingVariants {
        /// Property name.
        property: String,
    },

    /// A nested object has no name.
    #[error("nested object #{index} in '{owner}' has no name")]
    MissingName {
        /// Name of the enclosing object.
        owner: String,
        /// Position of the nested object.
        index: usize,
    },

    /// A name is not a valid identifier.
    #[error("invalid {kind} name '{name}'")]
    InvalidIdentifier {
        /// Kind of declaration (property, object, method, ...).
        kind: &'static str,
        /// Offending name.
        name: String,
    },

    /// Two declarations of the same kind share a name.
    #[error("duplicate {kind} '{name}' in '{owner}'")]
    Duplicate {
        /// Kind of declaration.
        kind: &'static str,
        /// Duplicated name.
        name: String,
        /// Name of the enclosing object.
        owner: String,
    },
}

impl ModelError {
    /// Creates a missing variant error.
    pub fn missing_variant(property: impl Into<String>) -> Self {
        Self::MissingVariant {
            property: property.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }

    /// Creates a duplicate declaration error.
    pub fn duplicate(kind: &'static str, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            name: name.into(),
            owner: owner.into(),
        }
    }
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
