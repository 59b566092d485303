//! Error types for pojogen core operations.

use thiserror::Error;

/// Core error type for building type definitions and code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A format string references an argument that was not supplied.
    #[error("format '{format}' references argument {index} but only {available} were given")]
    MissingArgument {
        /// Format string.
        format: String,
        /// Zero-based argument index.
        index: usize,
        /// Number of supplied arguments.
        available: usize,
    },

    /// A format string leaves supplied arguments unused.
    #[error("format '{format}' leaves {unused} argument(s) unused")]
    UnusedArguments {
        /// Format string.
        format: String,
        /// Number of unused arguments.
        unused: usize,
    },

    /// A format string mixes relative (`$L`) and positional (`$1L`) placeholders.
    #[error("format '{format}' mixes relative and positional placeholders")]
    MixedPlaceholders {
        /// Format string.
        format: String,
    },

    /// Unknown placeholder character after `$`.
    #[error("unknown placeholder '${placeholder}' in format '{format}'")]
    UnknownPlaceholder {
        /// Format string.
        format: String,
        /// Placeholder character.
        placeholder: char,
    },

    /// Format string ends with a lone `$`.
    #[error("dangling '$' at end of format '{format}'")]
    DanglingDollar {
        /// Format string.
        format: String,
    },

    /// `$T` was given an argument that is not a type.
    #[error("format '{format}' expects a type for argument {index}, got literal '{literal}'")]
    TypeExpected {
        /// Format string.
        format: String,
        /// Zero-based argument index.
        index: usize,
        /// The literal that was supplied instead.
        literal: String,
    },

    /// Positional placeholder index is zero or malformed.
    #[error("invalid positional index in format '{format}'")]
    InvalidPosition {
        /// Format string.
        format: String,
    },
}

impl Error {
    /// Creates an unknown placeholder error.
    pub fn unknown_placeholder(format: impl Into<String>, placeholder: char) -> Self {
        Self::UnknownPlaceholder {
            format: format.into(),
            placeholder,
        }
    }

    /// Creates a missing argument error.
    pub fn missing_argument(format: impl Into<String>, index: usize, available: usize) -> Self {
        Self::MissingArgument {
            format: format.into(),
            index,
            available,
        }
    }
}

/// Result type alias for pojogen core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_display() {
        let err = Error::missing_argument("$L $L", 1, 1);
        assert_eq!(
            err.to_string(),
            "format '$L $L' references argument 1 but only 1 were given"
        );
    }

    #[test]
    fn test_unknown_placeholder_display() {
        let err = Error::unknown_placeholder("$Q", 'Q');
        assert!(err.to_string().contains("'$Q'"));
    }

    #[test]
    fn test_error_equality() {
        let dangling = Error::DanglingDollar {
            format: "$".to_string(),
        };
        assert_eq!(dangling.clone(), dangling);
        assert_ne!(dangling, Error::unknown_placeholder("$", 'Q'));
    }
}
