//! Compiler configuration.

use pojogen_core::ClassName;

/// Options controlling how object models are compiled.
///
/// # Example
/// ```
/// use pojogen_codegen::CompilerOptions;
/// use pojogen_core::ClassName;
///
/// let options = CompilerOptions::new()
///     .not_null_annotation(ClassName::new("org.jspecify.annotations", "NonNull"))
///     .setter_prefix("with");
/// assert_eq!(options.setter_prefix, "with");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Annotation attached to fields whose serialized name differs.
    pub serialized_name_annotation: ClassName,
    /// Annotation attached to setter parameters of optional properties.
    pub not_null_annotation: ClassName,
    /// Prefix of generated setter names.
    pub setter_prefix: String,
    /// Validate top-level models before compiling them.
    pub validate: bool,
    /// Name inline objects of nested and inline models after their
    /// enclosing chain instead of restarting from an empty prefix.
    pub scoped_prefixes: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            serialized_name_annotation: ClassName::new(
                "com.fasterxml.jackson.annotation",
                "JsonProperty",
            ),
            not_null_annotation: ClassName::new("jakarta.annotation", "Nonnull"),
            setter_prefix: "set".to_string(),
            validate: true,
            scoped_prefixes: false,
        }
    }
}

impl CompilerOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the serialized-name annotation.
    #[must_use]
    pub fn serialized_name_annotation(mut self, annotation: ClassName) -> Self {
        self.serialized_name_annotation = annotation;
        self
    }

    /// Sets the not-null annotation.
    #[must_use]
    pub fn not_null_annotation(mut self, annotation: ClassName) -> Self {
        self.not_null_annotation = annotation;
        self
    }

    /// Sets the setter name prefix.
    #[must_use]
    pub fn setter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.setter_prefix = prefix.into();
        self
    }

    /// Enables or disables model validation.
    #[must_use]
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enables or disables scoped prefixes for inline objects.
    ///
    /// With scoped prefixes, an inline `dims` inside nested `Part` of
    /// `Widget` becomes `WidgetPartDims` rather than `Dims`.
    #[must_use]
    pub fn scoped_prefixes(mut self, scoped: bool) -> Self {
        self.scoped_prefixes = scoped;
        self
    }
}
