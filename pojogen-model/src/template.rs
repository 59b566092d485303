//! Template arguments for annotation members and method bodies.
//!
//! An argument is either literal text or a type token that the compiler
//! resolves to a type reference before formatting. Serialized models may
//! use the tagged form (`{"literal": "x"}` / `{"type": "List<T>"}`) or the
//! plain string form, where a leading [`TYPE_MARKER`] selects a type token.

use serde::{Deserialize, Serialize};

/// Prefix marking a plain string argument as a type token.
pub const TYPE_MARKER: &str = "<type>";

/// A single template argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ArgRepr", into = "TaggedArg")]
pub enum TemplateArg {
    /// Text passed through unchanged.
    Literal(String),
    /// A symbolic type resolved before substitution.
    Type(String),
}

impl TemplateArg {
    /// Creates a literal argument.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a type token argument.
    #[must_use]
    pub fn type_token(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }

    /// Parses the plain string form, honouring [`TYPE_MARKER`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(TYPE_MARKER) {
            Some(name) => Self::Type(name.to_string()),
            None => Self::Literal(raw.to_string()),
        }
    }

    /// Returns true for type token arguments.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }
}

impl From<&str> for TemplateArg {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArgRepr {
    Plain(String),
    Tagged(TaggedArg),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum TaggedArg {
    Literal(String),
    Type(String),
}

impl From<ArgRepr> for TemplateArg {
    fn from(repr: ArgRepr) -> Self {
        match repr {
            ArgRepr::Plain(raw) => Self::parse(&raw),
            ArgRepr::Tagged(TaggedArg::Literal(text)) => Self::Literal(text),
            ArgRepr::Tagged(TaggedArg::Type(name)) => Self::Type(name),
        }
    }
}

impl From<TemplateArg> for TaggedArg {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Literal(text) => Self::Literal(text),
            TemplateArg::Type(name) => Self::Type(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker() {
        assert_eq!(
            TemplateArg::parse("<type>java.util.List<String>"),
            TemplateArg::type_token("java.util.List<String>")
        );
        assert_eq!(TemplateArg::parse("value"), TemplateArg::literal("value"));
        assert!(TemplateArg::from("<type>int").is_type());
    }

    #[test]
    fn test_marker_only_at_start() {
        assert_eq!(
            TemplateArg::parse("x <type>int"),
            TemplateArg::literal("x <type>int")
        );
    }

    #[test]
    fn test_tagged_literal_keeps_marker_text() {
        let arg: TemplateArg =
            serde_json::from_str(r#"{"literal": "<type>not a type"}"#).expect("valid arg");
        assert_eq!(arg, TemplateArg::literal("<type>not a type"));
    }

    #[test]
    fn test_deserialize_plain_and_tagged() {
        let args: Vec<TemplateArg> =
            serde_json::from_str(r#"["a", "<type>B", {"type": "C"}]"#).expect("valid args");
        assert_eq!(
            args,
            [
                TemplateArg::literal("a"),
                TemplateArg::type_token("B"),
                TemplateArg::type_token("C")
            ]
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&[TemplateArg::literal("a"), TemplateArg::type_token("B")])
            .expect("serializable");
        assert_eq!(json, r#"[{"literal":"a"},{"type":"B"}]"#);
    }
}
