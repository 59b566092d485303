//! Type reference resolution.
//!
//! The compiler never interprets type tokens itself; it asks a
//! [`TypeResolver`]. [`PackageResolver`] is the stock implementation: it
//! places generated types in one package and understands generics, arrays,
//! wildcards, primitives, qualified names and an alias table.

use crate::error::{CodegenError, Result};
use pojogen_core::{
    ClassName, ParameterizedTypeName, PrimitiveType, TypeName, TypeSpec, TypeVariableName,
    WildcardTypeName,
};
use pojogen_model::naming::capitalize;
use std::collections::HashMap;

/// Maps symbolic names to type references.
pub trait TypeResolver {
    /// Resolves a symbolic type token such as `String` or `List<Item>`.
    ///
    /// # Errors
    /// Returns `InvalidTypeName` if the token cannot be parsed.
    fn type_name(&self, token: &str) -> Result<TypeName>;

    /// Returns the class a generated type with this simple name receives.
    fn generated_class(&self, simple_name: &str) -> ClassName;

    /// Builds a class name from a package and a simple name.
    fn class_name(&self, package: &str, simple_name: &str) -> ClassName {
        ClassName::new(package, simple_name)
    }

    /// Applies type arguments to a raw class.
    fn parameterized(&self, raw: ClassName, type_arguments: Vec<TypeName>) -> TypeName {
        TypeName::Parameterized(ParameterizedTypeName::new(raw, type_arguments))
    }

    /// Creates a type variable for a generic parameter name.
    fn type_variable(&self, name: &str) -> TypeVariableName {
        TypeVariableName::new(name)
    }

    /// Synthesizes a generated class name from name fragments.
    ///
    /// Empty fragments are skipped and the rest are capitalized and joined,
    /// so `["Widget", "tag"]` becomes `WidgetTag`.
    fn type_name_for(&self, fragments: &[&str]) -> ClassName {
        let simple_name: String = fragments
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| capitalize(fragment))
            .collect();
        self.generated_class(&simple_name)
    }

    /// Returns the type name of a (partially) built definition.
    ///
    /// A definition with type variables is referred to by its parameterized
    /// form (`Page<T>`).
    fn spec_type_name(&self, spec: &TypeSpec) -> TypeName {
        let raw = self.generated_class(spec.name());
        if spec.type_variables().is_empty() {
            TypeName::Class(raw)
        } else {
            let arguments = spec
                .type_variables()
                .iter()
                .cloned()
                .map(TypeName::Variable)
                .collect();
            self.parameterized(raw, arguments)
        }
    }
}

/// Simple names resolved without qualification, with their packages.
const BUILTINS: &[(&str, &str)] = &[
    ("Boolean", "java.lang"),
    ("Byte", "java.lang"),
    ("CharSequence", "java.lang"),
    ("Character", "java.lang"),
    ("Class", "java.lang"),
    ("Comparable", "java.lang"),
    ("Double", "java.lang"),
    ("Enum", "java.lang"),
    ("Exception", "java.lang"),
    ("Float", "java.lang"),
    ("Integer", "java.lang"),
    ("Iterable", "java.lang"),
    ("Long", "java.lang"),
    ("Number", "java.lang"),
    ("Object", "java.lang"),
    ("RuntimeException", "java.lang"),
    ("Short", "java.lang"),
    ("String", "java.lang"),
    ("Throwable", "java.lang"),
    ("Void", "java.lang"),
    ("Collection", "java.util"),
    ("List", "java.util"),
    ("Map", "java.util"),
    ("Optional", "java.util"),
    ("Set", "java.util"),
    ("UUID", "java.util"),
    ("Duration", "java.time"),
    ("Instant", "java.time"),
    ("LocalDate", "java.time"),
    ("OffsetDateTime", "java.time"),
];

/// Resolver placing generated types into a single package.
///
/// Bare names are looked up in order: alias table, primitive keywords,
/// type variables (`T`, `K`, `V2`), well-known library classes, and finally
/// the generation package.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    package: String,
    aliases: HashMap<String, TypeName>,
}

impl PackageResolver {
    /// Creates a resolver generating into `package`.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            aliases: HashMap::new(),
        }
    }

    /// Adds an alias resolved before any other rule.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<TypeName>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Returns the generation package.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    fn resolve_simple(&self, name: &str) -> TypeName {
        if let Some(target) = self.aliases.get(name) {
            return target.clone();
        }
        if let Some(primitive) = PrimitiveType::from_keyword(name) {
            return TypeName::Primitive(primitive);
        }
        if is_type_variable(name) {
            return TypeName::Variable(self.type_variable(name));
        }
        if let Some((_, package)) = BUILTINS.iter().find(|(simple, _)| *simple == name) {
            return TypeName::Class(self.class_name(package, name));
        }
        TypeName::Class(self.generated_class(name))
    }

    fn resolve_identifier(&self, name: &str) -> Option<TypeName> {
        if !name.contains('.') {
            return Some(self.resolve_simple(name));
        }

        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        // `Outer.Inner` is relative to whatever `Outer` resolves to.
        if segments[0].chars().next().is_some_and(char::is_uppercase) {
            let TypeName::Class(mut class) = self.resolve_simple(segments[0]) else {
                return None;
            };
            for segment in &segments[1..] {
                class = class.nested_class(*segment);
            }
            return Some(TypeName::Class(class));
        }

        ClassName::best_guess(name).map(TypeName::Class)
    }
}

impl TypeResolver for PackageResolver {
    fn type_name(&self, token: &str) -> Result<TypeName> {
        TypeParser::new(self, token)?.parse()
    }

    fn generated_class(&self, simple_name: &str) -> ClassName {
        self.class_name(&self.package, simple_name)
    }
}

fn is_type_variable(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Lt,
    Gt,
    Comma,
    Open,
    Close,
    Question,
}

/// Recursive descent parser for type tokens.
struct TypeParser<'a> {
    resolver: &'a PackageResolver,
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(resolver: &'a PackageResolver, source: &'a str) -> Result<Self> {
        Ok(Self {
            resolver,
            source,
            tokens: lex(source)?,
            pos: 0,
        })
    }

    fn parse(mut self) -> Result<TypeName> {
        let type_name = self.parse_type()?;
        if self.pos != self.tokens.len() {
            return Err(self.error("unexpected trailing input"));
        }
        Ok(type_name)
    }

    fn parse_type(&mut self) -> Result<TypeName> {
        let mut type_name = match self.next() {
            Some(Token::Question) => self.parse_wildcard()?,
            Some(Token::Ident(name)) => {
                let arguments = if self.eat(&Token::Lt) {
                    self.parse_arguments()?
                } else {
                    Vec::new()
                };
                self.apply_arguments(&name, arguments)?
            }
            _ => return Err(self.error("expected a type name")),
        };

        while self.eat(&Token::Open) {
            if !self.eat(&Token::Close) {
                return Err(self.error("expected ']'"));
            }
            type_name = TypeName::array_of(type_name);
        }

        Ok(type_name)
    }

    fn parse_wildcard(&mut self) -> Result<TypeName> {
        let bound = match self.tokens.get(self.pos) {
            Some(Token::Ident(keyword)) if keyword == "extends" || keyword == "super" => {
                keyword.clone()
            }
            _ => return Ok(TypeName::Wildcard(WildcardTypeName::Unbounded)),
        };
        self.pos += 1;

        let bound_type = Box::new(self.parse_type()?);
        Ok(TypeName::Wildcard(if bound == "extends" {
            WildcardTypeName::Extends(bound_type)
        } else {
            WildcardTypeName::Super(bound_type)
        }))
    }

    fn parse_arguments(&mut self) -> Result<Vec<TypeName>> {
        let mut arguments = vec![self.parse_type()?];
        while self.eat(&Token::Comma) {
            arguments.push(self.parse_type()?);
        }
        if !self.eat(&Token::Gt) {
            return Err(self.error("expected '>'"));
        }
        Ok(arguments)
    }

    fn apply_arguments(&self, name: &str, arguments: Vec<TypeName>) -> Result<TypeName> {
        let base = self
            .resolver
            .resolve_identifier(name)
            .ok_or_else(|| self.error(format!("malformed name '{}'", name)))?;

        if arguments.is_empty() {
            return Ok(base);
        }
        match base {
            TypeName::Class(raw) => Ok(self.resolver.parameterized(raw, arguments)),
            other => Err(self.error(format!(
                "{} '{}' cannot take type arguments",
                other.shape(),
                name
            ))),
        }
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.tokens.get(self.pos) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, reason: impl Into<String>) -> CodegenError {
        CodegenError::invalid_type_name(self.source, reason)
    }
}

fn lex(source: &str) -> Result<Vec<Token>> {
    let is_ident_char = |c: &char| c.is_alphanumeric() || matches!(c, '_' | '$' | '.');
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => tokens.push(Token::Lt),
            '>' => tokens.push(Token::Gt),
            ',' => tokens.push(Token::Comma),
            '[' => tokens.push(Token::Open),
            ']' => tokens.push(Token::Close),
            '?' => tokens.push(Token::Question),
            c if c.is_whitespace() => {}
            c if is_ident_char(&c) => {
                let mut ident = String::from(c);
                while let Some(next) = chars.peek().copied().filter(is_ident_char) {
                    ident.push(next);
                    chars.next();
                }
                tokens.push(Token::Ident(ident));
            }
            other => {
                return Err(CodegenError::invalid_type_name(
                    source,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PackageResolver {
        PackageResolver::new("com.example.model")
            .with_alias("string", ClassName::new("java.lang", "String"))
    }

    fn resolve(token: &str) -> String {
        resolver()
            .type_name(token)
            .expect("resolvable token")
            .to_string()
    }

    #[test]
    fn test_resolve_primitives_and_aliases() {
        assert_eq!(resolve("int"), "int");
        assert_eq!(resolve("boolean"), "boolean");
        assert_eq!(resolve("string"), "java.lang.String");
    }

    #[test]
    fn test_resolve_builtins_and_generated() {
        assert_eq!(resolve("String"), "java.lang.String");
        assert_eq!(resolve("Instant"), "java.time.Instant");
        assert_eq!(resolve("Widget"), "com.example.model.Widget");
    }

    #[test]
    fn test_resolve_qualified_and_nested() {
        assert_eq!(resolve("java.net.URI"), "java.net.URI");
        assert_eq!(resolve("java.util.Map.Entry"), "java.util.Map.Entry");
        assert_eq!(resolve("Widget.Part"), "com.example.model.Widget.Part");

        let nested = resolver().type_name("Widget.Part").expect("resolvable");
        assert_eq!(
            nested.as_class_name().map(ClassName::simple_names),
            Some(&["Widget".to_string(), "Part".to_string()][..])
        );
    }

    #[test]
    fn test_resolve_generics() {
        assert_eq!(
            resolve("Map<string, List<Widget>>"),
            "java.util.Map<java.lang.String, java.util.List<com.example.model.Widget>>"
        );
        assert_eq!(resolve("List<? extends Number>"), "java.util.List<? extends java.lang.Number>");
        assert_eq!(resolve("Class<?>"), "java.lang.Class<?>");
    }

    #[test]
    fn test_resolve_arrays_and_variables() {
        assert_eq!(resolve("byte[]"), "byte[]");
        assert_eq!(resolve("String[][]"), "java.lang.String[][]");
        assert!(matches!(
            resolver().type_name("T").expect("resolvable"),
            TypeName::Variable(_)
        ));
        assert!(matches!(
            resolver().type_name("V2").expect("resolvable"),
            TypeName::Variable(_)
        ));
    }

    #[test]
    fn test_resolve_rejects_malformed_tokens() {
        for token in ["", "List<", "List<String", "int<String>", "a..b", "Map<,>", "x y", "Foo]", "#"] {
            let result = resolver().type_name(token);
            assert!(
                matches!(result, Err(CodegenError::InvalidTypeName { .. })),
                "token {:?} should be rejected, got {:?}",
                token,
                result
            );
        }
    }

    #[test]
    fn test_type_name_for_joins_fragments() {
        let resolver = resolver();
        assert_eq!(
            resolver.type_name_for(&["Widget", "tag"]).canonical_name(),
            "com.example.model.WidgetTag"
        );
        assert_eq!(resolver.type_name_for(&["", "tag"]).simple_name(), "Tag");
    }

    #[test]
    fn test_spec_type_name() {
        let resolver = resolver();
        let plain = TypeSpec::class_builder("Widget").build();
        assert_eq!(
            resolver.spec_type_name(&plain).to_string(),
            "com.example.model.Widget"
        );

        let mut generic = TypeSpec::class_builder("Page");
        generic.add_type_variable(TypeVariableName::new("T"));
        assert_eq!(
            resolver.spec_type_name(&generic.build()).to_string(),
            "com.example.model.Page<T>"
        );
    }
}
