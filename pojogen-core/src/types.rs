//! Type name definitions for the generated object model.
//!
//! This module provides the type references used throughout a type
//! definition: primitives, (nested) class names, parameterized types,
//! arrays, type variables and wildcards.

use std::fmt;

/// Primitive type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `boolean`.
    Boolean,
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Short,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Long,
    /// UTF-16 code unit.
    Char,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// No value, only valid as a return type.
    Void,
}

impl PrimitiveType {
    /// Returns the keyword spelling of this primitive.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }

    /// Parses a primitive type from its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "void" => Some(Self::Void),
            _ => None,
        }
    }
}

/// A fully qualified class name, possibly nested inside other classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    /// Outermost class first.
    simple_names: Vec<String>,
}

impl ClassName {
    /// Creates a top-level class name.
    ///
    /// # Arguments
    /// * `package` - Package name, empty for the default package
    /// * `simple_name` - Simple name of the class
    #[must_use]
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Guesses a class name from a dotted string.
    ///
    /// Leading lowercase segments form the package, the remaining segments
    /// are treated as nested simple names (`java.util.Map.Entry`).
    /// Returns `None` when no segment starts with an uppercase letter or a
    /// segment is empty.
    #[must_use]
    pub fn best_guess(name: &str) -> Option<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        let first_class = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))?;
        Some(Self {
            package: segments[..first_class].join("."),
            simple_names: segments[first_class..]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        })
    }

    /// Returns the package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Returns the innermost simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Returns all simple names, outermost first.
    #[must_use]
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// Returns a class nested directly inside this one.
    #[must_use]
    pub fn nested_class(&self, name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Returns the dotted canonical name (`pkg.Outer.Inner`).
    #[must_use]
    pub fn canonical_name(&self) -> String {
        let nested = self.simple_names.join(".");
        if self.package.is_empty() {
            nested
        } else {
            format!("{}.{}", self.package, nested)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// A generic class applied to type arguments (`List<String>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterizedTypeName {
    raw_type: ClassName,
    type_arguments: Vec<TypeName>,
}

impl ParameterizedTypeName {
    /// Creates a parameterized type.
    #[must_use]
    pub fn new(raw_type: ClassName, type_arguments: Vec<TypeName>) -> Self {
        Self {
            raw_type,
            type_arguments,
        }
    }

    /// Returns the raw (unparameterized) class.
    #[must_use]
    pub fn raw_type(&self) -> &ClassName {
        &self.raw_type
    }

    /// Returns the type arguments in declaration order.
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }
}

/// A type variable such as `T` or `T extends Comparable<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariableName {
    name: String,
    bounds: Vec<TypeName>,
}

impl TypeVariableName {
    /// Creates an unbounded type variable.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Returns a copy of this variable with an added upper bound.
    #[must_use]
    pub fn with_bound(mut self, bound: TypeName) -> Self {
        self.bounds.push(bound);
        self
    }

    /// Returns the variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the upper bounds.
    #[must_use]
    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    /// Returns the declaration form (`T extends A & B`).
    #[must_use]
    pub fn declaration(&self) -> String {
        if self.bounds.is_empty() {
            return self.name.clone();
        }
        let bounds: Vec<String> = self.bounds.iter().map(ToString::to_string).collect();
        format!("{} extends {}", self.name, bounds.join(" & "))
    }
}

/// Wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardTypeName {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeName>),
    /// `? super T`
    Super(Box<TypeName>),
}

/// Any type reference usable in a type definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// Primitive type.
    Primitive(PrimitiveType),
    /// Plain class reference.
    Class(ClassName),
    /// Generic class applied to arguments.
    Parameterized(ParameterizedTypeName),
    /// Array of a component type.
    Array(Box<TypeName>),
    /// Type variable reference.
    Variable(TypeVariableName),
    /// Wildcard type argument.
    Wildcard(WildcardTypeName),
}

impl TypeName {
    /// Creates an array type of the given component.
    #[must_use]
    pub fn array_of(component: impl Into<TypeName>) -> Self {
        Self::Array(Box::new(component.into()))
    }

    /// Returns true for primitive types.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns the class name if this is a plain class reference.
    #[must_use]
    pub fn as_class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the class a nested type can be declared under.
    ///
    /// A plain class is returned as is; a parameterized type yields its raw
    /// type. Every other shape has no enclosing class.
    #[must_use]
    pub fn enclosing_class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Class(name) => Some(name),
            Self::Parameterized(parameterized) => Some(parameterized.raw_type()),
            _ => None,
        }
    }

    /// Returns a short description of this reference's shape.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Class(_) => "class",
            Self::Parameterized(_) => "parameterized",
            Self::Array(_) => "array",
            Self::Variable(_) => "type variable",
            Self::Wildcard(_) => "wildcard",
        }
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl From<ClassName> for TypeName {
    fn from(value: ClassName) -> Self {
        Self::Class(value)
    }
}

impl From<ParameterizedTypeName> for TypeName {
    fn from(value: ParameterizedTypeName) -> Self {
        Self::Parameterized(value)
    }
}

impl From<TypeVariableName> for TypeName {
    fn from(value: TypeVariableName) -> Self {
        Self::Variable(value)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Class(name) => write!(f, "{}", name),
            Self::Parameterized(p) => {
                write!(f, "{}<", p.raw_type)?;
                for (i, arg) in p.type_arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            Self::Array(component) => write!(f, "{}[]", component),
            Self::Variable(v) => f.write_str(&v.name),
            Self::Wildcard(WildcardTypeName::Unbounded) => f.write_str("?"),
            Self::Wildcard(WildcardTypeName::Extends(bound)) => write!(f, "? extends {}", bound),
            Self::Wildcard(WildcardTypeName::Super(bound)) => write!(f, "? super {}", bound),
        }
    }
}
