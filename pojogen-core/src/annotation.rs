//! Annotation definitions.

use crate::code::{CodeArg, CodeBlock};
use crate::error::Result;
use crate::types::ClassName;
use std::fmt;

/// An annotation applied to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationSpec {
    type_name: ClassName,
    /// Member name to values, in first-added order.
    members: Vec<(String, Vec<CodeBlock>)>,
}

impl AnnotationSpec {
    /// Creates a new annotation builder for the given annotation type.
    #[must_use]
    pub fn builder(type_name: ClassName) -> AnnotationSpecBuilder {
        AnnotationSpecBuilder {
            spec: Self {
                type_name,
                members: Vec::new(),
            },
        }
    }

    /// Creates a member-less annotation.
    #[must_use]
    pub fn of(type_name: ClassName) -> Self {
        Self::builder(type_name).build()
    }

    /// Returns the annotation type.
    #[must_use]
    pub fn type_name(&self) -> &ClassName {
        &self.type_name
    }

    /// Returns the values recorded for a member.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&[CodeBlock]> {
        self.members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns all members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &[CodeBlock])> {
        self.members
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl fmt::Display for AnnotationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.type_name)?;
        if self.members.is_empty() {
            return Ok(());
        }

        let render = |values: &[CodeBlock]| {
            if values.len() == 1 {
                values[0].to_string()
            } else {
                let items: Vec<String> = values.iter().map(ToString::to_string).collect();
                format!("{{{}}}", items.join(", "))
            }
        };

        f.write_str("(")?;
        match self.members.as_slice() {
            [(name, values)] if name == "value" => f.write_str(&render(values))?,
            members => {
                for (i, (name, values)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", name, render(values))?;
                }
            }
        }
        f.write_str(")")
    }
}

/// Builder for [`AnnotationSpec`].
#[derive(Debug, Clone)]
pub struct AnnotationSpecBuilder {
    spec: AnnotationSpec,
}

impl AnnotationSpecBuilder {
    /// Adds a formatted value to a member.
    ///
    /// Adding the same member twice accumulates both values.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn add_member(mut self, name: &str, format: &str, args: &[CodeArg]) -> Result<Self> {
        let value = CodeBlock::of(format, args)?;
        match self.spec.members.iter_mut().find(|(member, _)| member == name) {
            Some((_, values)) => values.push(value),
            None => self.spec.members.push((name.to_string(), vec![value])),
        }
        Ok(self)
    }

    /// Builds the annotation.
    #[must_use]
    pub fn build(self) -> AnnotationSpec {
        self.spec
    }
}
