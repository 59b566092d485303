//! Code blocks with typed placeholder substitution.
//!
//! A [`CodeBlock`] is built from format strings in which `$` introduces a
//! placeholder:
//!
//! | placeholder | meaning                                        |
//! |-------------|------------------------------------------------|
//! | `$L`        | literal, emitted verbatim                      |
//! | `$S`        | string literal, quoted and escaped             |
//! | `$T`        | type reference, requires a type argument       |
//! | `$N`        | name, emitted verbatim                         |
//! | `$$`        | a literal dollar sign                          |
//! | `$>` / `$<` | increase / decrease indentation                |
//! | `$W`        | a space                                        |
//!
//! Argument placeholders may be positional (`$1L`, `$2T`) but a single
//! format string cannot mix positional and relative forms, and every
//! supplied argument must be consumed.

use crate::error::{Error, Result};
use crate::types::{ClassName, TypeName};
use std::fmt;

const INDENT: &str = "    ";

/// An argument substituted into a code block format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeArg {
    /// Literal text.
    Literal(String),
    /// Type reference.
    Type(TypeName),
}

impl CodeArg {
    /// Returns the textual form of this argument.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Literal(literal) => literal.clone(),
            Self::Type(type_name) => type_name.to_string(),
        }
    }
}

impl From<&str> for CodeArg {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for CodeArg {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<TypeName> for CodeArg {
    fn from(value: TypeName) -> Self {
        Self::Type(value)
    }
}

impl From<ClassName> for CodeArg {
    fn from(value: ClassName) -> Self {
        Self::Type(TypeName::Class(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CodeToken {
    Text(String),
    Type(TypeName),
    Indent,
    Unindent,
}

/// A fragment of generated code with structured type references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    tokens: Vec<CodeToken>,
}

impl CodeBlock {
    /// Creates a new code block builder.
    #[must_use]
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// Creates a code block from a single format string.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn of(format: &str, args: &[CodeArg]) -> Result<Self> {
        Ok(Self {
            tokens: parse_format(format, args)?,
        })
    }

    /// Returns true if the block contains no code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns every type referenced by this block, in order of appearance.
    pub fn referenced_types(&self) -> impl Iterator<Item = &TypeName> {
        self.tokens.iter().filter_map(|token| match token {
            CodeToken::Type(type_name) => Some(type_name),
            _ => None,
        })
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level = 0usize;
        let mut at_line_start = true;
        let mut emit = |f: &mut fmt::Formatter<'_>, text: &str, level: usize| -> fmt::Result {
            for c in text.chars() {
                if c == '\n' {
                    at_line_start = true;
                } else if at_line_start {
                    for _ in 0..level {
                        f.write_str(INDENT)?;
                    }
                    at_line_start = false;
                }
                write!(f, "{}", c)?;
            }
            Ok(())
        };

        for token in &self.tokens {
            match token {
                CodeToken::Text(text) => emit(f, text, level)?,
                CodeToken::Type(type_name) => emit(f, &type_name.to_string(), level)?,
                CodeToken::Indent => level += 1,
                CodeToken::Unindent => level = level.saturating_sub(1),
            }
        }
        Ok(())
    }
}

/// Builder for [`CodeBlock`].
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    tokens: Vec<CodeToken>,
}

impl CodeBlockBuilder {
    /// Appends formatted code.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn add(&mut self, format: &str, args: &[CodeArg]) -> Result<&mut Self> {
        self.tokens.extend(parse_format(format, args)?);
        Ok(self)
    }

    /// Appends formatted code terminated by `;` and a newline.
    ///
    /// # Errors
    /// Returns an error if the format string and arguments do not match.
    pub fn add_statement(&mut self, format: &str, args: &[CodeArg]) -> Result<&mut Self> {
        self.add(format, args)?;
        self.tokens.push(CodeToken::Text(";\n".to_string()));
        Ok(self)
    }

    /// Appends an existing code block.
    pub fn add_code(&mut self, block: &CodeBlock) -> &mut Self {
        self.tokens.extend(block.tokens.iter().cloned());
        self
    }

    /// Increases indentation for subsequent lines.
    pub fn indent(&mut self) -> &mut Self {
        self.tokens.push(CodeToken::Indent);
        self
    }

    /// Decreases indentation for subsequent lines.
    pub fn unindent(&mut self) -> &mut Self {
        self.tokens.push(CodeToken::Unindent);
        self
    }

    /// Builds the code block.
    #[must_use]
    pub fn build(&self) -> CodeBlock {
        CodeBlock {
            tokens: self.tokens.clone(),
        }
    }
}

/// Quotes and escapes a string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn parse_format(format: &str, args: &[CodeArg]) -> Result<Vec<CodeToken>> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = format.chars().peekable();
    let mut next_relative = 0usize;
    let mut positional = false;
    let mut used = vec![false; args.len()];

    while let Some(c) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }

        let mut digits = String::new();
        while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
            digits.push(d);
            chars.next();
        }

        let placeholder = chars.next().ok_or_else(|| Error::DanglingDollar {
            format: format.to_string(),
        })?;

        match placeholder {
            '$' | '>' | '<' | 'W' if !digits.is_empty() => {
                return Err(Error::InvalidPosition {
                    format: format.to_string(),
                });
            }
            '$' => text.push('$'),
            'W' => text.push(' '),
            '>' | '<' => {
                flush(&mut tokens, &mut text);
                tokens.push(if placeholder == '>' {
                    CodeToken::Indent
                } else {
                    CodeToken::Unindent
                });
            }
            'L' | 'S' | 'T' | 'N' => {
                let index = if digits.is_empty() {
                    next_relative += 1;
                    next_relative - 1
                } else {
                    positional = true;
                    match digits.parse::<usize>() {
                        Ok(n) if n > 0 => n - 1,
                        _ => {
                            return Err(Error::InvalidPosition {
                                format: format.to_string(),
                            });
                        }
                    }
                };
                if positional && next_relative > 0 {
                    return Err(Error::MixedPlaceholders {
                        format: format.to_string(),
                    });
                }

                let arg = args
                    .get(index)
                    .ok_or_else(|| Error::missing_argument(format, index, args.len()))?;
                used[index] = true;

                match (placeholder, arg) {
                    ('T' | 'L', CodeArg::Type(type_name)) => {
                        flush(&mut tokens, &mut text);
                        tokens.push(CodeToken::Type(type_name.clone()));
                    }
                    ('T', CodeArg::Literal(literal)) => {
                        return Err(Error::TypeExpected {
                            format: format.to_string(),
                            index,
                            literal: literal.clone(),
                        });
                    }
                    ('S', arg) => text.push_str(&string_literal(&arg.text())),
                    (_, arg) => text.push_str(&arg.text()),
                }
            }
            other => return Err(Error::unknown_placeholder(format, other)),
        }
    }
    flush(&mut tokens, &mut text);

    let unused = used.iter().filter(|u| !**u).count();
    if unused > 0 {
        return Err(Error::UnusedArguments {
            format: format.to_string(),
            unused,
        });
    }

    Ok(tokens)
}

fn flush(tokens: &mut Vec<CodeToken>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(CodeToken::Text(std::mem::take(text)));
    }
}
