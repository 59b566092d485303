//! Declaration modifiers.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Modifier set attached to a type, field, method or parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// `public`
        const PUBLIC = 1 << 0;
        /// `protected`
        const PROTECTED = 1 << 1;
        /// `private`
        const PRIVATE = 1 << 2;
        /// `abstract`
        const ABSTRACT = 1 << 3;
        /// `static`
        const STATIC = 1 << 4;
        /// `final`
        const FINAL = 1 << 5;
    }
}

impl Modifiers {
    /// Returns the keywords in canonical source order.
    #[must_use]
    pub fn keywords(&self) -> Vec<&'static str> {
        [
            (Self::PUBLIC, "public"),
            (Self::PROTECTED, "protected"),
            (Self::PRIVATE, "private"),
            (Self::ABSTRACT, "abstract"),
            (Self::STATIC, "static"),
            (Self::FINAL, "final"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, keyword)| keyword)
        .collect()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keywords().join(" "))
    }
}
