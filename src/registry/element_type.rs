//! Type identity used as the registry key.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of the element type a comparer is registered for.
///
/// Equality and hashing use the [`TypeId`] only; the name is carried for
/// diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, e.g. `Vec<Foo>`
    pub fn short_name(&self) -> String {
        short_type_name(self.name)
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl Hash for ElementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// Strip module paths from every path segment of a type name
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            segment_start = out.len();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    mod nested {
        pub struct Foo;
    }

    #[test]
    fn test_identity_ignores_name() {
        assert_eq!(ElementType::of::<u32>(), ElementType::of::<u32>());
        assert_ne!(ElementType::of::<u32>(), ElementType::of::<i32>());
    }

    #[test]
    fn test_short_name_strips_paths() {
        assert_eq!(ElementType::of::<nested::Foo>().short_name(), "Foo");
        assert_eq!(
            ElementType::of::<Vec<nested::Foo>>().short_name(),
            "Vec<Foo>"
        );
        assert_eq!(
            short_type_name("std::collections::HashMap<alloc::string::String, a::b::C<d::E>>"),
            "HashMap<String, C<E>>"
        );
        assert_eq!(short_type_name("&str"), "&str");
        assert_eq!(short_type_name("(i32, core::option::Option<u8>)"), "(i32, Option<u8>)");
    }

    #[test]
    fn test_display_uses_short_name() {
        assert_eq!(ElementType::of::<nested::Foo>().to_string(), "Foo");
        assert!(ElementType::of::<nested::Foo>().name().ends_with("nested::Foo"));
    }
}
