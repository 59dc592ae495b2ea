// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered, duplicate-free list of class names.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Ordered set of class names, as found in a `class` attribute.
///
/// This is the host-agnostic counterpart of a DOM `classList`: rendered modifier strings are
/// spliced in with [`ClassList::extend_from_str`], and typed modifiers are swapped with
/// [`swap_modifier`](crate::swap_modifier).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Adds `class` unless it is empty or already present. Returns `true` if it was added.
    pub fn add(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Removes `class`. Returns `true` if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Whether `class` is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds every whitespace-separated class of `classes`.
    pub fn extend_from_str(&mut self, classes: &str) {
        for class in classes.split_ascii_whitespace() {
            self.add(class);
        }
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }
}

impl FromStr for ClassList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut list = Self::new();
        list.extend_from_str(s);
        Ok(list)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn add_remove_dedup() {
        let mut list = ClassList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert!(!list.add(""));
        list.extend_from_str("  b   a c ");
        assert_eq!(list.len(), 3);
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert_eq!(list.to_string(), "b c");
    }
}
