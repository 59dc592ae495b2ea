// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse per-breakpoint values and their resolution.

use core::slice;

use smallvec::SmallVec;

use crate::breakpoint::{Breakpoint, BreakpointMask};

type Entries<V> = SmallVec<[(Breakpoint, V); 6]>;

/// An immutable, sparse mapping from breakpoints to values.
///
/// Keys are unique. Entries keep the order in which they were declared, but resolution and
/// rendering semantics do not depend on that order.
///
/// Build one with [`BreakpointSet::builder`], [`BreakpointSet::single`], or by collecting
/// `(Breakpoint, V)` pairs. Once built, a set cannot be mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointSet<V> {
    entries: Entries<V>,
    keys: BreakpointMask,
}

impl<V> Default for BreakpointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BreakpointSet<V> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            keys: BreakpointMask::empty(),
        }
    }

    /// Creates a set with a single entry.
    #[must_use]
    pub fn single(breakpoint: Breakpoint, value: V) -> Self {
        BreakpointSetBuilder::new().set(breakpoint, value).build()
    }

    /// Starts a fluent builder.
    #[must_use]
    pub fn builder() -> BreakpointSetBuilder<V> {
        BreakpointSetBuilder::new()
    }

    /// Number of declared breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no breakpoint is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `breakpoint` is declared.
    #[must_use]
    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.keys.has(breakpoint)
    }

    /// The declared breakpoints as a mask.
    #[must_use]
    pub fn keys(&self) -> BreakpointMask {
        self.keys
    }

    /// The value declared at exactly `breakpoint`.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&V> {
        if !self.contains(breakpoint) {
            return None;
        }
        self.entries
            .iter()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, v)| v)
    }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Resolves the value that applies at `requested`.
    ///
    /// If `requested` is declared, its value is returned. Otherwise the breakpoints are scanned
    /// in [`Breakpoint::LARGE_TO_SMALL`] order, starting at the position of `requested` and moving
    /// toward [`Breakpoint::Default`]; the first declared value found is returned.
    ///
    /// ```rust
    /// use understory_breakpoints::{Breakpoint, BreakpointSet};
    ///
    /// let set = BreakpointSet::builder().md("foo").build();
    /// assert_eq!(set.resolve(Breakpoint::Xxl), Some(&"foo"));
    /// assert_eq!(set.resolve(Breakpoint::Sm), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, requested: Breakpoint) -> Option<&V> {
        if let Some(value) = self.get(requested) {
            return Some(value);
        }
        let found = Breakpoint::LARGE_TO_SMALL[requested.descending_index()..]
            .iter()
            .find(|bp| self.contains(**bp))?;
        tracing::trace!(?requested, resolved = ?found, "breakpoint resolved by fallback");
        self.get(*found)
    }
}

impl<V> FromIterator<(Breakpoint, V)> for BreakpointSet<V> {
    /// Collects pairs into a set. A breakpoint given more than once keeps its last value.
    fn from_iter<I: IntoIterator<Item = (Breakpoint, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(BreakpointSetBuilder::new(), |b, (bp, v)| b.set(bp, v))
            .build()
    }
}

impl<'a, V> IntoIterator for &'a BreakpointSet<V> {
    type Item = (Breakpoint, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`BreakpointSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, (Breakpoint, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Breakpoint, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(bp, v)| (*bp, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Fluent builder producing an immutable [`BreakpointSet`].
///
/// Setting a breakpoint twice replaces the earlier value and keeps its original position.
#[derive(Clone, Debug)]
pub struct BreakpointSetBuilder<V> {
    set: BreakpointSet<V>,
}

impl<V> Default for BreakpointSetBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BreakpointSetBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            set: BreakpointSet::new(),
        }
    }

    /// Declares `value` at `breakpoint`.
    #[must_use]
    pub fn set(mut self, breakpoint: Breakpoint, value: V) -> Self {
        if self.set.contains(breakpoint) {
            if let Some(slot) = self.set.entries.iter_mut().find(|(bp, _)| *bp == breakpoint) {
                slot.1 = value;
            }
        } else {
            self.set.entries.push((breakpoint, value));
            self.set.keys |= breakpoint.mask();
        }
        self
    }

    /// Declares `value` at [`Breakpoint::Default`].
    #[must_use]
    pub fn default(self, value: V) -> Self {
        self.set(Breakpoint::Default, value)
    }

    /// Declares `value` at [`Breakpoint::Sm`].
    #[must_use]
    pub fn sm(self, value: V) -> Self {
        self.set(Breakpoint::Sm, value)
    }

    /// Declares `value` at [`Breakpoint::Md`].
    #[must_use]
    pub fn md(self, value: V) -> Self {
        self.set(Breakpoint::Md, value)
    }

    /// Declares `value` at [`Breakpoint::Lg`].
    #[must_use]
    pub fn lg(self, value: V) -> Self {
        self.set(Breakpoint::Lg, value)
    }

    /// Declares `value` at [`Breakpoint::Xl`].
    #[must_use]
    pub fn xl(self, value: V) -> Self {
        self.set(Breakpoint::Xl, value)
    }

    /// Declares `value` at [`Breakpoint::Xxl`].
    #[must_use]
    pub fn xxl(self, value: V) -> Self {
        self.set(Breakpoint::Xxl, value)
    }

    /// Freezes the declared entries.
    #[must_use]
    pub fn build(self) -> BreakpointSet<V> {
        self.set
    }
}
