// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS custom properties (variables) and applying breakpoint sets to them.
//!
//! A [`Variable`] names a global or component custom property. Applying a [`BreakpointSet`]
//! writes one property per declared breakpoint: the bare name for [`Breakpoint::Default`],
//! and `<name>-on-<breakpoint>` for every other breakpoint.
//!
//! Component variables must be built from a component class produced by
//! [`ClassConfig::component`]. Anything else yields an invalid variable: a warning is logged once
//! at construction and every later `apply_*` call does nothing.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

use crate::breakpoint::Breakpoint;
use crate::config::ClassConfig;
use crate::modifier::TypedModifier;
use crate::set::BreakpointSet;

/// Destination for style properties, e.g. an element's inline style.
pub trait StyleSink {
    /// Sets property `name` to `value`.
    fn set_property(&mut self, name: &str, value: &str);
}

/// Inline style declarations kept in a map, sorted by property name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Creates an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// The value of property `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSink for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.into(), value.into());
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

/// Scope of a [`Variable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableScope {
    /// `--pf-v5-global--…`
    Global,
    /// `--pf-v5-c-<component>--…`
    Component,
}

/// Error returned by [`Variable::try_component`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VariableError {
    /// The component class does not start with the configured versioned prefix.
    #[error("component `{component}` does not start with `{expected}`")]
    InvalidComponent {
        /// The rejected component class.
        component: String,
        /// The prefix it should have started with.
        expected: String,
    },
}

/// A CSS custom property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    scope: VariableScope,
    name: String,
    valid: bool,
}

fn join_elements(name: &mut String, elements: &[&str]) {
    if !elements.is_empty() {
        name.push_str("--");
        name.push_str(&elements.join("--"));
    }
}

impl Variable {
    /// Global variable, e.g. `--pf-v5-global--spacer--md`.
    ///
    /// An empty `first` element yields an invalid variable.
    #[must_use]
    pub fn global(config: &ClassConfig, first: &str, rest: &[&str]) -> Self {
        let mut name = String::new();
        if !first.is_empty() {
            name.push_str("--");
            name.push_str(&config.versioned_prefix());
            name.push_str("global--");
            name.push_str(first);
            join_elements(&mut name, rest);
        }
        Self::new(VariableScope::Global, name)
    }

    /// Component variable, e.g. `--pf-v5-c-tabs--inset` for component `pf-v5-c-tabs`.
    ///
    /// If `component` was not built with `config`, the variable is invalid: a warning is logged
    /// and applying it has no effect.
    #[must_use]
    pub fn component(config: &ClassConfig, component: &str, elements: &[&str]) -> Self {
        match Self::try_component(config, component, elements) {
            Ok(variable) => variable,
            Err(err) => {
                tracing::warn!(%err, "invalid component variable, it will not be applied");
                Self::new(VariableScope::Component, String::new())
            }
        }
    }

    /// Like [`Variable::component`], but reports an invalid component as an error.
    pub fn try_component(
        config: &ClassConfig,
        component: &str,
        elements: &[&str],
    ) -> Result<Self, VariableError> {
        let expected = config.versioned_prefix();
        if !component.starts_with(&expected) || component.len() == expected.len() {
            return Err(VariableError::InvalidComponent {
                component: component.into(),
                expected,
            });
        }
        let mut name = String::from("--");
        name.push_str(component);
        join_elements(&mut name, elements);
        Ok(Self::new(VariableScope::Component, name))
    }

    fn new(scope: VariableScope, name: String) -> Self {
        let valid = !name.is_empty();
        Self { scope, name, valid }
    }

    /// Scope of the variable.
    #[must_use]
    pub fn scope(&self) -> VariableScope {
        self.scope
    }

    /// Property name, empty for an invalid variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether applying this variable has any effect.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Property name used for `breakpoint`.
    #[must_use]
    pub fn name_at(&self, breakpoint: Breakpoint) -> String {
        match breakpoint {
            Breakpoint::Default => self.name.clone(),
            bp => {
                let mut name = self.name.clone();
                name.push_str("-on-");
                name.push_str(bp.token());
                name
            }
        }
    }

    /// Sets the variable to `value`.
    pub fn apply<S: StyleSink + ?Sized>(&self, sink: &mut S, value: impl fmt::Display) {
        if self.valid {
            sink.set_property(&self.name, &alloc::format!("{value}"));
        }
    }

    /// Sets one property per declared breakpoint to the formatted value.
    pub fn apply_breakpoints<S, V, T, F>(
        &self,
        sink: &mut S,
        set: &BreakpointSet<V>,
        mut formatter: F,
    ) where
        S: StyleSink + ?Sized,
        T: AsRef<str>,
        F: FnMut(&V) -> T,
    {
        if !self.valid {
            return;
        }
        for (bp, value) in set {
            sink.set_property(&self.name_at(bp), formatter(value).as_ref());
        }
    }

    /// [`Variable::apply_breakpoints`] using each value's own [`TypedModifier::token`].
    pub fn apply_breakpoints_typed<S, T>(&self, sink: &mut S, set: &BreakpointSet<T>)
    where
        S: StyleSink + ?Sized,
        T: TypedModifier,
    {
        self.apply_breakpoints(sink, set, T::token);
    }
}
