// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class name configuration.
//!
//! Component, layout, and utility classes carry a version segment (`pf-v5-c-button`), while
//! modifier classes do not (`pf-m-plain`). The version is configuration injected by the host,
//! not a constant baked into the crate.

use alloc::format;
use alloc::string::String;

use crate::breakpoint::Breakpoint;

/// Major version used by [`ClassConfig::default`].
pub const DEFAULT_VERSION: u8 = 5;

/// Settings for building class and variable names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassConfig {
    /// Namespace every class starts with.
    pub namespace: String,
    /// Major version inserted after the namespace, if any.
    pub version: Option<u8>,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            namespace: "pf".into(),
            version: Some(DEFAULT_VERSION),
        }
    }
}

impl ClassConfig {
    /// Configuration without a version segment (`pf-c-button`).
    #[must_use]
    pub fn unversioned() -> Self {
        Self {
            version: None,
            ..Self::default()
        }
    }

    /// Versioned namespace with trailing dash, e.g. `pf-v5-`.
    ///
    /// Every component class built by this configuration starts with this prefix.
    #[must_use]
    pub fn versioned_prefix(&self) -> String {
        match self.version {
            Some(v) => format!("{}-v{v}-", self.namespace),
            None => format!("{}-", self.namespace),
        }
    }

    /// Prefix of modifier classes, e.g. `pf-m-`.
    #[must_use]
    pub fn modifier_prefix(&self) -> String {
        format!("{}-m-", self.namespace)
    }

    /// Component class, e.g. `pf-v5-c-button` or `pf-v5-c-card__header-main`.
    #[must_use]
    pub fn component(&self, component: &str, elements: &[&str]) -> String {
        self.compose('c', component, elements)
    }

    /// Layout class, e.g. `pf-v5-l-flex`.
    #[must_use]
    pub fn layout(&self, layout: &str, elements: &[&str]) -> String {
        self.compose('l', layout, elements)
    }

    /// Utility class, e.g. `pf-v5-u-screen-reader`.
    #[must_use]
    pub fn util(&self, utility: &str) -> String {
        if utility.is_empty() {
            return String::new();
        }
        format!("{}u-{utility}", self.versioned_prefix())
    }

    /// Modifier class, e.g. `pf-m-plain`. Empty for an empty modifier.
    #[must_use]
    pub fn modifier(&self, modifier: &str) -> String {
        if modifier.is_empty() {
            return String::new();
        }
        format!("{}{modifier}", self.modifier_prefix())
    }

    /// Modifier class for one breakpoint, e.g. `pf-m-hidden-on-md`.
    #[must_use]
    pub fn modifier_at(&self, modifier: &str, breakpoint: Breakpoint) -> String {
        if modifier.is_empty() {
            return String::new();
        }
        match breakpoint {
            Breakpoint::Default => self.modifier(modifier),
            bp => format!("{}{modifier}-on-{}", self.modifier_prefix(), bp.token()),
        }
    }

    fn compose(&self, abbreviation: char, name: &str, elements: &[&str]) -> String {
        if name.is_empty() {
            return String::new();
        }
        let mut class = format!("{}{abbreviation}-{name}", self.versioned_prefix());
        if !elements.is_empty() {
            class.push_str("__");
            class.push_str(&elements.join("-"));
        }
        class
    }
}
