// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breakpoints --heading-base-level=0

//! Understory Breakpoints: responsive breakpoint values and modifier classes.
//!
//! Responsive UIs declare values for a few breakpoints only ("inline from medium, flex from
//! large") and turn them into modifier classes (`pf-m-inline-on-md pf-m-flex-on-lg`) or into
//! per-breakpoint CSS custom properties. This crate holds that bookkeeping:
//!
//! - [`Breakpoint`]: the six-step scale (`default`, `sm`, `md`, `lg`, `xl`, `2xl`) with its
//!   tokens and viewport thresholds.
//! - [`BreakpointSet`]: an immutable, sparse mapping from breakpoints to values, built with
//!   [`BreakpointSet::builder`].
//! - [`BreakpointSet::resolve`]: the value that applies at a given breakpoint.
//! - [`render`], [`render_vertical`], [`render_at`]: modifier class strings.
//! - [`TypedModifier`]: values that know their own token, rendered with the `*_typed` variants.
//! - [`Variable`]: CSS custom properties, applied per breakpoint to a [`StyleSink`].
//! - [`ClassConfig`]: namespace and version used for class and variable names.
//!
//! It does not touch any DOM or widget tree. Hosts splice the returned strings into their own
//! class lists and styles.
//!
//! ## Resolution
//!
//! A breakpoint that is declared resolves to its own value. Otherwise the scale is scanned from
//! the requested breakpoint toward `default` (`2xl`, `xl`, `lg`, `md`, `sm`, `default`) and the
//! first declared value wins. A value declared only at a larger breakpoint is never used for a
//! smaller one.
//!
//! # Example
//!
//! ```rust
//! use understory_breakpoints::{
//!     Breakpoint, BreakpointSet, ClassConfig, Display, InlineStyle, Variable, render_at_typed,
//!     render_typed,
//! };
//!
//! let config = ClassConfig::default();
//! let prefix = config.modifier_prefix();
//!
//! let display = BreakpointSet::builder()
//!     .default(Display::Flex)
//!     .lg(Display::Inline)
//!     .build();
//! assert_eq!(render_typed(&display, &prefix), "pf-m-flex pf-m-inline-on-lg");
//! assert_eq!(render_at_typed(&display, Breakpoint::Md, &prefix), "pf-m-flex");
//!
//! let width = Variable::component(&config, &config.component("card", &[]), &["width"]);
//! let mut style = InlineStyle::new();
//! width.apply_breakpoints(
//!     &mut style,
//!     &BreakpointSet::builder().md("20rem").build(),
//!     |v| *v,
//! );
//! assert_eq!(style.get("--pf-v5-c-card--width-on-md"), Some("20rem"));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Breakpoint`] and [`ClassConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod class_list;
mod config;
mod modifier;
mod render;
mod set;
mod variable;

pub use breakpoint::{Breakpoint, BreakpointMask, ParseBreakpointError};
pub use class_list::ClassList;
pub use config::{ClassConfig, DEFAULT_VERSION};
pub use modifier::{Direction, Display, Gap, Inset, Size, TypedModifier, swap_modifier};
pub use render::{
    render, render_at, render_at_typed, render_typed, render_vertical, render_vertical_typed,
};
pub use set::{BreakpointSet, BreakpointSetBuilder, Iter};
pub use variable::{InlineStyle, StyleSink, Variable, VariableError, VariableScope};
