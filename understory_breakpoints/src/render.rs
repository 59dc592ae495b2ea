// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering breakpoint sets into modifier class strings.
//!
//! Every entry becomes one token of the form `<prefix><value>[-on-<breakpoint>]`.
//! The [`Breakpoint::Default`] entry never carries a breakpoint suffix.
//! Tokens are joined with single spaces. Consumers must treat the result as a set of classes:
//! token order follows declaration order today, but is not part of the contract.
//!
//! An empty formatted value still yields a token when it carries a breakpoint suffix
//! (`pf-m--on-md`). Only an empty value without a suffix is dropped, since it would render as
//! the bare prefix.

use alloc::string::String;

use crate::breakpoint::Breakpoint;
use crate::modifier::TypedModifier;
use crate::set::BreakpointSet;

/// Axis a rendered breakpoint token refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

fn push_token(
    out: &mut String,
    prefix: &str,
    value: &str,
    breakpoint: Option<(Breakpoint, Axis)>,
) {
    let suffix = breakpoint.filter(|(bp, _)| *bp != Breakpoint::Default);
    if value.is_empty() && suffix.is_none() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(prefix);
    out.push_str(value);
    if let Some((bp, axis)) = suffix {
        out.push_str("-on-");
        out.push_str(bp.token());
        if axis == Axis::Height {
            out.push_str("-height");
        }
    }
}

fn render_axis<V, S, F>(
    set: &BreakpointSet<V>,
    prefix: &str,
    axis: Axis,
    mut formatter: F,
) -> String
where
    S: AsRef<str>,
    F: FnMut(&V) -> S,
{
    let mut out = String::new();
    for (bp, value) in set {
        push_token(&mut out, prefix, formatter(value).as_ref(), Some((bp, axis)));
    }
    out
}

/// Renders every entry of `set` as a width-based modifier class.
///
/// ```rust
/// use understory_breakpoints::{BreakpointSet, render};
///
/// let set = BreakpointSet::builder().default("foo").lg("bar").build();
/// assert_eq!(render(&set, "pf-m-", |v| *v), "pf-m-foo pf-m-bar-on-lg");
/// ```
pub fn render<V, S, F>(set: &BreakpointSet<V>, prefix: &str, formatter: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&V) -> S,
{
    render_axis(set, prefix, Axis::Width, formatter)
}

/// Renders every entry of `set` as a height-based modifier class (`…-on-<breakpoint>-height`).
pub fn render_vertical<V, S, F>(set: &BreakpointSet<V>, prefix: &str, formatter: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&V) -> S,
{
    render_axis(set, prefix, Axis::Height, formatter)
}

/// Renders the value resolved at `requested` as a single modifier class.
///
/// Unlike [`render`], no breakpoint suffix is added. Returns an empty string when nothing
/// resolves; see [`BreakpointSet::resolve`].
pub fn render_at<V, S, F>(
    set: &BreakpointSet<V>,
    requested: Breakpoint,
    prefix: &str,
    formatter: F,
) -> String
where
    S: AsRef<str>,
    F: FnOnce(&V) -> S,
{
    let mut out = String::new();
    if let Some(value) = set.resolve(requested) {
        push_token(&mut out, prefix, formatter(value).as_ref(), None);
    }
    out
}

/// [`render`] using each value's own [`TypedModifier::token`].
pub fn render_typed<T: TypedModifier>(set: &BreakpointSet<T>, prefix: &str) -> String {
    render(set, prefix, T::token)
}

/// [`render_vertical`] using each value's own [`TypedModifier::token`].
pub fn render_vertical_typed<T: TypedModifier>(set: &BreakpointSet<T>, prefix: &str) -> String {
    render_vertical(set, prefix, T::token)
}

/// [`render_at`] using the resolved value's own [`TypedModifier::token`].
pub fn render_at_typed<T: TypedModifier>(
    set: &BreakpointSet<T>,
    requested: Breakpoint,
    prefix: &str,
) -> String {
    render_at(set, requested, prefix, T::token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Size;
    use alloc::format;
    use alloc::vec::Vec;
    use Breakpoint::{Md, Sm, Xl, Xxl};

    const PF: &str = "pf-m-";

    fn tokens(s: &str) -> Vec<&str> {
        let mut t: Vec<&str> = s.split(' ').filter(|t| !t.is_empty()).collect();
        t.sort_unstable();
        t
    }

    fn full() -> BreakpointSet<&'static str> {
        BreakpointSet::builder()
            .default("a")
            .sm("b")
            .md("c")
            .lg("d")
            .xl("e")
            .xxl("f")
            .build()
    }

    #[test]
    fn empty_renders_nothing() {
        let set = BreakpointSet::<&str>::new();
        assert_eq!(render(&set, PF, |v| *v), "");
        assert_eq!(render_vertical(&set, PF, |v| *v), "");
        assert_eq!(render_at(&set, Breakpoint::Default, PF, |v| *v), "");
        assert_eq!(render_at(&set, Sm, PF, |v| *v), "");
    }

    #[test]
    fn single_entries() {
        let d = BreakpointSet::single(Breakpoint::Default, "foo");
        let m = BreakpointSet::single(Md, "foo");
        assert_eq!(render(&d, PF, |v| *v), "pf-m-foo");
        assert_eq!(render(&m, PF, |v| *v), "pf-m-foo-on-md");
    }

    #[test]
    fn formatter_is_applied() {
        let set = BreakpointSet::builder().default("foo").lg("bar").build();
        assert_eq!(
            render(&set, PF, |v| format!("prefix-{v}")),
            "pf-m-prefix-foo pf-m-prefix-bar-on-lg"
        );
    }

    #[test]
    fn token_rules_hold_for_every_entry() {
        let set = full();
        let out = render(&set, PF, |v| *v);
        assert_eq!(out.split(' ').count(), set.len());
        for token in out.split(' ') {
            assert!(token.starts_with(PF));
        }
        for (bp, v) in &set {
            let expected = if bp == Breakpoint::Default {
                format!("{PF}{v}")
            } else {
                format!("{PF}{v}-on-{}", bp.token())
            };
            assert!(out.split(' ').any(|t| t == expected), "missing {expected}");
        }
        assert_eq!(out.matches("-on-").count(), set.len() - 1);
    }

    #[test]
    fn vertical_suffixes() {
        let out = render_vertical(&full(), PF, |v| *v);
        assert_eq!(
            tokens(&out),
            [
                "pf-m-a",
                "pf-m-b-on-sm-height",
                "pf-m-c-on-md-height",
                "pf-m-d-on-lg-height",
                "pf-m-e-on-xl-height",
                "pf-m-f-on-2xl-height",
            ]
        );
    }

    #[test]
    fn scenario_inline_flex() {
        let set = BreakpointSet::builder().md("inline").lg("flex").build();
        let out = render(&set, "modifier-", |v| *v);
        assert_eq!(tokens(&out), ["modifier-flex-on-lg", "modifier-inline-on-md"]);
    }

    #[test]
    fn single_resolved_token_has_no_suffix() {
        let set = BreakpointSet::single(Md, "foo");
        assert_eq!(render_at(&set, Xxl, PF, |v| *v), "pf-m-foo");
        assert_eq!(render_at(&set, Md, PF, |v| *v), "pf-m-foo");
        assert_eq!(render_at(&set, Sm, PF, |v| *v), "");
        assert_eq!(
            render_at(&set, Xxl, PF, |v| format!("prefix-{v}")),
            "pf-m-prefix-foo"
        );
    }

    #[test]
    fn empty_default_value_is_dropped() {
        let set = BreakpointSet::builder().default("").md("x").build();
        assert_eq!(render(&set, PF, |v| *v), "pf-m-x-on-md");
        assert_eq!(render_vertical(&set, PF, |v| *v), "pf-m-x-on-md-height");
        assert_eq!(render_at(&set, Sm, PF, |v| *v), "");
    }

    #[test]
    fn empty_suffixed_value_keeps_its_token() {
        let set = BreakpointSet::builder().md("").lg("flex").build();
        let out = render(&set, PF, |v| *v);
        assert_eq!(out.split(' ').count(), set.len());
        assert_eq!(tokens(&out), ["pf-m--on-md", "pf-m-flex-on-lg"]);
        assert_eq!(
            tokens(&render_vertical(&set, PF, |v| *v)),
            ["pf-m--on-md-height", "pf-m-flex-on-lg-height"]
        );
        // No suffix on the single resolved token, so nothing is left to render.
        assert_eq!(render_at(&set, Md, PF, |v| *v), "");
    }

    #[test]
    fn rendering_is_idempotent() {
        let set = full();
        assert_eq!(
            tokens(&render(&set, PF, |v| *v)),
            tokens(&render(&set, PF, |v| *v))
        );
    }

    #[test]
    fn typed_values_render_their_own_token() {
        let set = BreakpointSet::builder()
            .default(Size::Sm)
            .lg(Size::Md)
            .xxl(Size::Xl)
            .build();
        assert_eq!(
            render_typed(&set, PF),
            "pf-m-sm pf-m-md-on-lg pf-m-xl-on-2xl"
        );
        assert_eq!(render_at_typed(&set, Xl, PF), "pf-m-md");
        assert_eq!(
            render_vertical_typed(&set, PF),
            "pf-m-sm pf-m-md-on-lg-height pf-m-xl-on-2xl-height"
        );
    }
}
