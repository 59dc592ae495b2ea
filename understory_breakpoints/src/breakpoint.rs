// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The breakpoint scale: named thresholds, their ordering, and viewport classification.

use core::fmt;
use core::str::FromStr;

/// A responsive design threshold.
///
/// Variants are declared from smallest to largest, so the derived [`Ord`] matches the
/// visual ordering (`Default < Sm < Md < Lg < Xl < Xxl`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Applies when no other breakpoint matches.
    #[default]
    Default,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// 2x extra large.
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints from smallest to largest.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// All breakpoints from largest to smallest. This is the scan order used when resolving.
    pub const LARGE_TO_SMALL: [Self; 6] = [
        Self::Xxl,
        Self::Xl,
        Self::Lg,
        Self::Md,
        Self::Sm,
        Self::Default,
    ];

    /// Token used in generated class and property names. Empty for [`Breakpoint::Default`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Identifier of the breakpoint, accepted by [`Breakpoint::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            other => other.token(),
        }
    }

    /// Minimum viewport width in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Sm => 576,
            Self::Md => 768,
            Self::Lg => 992,
            Self::Xl => 1200,
            Self::Xxl => 1450,
        }
    }

    /// Minimum viewport height in rem.
    #[must_use]
    pub const fn height(self) -> u32 {
        match self {
            Self::Default | Self::Sm => 0,
            Self::Md => 40,
            Self::Lg => 48,
            Self::Xl => 60,
            Self::Xxl => 80,
        }
    }

    /// CSS literal of [`Breakpoint::width`], e.g. `576px`.
    #[must_use]
    pub const fn width_css(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::Sm => "576px",
            Self::Md => "768px",
            Self::Lg => "992px",
            Self::Xl => "1200px",
            Self::Xxl => "1450px",
        }
    }

    /// CSS literal of [`Breakpoint::height`], e.g. `40rem`.
    #[must_use]
    pub const fn height_css(self) -> &'static str {
        match self {
            Self::Default | Self::Sm => "0",
            Self::Md => "40rem",
            Self::Lg => "48rem",
            Self::Xl => "60rem",
            Self::Xxl => "80rem",
        }
    }

    /// Classifies a viewport width into the largest breakpoint whose threshold it meets.
    #[must_use]
    pub fn for_width(width: u32) -> Self {
        Self::LARGE_TO_SMALL
            .into_iter()
            .find(|bp| width >= bp.width())
            .unwrap_or(Self::Default)
    }

    /// Classifies a viewport height into the largest breakpoint whose threshold it meets.
    #[must_use]
    pub fn for_height(height: u32) -> Self {
        Self::LARGE_TO_SMALL
            .into_iter()
            .find(|bp| height >= bp.height())
            .unwrap_or(Self::Default)
    }

    /// Position in [`Breakpoint::LARGE_TO_SMALL`].
    pub(crate) const fn descending_index(self) -> usize {
        5 - self as usize
    }

    pub(crate) const fn mask(self) -> BreakpointMask {
        BreakpointMask::from_bits_truncate(1 << self as u8)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown breakpoint identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint `{0}`, expected one of default, sm, md, lg, xl, 2xl")]
pub struct ParseBreakpointError(pub alloc::string::String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| ParseBreakpointError(s.into()))
    }
}

bitflags::bitflags! {
    /// Set of breakpoints, one bit per [`Breakpoint`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BreakpointMask: u8 {
        /// [`Breakpoint::Default`].
        const DEFAULT = 0b0000_0001;
        /// [`Breakpoint::Sm`].
        const SM      = 0b0000_0010;
        /// [`Breakpoint::Md`].
        const MD      = 0b0000_0100;
        /// [`Breakpoint::Lg`].
        const LG      = 0b0000_1000;
        /// [`Breakpoint::Xl`].
        const XL      = 0b0001_0000;
        /// [`Breakpoint::Xxl`].
        const XXL     = 0b0010_0000;
    }
}

impl BreakpointMask {
    /// Whether `breakpoint` is in the mask.
    #[must_use]
    pub const fn has(self, breakpoint: Breakpoint) -> bool {
        self.contains(breakpoint.mask())
    }
}

impl From<Breakpoint> for BreakpointMask {
    fn from(breakpoint: Breakpoint) -> Self {
        breakpoint.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_scale() {
        let mut sorted = Breakpoint::LARGE_TO_SMALL;
        sorted.sort_unstable();
        assert_eq!(sorted, Breakpoint::ALL);
        for (i, bp) in Breakpoint::LARGE_TO_SMALL.into_iter().enumerate() {
            assert_eq!(bp.descending_index(), i);
        }
    }

    #[test]
    fn tokens_and_names() {
        assert_eq!(Breakpoint::Default.token(), "");
        assert_eq!(Breakpoint::Default.name(), "default");
        assert_eq!(Breakpoint::Xxl.token(), "2xl");
        assert_eq!(Breakpoint::Md.name(), "md");
    }

    #[test]
    fn width_classification() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Default);
        assert_eq!(Breakpoint::for_width(575), Breakpoint::Default);
        assert_eq!(Breakpoint::for_width(576), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(991), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1200), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(4000), Breakpoint::Xxl);
    }

    #[test]
    fn height_classification() {
        // Sm shares the zero height threshold with Default, so Default is never picked.
        assert_eq!(Breakpoint::for_height(0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_height(39), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_height(40), Breakpoint::Md);
        assert_eq!(Breakpoint::for_height(80), Breakpoint::Xxl);
    }

    #[test]
    fn parse_round_trips_names() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.name().parse::<Breakpoint>(), Ok(bp));
        }
        assert!("huge".parse::<Breakpoint>().is_err());
        assert!("".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn mask_bits() {
        let mask = BreakpointMask::from(Breakpoint::Md) | BreakpointMask::from(Breakpoint::Xxl);
        assert!(mask.has(Breakpoint::Md));
        assert!(mask.has(Breakpoint::Xxl));
        assert!(!mask.has(Breakpoint::Default));
        assert_eq!(mask, BreakpointMask::MD | BreakpointMask::XXL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_breakpoint_names() {
        use alloc::format;

        for bp in Breakpoint::ALL {
            let json = serde_json::to_string(&bp).unwrap();
            assert_eq!(json, format!("\"{}\"", bp.name()));
            assert_eq!(serde_json::from_str::<Breakpoint>(&json).unwrap(), bp);
        }
        assert_eq!(serde_json::to_string(&Breakpoint::Xxl).unwrap(), "\"2xl\"");
        assert_eq!(
            serde_json::from_str::<Breakpoint>("\"default\"").unwrap(),
            Breakpoint::Default
        );
        assert!(serde_json::from_str::<Breakpoint>("\"xxl\"").is_err());
    }
}
