// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed modifiers: enumerated values that know their own class token.

use alloc::string::String;
use core::fmt;

use crate::class_list::ClassList;

/// A value that describes its own modifier token.
///
/// Sets of typed modifiers can be rendered without a formatter; see
/// [`render_typed`](crate::render_typed).
pub trait TypedModifier {
    /// Canonical token, e.g. `md` or `inset-lg`.
    fn token(&self) -> &'static str;

    /// Full modifier class, e.g. `pf-m-md` for prefix `pf-m-`.
    fn modifier_class(&self, prefix: &str) -> String {
        let token = self.token();
        if token.is_empty() {
            return String::new();
        }
        let mut class = String::with_capacity(prefix.len() + token.len());
        class.push_str(prefix);
        class.push_str(token);
        class
    }
}

/// Replaces the modifier class of `old` with the one of `new` in `classes`.
///
/// Either side may be absent: a missing `old` only adds, a missing `new` only removes.
/// Returns `true` if the class list changed.
pub fn swap_modifier<T: TypedModifier + PartialEq>(
    classes: &mut ClassList,
    old: Option<&T>,
    new: Option<&T>,
    prefix: &str,
) -> bool {
    if old == new {
        return false;
    }
    let mut changed = false;
    if let Some(old) = old {
        changed |= classes.remove(&old.modifier_class(prefix));
    }
    if let Some(new) = new {
        changed |= classes.add(new.modifier_class(prefix));
    }
    changed
}

macro_rules! typed_modifier {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// All values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl TypedModifier for $name {
            fn token(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

typed_modifier! {
    /// Component and text sizes.
    Size {
        /// `xs`
        Xs => "xs",
        /// `sm`
        Sm => "sm",
        /// `md`
        Md => "md",
        /// `lg`
        Lg => "lg",
        /// `xl`
        Xl => "xl",
        /// `2xl`
        Xxl => "2xl",
        /// `3xl`
        Xxxl => "3xl",
        /// `4xl`
        Xxxxl => "4xl",
    }
}

typed_modifier! {
    /// Horizontal insets of page sections and toolbars.
    Inset {
        /// No inset.
        None => "inset-none",
        /// Small inset.
        Sm => "inset-sm",
        /// Medium inset.
        Md => "inset-md",
        /// Large inset.
        Lg => "inset-lg",
        /// Extra large inset.
        Xl => "inset-xl",
        /// 2x extra large inset.
        Xxl => "inset-2xl",
    }
}

typed_modifier! {
    /// Gaps between flex and grid items.
    Gap {
        /// No gap.
        None => "gap-none",
        /// Extra small gap.
        Xs => "gap-xs",
        /// Small gap.
        Sm => "gap-sm",
        /// Medium gap.
        Md => "gap-md",
        /// Large gap.
        Lg => "gap-lg",
        /// Extra large gap.
        Xl => "gap-xl",
        /// 2x extra large gap.
        Xxl => "gap-2xl",
    }
}

typed_modifier! {
    /// CSS `display` values of layouts.
    Display {
        /// `display: inline`
        Inline => "inline",
        /// `display: flex`
        Flex => "flex",
        /// `display: inline-flex`
        InlineFlex => "inline-flex",
    }
}

typed_modifier! {
    /// Flex directions.
    Direction {
        /// Items laid out top to bottom.
        Column => "column",
        /// Items laid out bottom to top.
        ColumnReverse => "column-reverse",
        /// Items laid out in reading direction.
        Row => "row",
        /// Items laid out against reading direction.
        RowReverse => "row-reverse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn tokens_and_classes() {
        assert_eq!(Size::Xxl.token(), "2xl");
        assert_eq!(Inset::Md.modifier_class("pf-m-"), "pf-m-inset-md");
        assert_eq!(Direction::RowReverse.to_string(), "row-reverse");
        assert_eq!(Gap::ALL.len(), 7);
    }

    #[test]
    fn tokens_are_unique_per_type() {
        for (i, a) in Size::ALL.iter().enumerate() {
            for b in &Size::ALL[i + 1..] {
                assert_ne!(a.token(), b.token());
            }
        }
    }

    #[test]
    fn swap_replaces_old_class() {
        let mut classes: ClassList = "pf-v5-c-drawer pf-m-inline".parse().unwrap();
        assert!(swap_modifier(&mut classes, None, Some(&Inset::Sm), "pf-m-"));
        assert!(classes.contains("pf-m-inset-sm"));

        assert!(swap_modifier(&mut classes, Some(&Inset::Sm), Some(&Inset::Lg), "pf-m-"));
        assert!(!classes.contains("pf-m-inset-sm"));
        assert!(classes.contains("pf-m-inset-lg"));
        assert!(classes.contains("pf-m-inline"));

        assert!(!swap_modifier(&mut classes, Some(&Inset::Lg), Some(&Inset::Lg), "pf-m-"));
        assert!(swap_modifier::<Inset>(&mut classes, Some(&Inset::Lg), None, "pf-m-"));
        assert_eq!(classes.to_string(), "pf-v5-c-drawer pf-m-inline");
    }
}
