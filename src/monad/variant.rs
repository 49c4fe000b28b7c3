//! Variant tags shared by [`Maybe`](super::Maybe) and [`Outcome`](super::Outcome).
//!
//! Both monads are two-variant tagged containers. The tag is fixed when the
//! value is constructed and is what mapped patterns dispatch on.

use std::fmt;

/// The two monad families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Present or absent (`Some` / `None`).
    Option,
    /// Success or failure (`Ok` / `Err`).
    Result,
}

/// The concrete variant of a monad value.
///
/// # Examples
///
/// ```rust
/// use monadic_match::monad::{Family, Variant};
///
/// assert!(Variant::Some.is_truthy());
/// assert!(!Variant::Err.is_truthy());
/// assert_eq!(Variant::None.family(), Family::Option);
/// assert_eq!(Variant::Ok.name(), "Ok");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// A present value.
    Some,
    /// An absent value.
    None,
    /// A successful value.
    Ok,
    /// A failed value carrying an error payload.
    Err,
}

impl Variant {
    /// Returns the variant name as written in patterns.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Some => "Some",
            Self::None => "None",
            Self::Ok => "Ok",
            Self::Err => "Err",
        }
    }

    /// Returns the family this variant belongs to.
    #[inline]
    pub const fn family(self) -> Family {
        match self {
            Self::Some | Self::None => Family::Option,
            Self::Ok | Self::Err => Family::Result,
        }
    }

    /// Returns the boolean tag: `true` for `Some`/`Ok`, `false` for `None`/`Err`.
    #[inline]
    pub const fn is_truthy(self) -> bool {
        matches!(self, Self::Some | Self::Ok)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A two-variant tagged container.
///
/// Implemented by [`Maybe`](super::Maybe) and [`Outcome`](super::Outcome).
/// The matching engine only ever reads the tag through this trait before it
/// touches a payload.
pub trait Tagged {
    /// Returns the concrete variant of this value.
    fn variant(&self) -> Variant;

    /// Returns the boolean tag of this value.
    #[inline]
    fn tag(&self) -> bool {
        self.variant().is_truthy()
    }

    /// Returns the family of this value.
    #[inline]
    fn family(&self) -> Family {
        self.variant().family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::Some, true, Family::Option)]
    #[case(Variant::None, false, Family::Option)]
    #[case(Variant::Ok, true, Family::Result)]
    #[case(Variant::Err, false, Family::Result)]
    fn variant_tag_and_family(
        #[case] variant: Variant,
        #[case] truthy: bool,
        #[case] family: Family,
    ) {
        assert_eq!(variant.is_truthy(), truthy);
        assert_eq!(variant.family(), family);
        assert_eq!(variant.to_string(), variant.name());
    }
}
