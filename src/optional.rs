//! # Optional Module
//!
//! `Optional<T>` represents either the presence (`Some`) or the absence (`None`)
//! of a value, with a small set of combinators so call sites never have to
//! branch on the variant by hand.
//!
//! ## Combinators
//!
//! - **Transform**: [`Optional::map`], [`Optional::flat_map`], [`Optional::filter`]
//! - **Extract**: [`Optional::fold`], [`Optional::get_or_else_value`],
//!   [`Optional::get_or_else_compute`], [`Optional::or_null`]
//! - **Query**: [`Optional::exists`], [`Optional::is_some`], [`Optional::is_none`]
//! - **Effect**: [`Optional::for_each`]
//! - **Fallback**: [`Optional::or_else`]
//!
//! Every operation is total. Absence is an ordinary value, never an error.
//!
//! ## Example
//!
//! ```rust
//! use eel_option::Optional;
//!
//! let doubled = Optional::from_nullable(Some(5)).map(|x| x * 2).get_or_else_value(0);
//! assert_eq!(doubled, 10);
//!
//! let missing = Optional::<i32>::from_nullable(None).map(|x| x * 2).get_or_else_value(0);
//! assert_eq!(missing, 0);
//! ```

use crate::error::OptionalError;
use std::fmt;

/// An optional value: exactly one of `None` or `Some(value)`.
///
/// Instances are never mutated in place by this API; every combinator
/// consumes `self` and hands back a new value. Use [`Optional::as_ref`] to run
/// combinators against a borrowed payload instead.
#[must_use = "an Optional that is never inspected hides whether a value was present"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    None,
    /// Exactly one value.
    Some(T),
}

impl<T> Optional<T> {
    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Optional::None
    }

    /// Builds an `Optional` from a nullable source, collapsing `None` to
    /// [`Optional::None`] and wrapping anything else in [`Optional::Some`].
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Borrowing view of the payload.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Applies `f` to the payload if there is one. `f` runs at most once and
    /// never runs on `None`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Keeps the payload only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(value) if predicate(&value) => Optional::Some(value),
            _ => Optional::None,
        }
    }

    /// Collapses the container into a `U`.
    ///
    /// `default` is an already-computed value, so it is evaluated by the caller
    /// whether or not it ends up being used. See [`Optional::fold_with`] for the
    /// deferred form.
    #[inline]
    pub fn fold<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => default,
        }
    }

    /// Like [`Optional::fold`], but `default` only runs when the value is absent.
    #[inline]
    pub fn fold_with<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => default(),
        }
    }

    /// Escape hatch to APIs that speak `std::option::Option` directly.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Runs `f` once with the payload, or does nothing when absent.
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Some(value) = self {
            f(value);
        }
    }

    /// `predicate(value)` when present. Absence never satisfies a predicate.
    #[inline]
    pub fn exists<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Optional::Some(value) => predicate(value),
            Optional::None => false,
        }
    }

    /// Returns the payload, or `other` (already evaluated) when absent.
    #[inline]
    pub fn get_or_else_value(self, other: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => other,
        }
    }

    /// Returns the payload, or calls `other` when absent. `other` is never
    /// called for `Some`.
    #[inline]
    pub fn get_or_else_compute<F>(self, other: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => other(),
        }
    }

    /// `self` if present, otherwise `other` untouched.
    #[inline]
    pub fn or_else(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => other,
        }
    }

    /// Strict extraction: absence becomes [`OptionalError::Absent`], tagged
    /// with `what` so the caller can tell which value was missing.
    pub fn require(self, what: &str) -> Result<T, OptionalError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(OptionalError::Absent {
                what: what.to_string(),
            }),
        }
    }

    /// Iterates over zero or one borrowed payloads.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().or_null().into_iter()
    }
}

// Written by hand: a derive would demand `T: Default`.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.or_null().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => write!(f, "Some({})", value),
            Optional::None => write!(f, "None"),
        }
    }
}
