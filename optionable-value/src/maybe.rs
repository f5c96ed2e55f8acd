use crate::error::{Error, Result};

pub type Nullable<T> = Maybe<T>;

/// Either a value or the deliberate absence of one.
///
/// Presence does not depend on the value itself: `Maybe::some(0)` and
/// `Maybe::some(String::new())` are both present.
/// ```
/// # use optionable_value::*;
/// let value = Maybe::some(1);
/// assert_eq!(value.map(|n| n + 1).get_or(0), 2);
///
/// let value = Maybe::<u32>::none();
/// assert_eq!(value.get(), Err(Error::Empty));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    pub const fn none() -> Self {
        Self::Absent
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Take the value out of the `Maybe`.
    ///
    /// An absent value is an [`Error::Empty`] rather than a panic,
    /// so the caller decides what absence means.
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(Error::Empty),
        }
    }

    pub fn get_ref(&self) -> Result<&T> {
        self.as_ref().get()
    }

    pub fn get_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Borrow the value as a nullable reference.
    /// This is the inverse of [`Maybe::from_nullable`].
    pub fn to_nullable(&self) -> Option<&T> {
        self.as_ref().into_option()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Apply `f` to a present value.
    /// `f` is never called if the value is absent.
    pub fn map<F, U>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T: Clone> Maybe<T> {
    pub fn from_nullable(value: Option<&T>) -> Self {
        value.cloned().into()
    }
}

// No `T: Default` bound
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Self::Present(val),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
