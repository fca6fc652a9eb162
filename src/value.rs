//! Values that distinguish "never set" from any set value.

use std::fmt;

/// A value of type `T` that starts out *undefined*.
///
/// `Value` wraps values that begin life unset and become set by assignment, without requiring a
/// sentinel in `T`'s domain. It is a thin wrapper around [`Option`], named for that use case.
///
/// # Examples
///
/// ```
/// # use rowmath::Value;
/// let mut scale: Value<f64> = Value::UNDEFINED;
/// assert!(scale.is_undefined());
/// assert_eq!(scale.get(), None);
///
/// scale.set(1.5);
/// assert!(scale.is_defined());
/// assert_eq!(scale.get(), Some(&1.5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value<T> {
    inner: Option<T>,
}

impl<T> Value<T> {
    /// The undefined value.
    pub const UNDEFINED: Self = Self { inner: None };

    /// Creates a defined `Value` holding `value`.
    pub fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Returns a reference to the contained value, or [`None`] if `self` is undefined.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Sets the contained value, defining `self`.
    pub fn set(&mut self, value: T) {
        self.inner = Some(value);
    }

    /// Returns whether a value has been assigned.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns whether no value has been assigned yet.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T> Default for Value<T> {
    /// Returns [`Value::UNDEFINED`].
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => value.fmt(f),
            None => f.write_str("<undefined>"),
        }
    }
}
