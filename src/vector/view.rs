//! Field-access views for small vectors.
//!
//! [`Vector`] stores its elements as an array, but 2- and 3-dimensional vectors read better with
//! `x`/`y`/`z` field syntax. The view structs below have the same layout as the corresponding
//! element arrays (`#[repr(C)]` with fields of a single type, and `Vector` is
//! `#[repr(transparent)]`), which is what makes the reference transmutes in the `Deref` impls
//! sound.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// View struct granting `x`/`y` field access to 2-dimensional vectors.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// View struct granting `x`/`y`/`z` field access to 3-dimensional vectors.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for Vector<T, 2> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<T, 2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 3> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<T, 3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
