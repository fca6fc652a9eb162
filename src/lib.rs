//! A small linear algebra library for fixed-dimension geometry.
//!
//! # Motivation
//!
//! Plenty of code wants to push 2D and 3D points through a handful of transform matrices without
//! taking on a full numerics stack. This library covers exactly that: statically sized vectors and
//! matrices, tolerance-based comparison for floating-point results, and the small set of
//! operations 2D/3D geometry actually uses.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly simplified
//!   by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices and vectors. Transforms
//!   follow the row-vector convention: points multiply on the *left* of a matrix.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). The primary element type is [`f64`].
//! - Keep comparison of computed results tolerance-based and explicit. `==` stays exact;
//!   [`approx_eq`] and the [`approx`] module provide the tolerant comparisons, with [`EPSILON`]
//!   as the default tolerance.
//! - No SIMD, no projective transforms, no decompositions beyond the small inverses.

pub mod approx;
mod matrix;
mod traits;
mod value;
mod vector;

pub use approx::{approx_eq, approx_zero, ApproxEq, EPSILON};
pub use matrix::*;
pub use traits::*;
pub use value::*;
pub use vector::*;
