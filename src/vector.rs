use std::{array, fmt};

use crate::{
    approx::{approx_zero, ApproxEq},
    traits::{Angle, Number, One, Sqrt, Zero},
    Mat2, Matrix,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vector3d = Vec3<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// When multiplied with a [`Matrix`], a vector acts as a *row vector*: it multiplies on the left,
/// and `v * m` is the transformed vector. [`Vector::transform`] spells this out.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`] and [`vec3`] functions directly create vectors from provided
///   values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] (via the [`Zero`] trait) is a vector containing all-zeroes.
/// - For 2- and 3-dimensional vectors, `Vector::X`, `Vector::Y` and `Vector::Z` can be used to
///   obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For 2- and 3-dimensional vectors, elements can be accessed as fields `x`, `y`, or `z`, and
///   the builder-style `with_x`/`with_y`/`with_z` methods return a copy with one element
///   replaced.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice
///   or array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    /// A vector with each element initialized to [`T::ZERO`][Zero::ZERO].
    const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let a = vec2(1, 2);
    /// let b = vec2("1", "2");
    /// assert_eq!(a.zip(b), vec2((1, "1"), (2, "2")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often
    /// shorter and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(Vector3d::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the length of this [`Vector`].
    ///
    /// Alias for [`Vector::length`].
    pub fn magnitude(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Panics
    ///
    /// Panics if the length of `self` is approximately zero (within [`EPSILON`][crate::EPSILON]
    /// of it for [`f64`] elements), since no meaningful direction exists in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt + ApproxEq,
    {
        let length = self.length();
        assert!(
            !approx_zero(&length),
            "attempt to normalize a zero-length vector"
        );
        self / length
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// The `*` operator between two vectors computes the same product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the distance between the points described by `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let a = vec3(3.0, 4.0, 0.0);
    /// let b = vec3(6.0, 8.0, 0.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Reinterprets this vector as a matrix with a single row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let m = vec3(1, 2, 3).to_row_matrix();
    /// assert_eq!(m, Matrix::from_rows([[1, 2, 3]]));
    /// ```
    pub fn to_row_matrix(self) -> Matrix<T, 1, N> {
        Matrix::from_rows([self])
    }

    /// Reinterprets this vector as a matrix with a single column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let m = vec3(1, 2, 3).to_column_matrix();
    /// assert_eq!(m, Matrix::from_columns([[1, 2, 3]]));
    /// ```
    pub fn to_column_matrix(self) -> Matrix<T, N, 1> {
        Matrix::from_rows(self.into_array().map(|elem| [elem]))
    }

    /// Applies a transformation matrix to this vector.
    ///
    /// `self` is treated as a *row vector* and multiplied on the left of `mat`; this is the same
    /// computation as `self * mat`, or as converting to a row matrix via
    /// [`Vector::to_row_matrix`], multiplying the matrices, and converting back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let quarter_turn = Matrix::rotation_counterclockwise(FRAC_PI_2);
    /// assert_approx_eq!(vec2(1.0, 0.0).transform(quarter_turn), vec2(0.0, 1.0));
    /// ```
    pub fn transform(self, mat: Matrix<T, N, N>) -> Self
    where
        T: Number,
    {
        self * mat
    }
}

impl<T> Vector<T, 2> {
    /// Returns `self` with the X element replaced by `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec2(1, 2).with_x(9).with_y(8), vec2(9, 8));
    /// ```
    pub fn with_x(mut self, x: T) -> Self {
        self.0[0] = x;
        self
    }

    /// Returns `self` with the Y element replaced by `y`.
    pub fn with_y(mut self, y: T) -> Self {
        self.0[1] = y;
        self
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// use std::f64::consts::TAU;
    ///
    /// assert_approx_eq!(Vector2d::Y.rotate_clockwise(TAU / 4.0), Vector2d::X);
    /// assert_approx_eq!(Vector2d::Y.rotate_clockwise(TAU / 2.0), -Vector2d::Y);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Angle,
    {
        self * Mat2::rotation_clockwise(radians)
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// use std::f64::consts::TAU;
    ///
    /// assert_approx_eq!(Vector2d::X.rotate_counterclockwise(TAU / 4.0), Vector2d::Y);
    /// assert_approx_eq!(Vector2d::Y.rotate_counterclockwise(TAU / 4.0), -Vector2d::X);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Angle,
    {
        self * Mat2::rotation_counterclockwise(radians)
    }
}

impl<T> Vector<T, 3> {
    /// Returns `self` with the X element replaced by `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec3(1, 2, 3).with_x(9).with_z(7), vec3(9, 2, 7));
    /// ```
    pub fn with_x(mut self, x: T) -> Self {
        self.0[0] = x;
        self
    }

    /// Returns `self` with the Y element replaced by `y`.
    pub fn with_y(mut self, y: T) -> Self {
        self.0[1] = y;
        self
    }

    /// Returns `self` with the Z element replaced by `z`.
    pub fn with_z(mut self, z: T) -> Self {
        self.0[2] = z;
        self
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let x = Vector3d::X;
    /// let y = Vector3d::Y;
    /// let z = Vector3d::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{approx_eq, assert_approx_eq, Matrix2d};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vector3d::X.x, 1.0);
        assert_eq!(Vector3d::X[0], 1.0);
        assert_eq!(Vector3d::X[1], 0.0);
        assert_eq!(Vector3d::X[2], 0.0);
        assert_eq!(Vector3d::X.y, 0.0);
        assert_eq!(Vector3d::Y.y, 1.0);
        assert_eq!(Vector3d::Y.z, 0.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 1);

        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v.y, 1);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);
        v.y = 9;
        assert_eq!(v, vec2(777, 9));
    }

    #[test]
    fn with_elements() {
        assert_eq!(vec2(1, 2).with_x(9), vec2(9, 2));
        assert_eq!(vec2(1, 2).with_y(9), vec2(1, 9));
        assert_eq!(vec2(1, 2).with_x(9).with_y(8), vec2(9, 8));
        assert_eq!(vec3(1, 2, 3).with_x(9).with_y(8).with_z(7), vec3(9, 8, 7));
        assert_eq!(vec3(1, 2, 3).with_z(0), vec3(1, 2, 0));
    }

    #[test]
    fn constants() {
        assert_eq!(Vector2d::ZERO, vec2(0.0, 0.0));
        assert_eq!(Vector3d::ZERO, vec3(0.0, 0.0, 0.0));
        assert_eq!(Vector2d::X + Vector2d::Y, vec2(1.0, 1.0));
        assert_eq!(Vector3d::X + Vector3d::Y + Vector3d::Z, vec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn arithmetic() {
        let a = vec2(1, 2);
        let b = vec2(3, 4);
        assert_eq!(a + b, vec2(4, 6));
        assert_eq!(b - a, vec2(2, 2));
        assert_eq!(-a, vec2(-1, -2));

        let mut v = a;
        v += b;
        assert_eq!(v, vec2(4, 6));
        v -= b;
        assert_eq!(v, a);

        assert_eq!(a * 3, vec2(3, 6));
        assert_eq!(3 * a, a * 3);
        let mut v = a;
        v *= 10;
        assert_eq!(v, vec2(10, 20));

        // `*` between two vectors is their dot product.
        assert_eq!(vec2(1, 2) * vec2(3, 4), 11);

        let half = vec2(1.0, 3.0) / 2.0;
        assert_eq!(half, vec2(0.5, 1.5));
        let mut v = vec2(1.0, 3.0);
        v /= 2.0;
        assert_eq!(v, half);
    }

    #[test]
    #[should_panic(expected = "attempt to divide a vector by zero")]
    fn divide_by_zero() {
        let _ = vec2(1.0, 2.0) / 0.0;
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vector3d::Z), "(0, 0, 1)");
        assert_eq!(format!("{:?}", Vector3d::Z), "(0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(1.5, -2.0)), "(1.5, -2)");
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
        assert_approx_eq!(vec3(5.0, 3.0, -4.0).length(), 7.07106781);
        assert_approx_eq!(vec3(5.0, 3.0, -4.0).length2(), 50.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(vec2(0.0, 10.0).normalize(), vec2(0.0, 1.0));
        assert_eq!(vec3(0.0, 0.0, -2.0).normalize(), vec3(0.0, 0.0, -1.0));
        assert_approx_eq!(vec3(5.0, 3.0, -4.0).normalize().length(), 1.0);
        assert_approx_eq!(vec2(-7.5, 1.25).normalize().length(), 1.0);
    }

    #[test]
    #[should_panic(expected = "attempt to normalize a zero-length vector")]
    fn normalize_zero() {
        vec2(0.0, 0.0).normalize();
    }

    #[test]
    #[should_panic(expected = "attempt to normalize a zero-length vector")]
    fn normalize_near_zero() {
        vec3(1e-9, 0.0, -1e-9).normalize();
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(3.0, -2.0, 7.0).dot(vec3(0.0, 4.0, -1.0)), -15.0);

        assert_eq!(Vector2d::X.dot(Vector2d::X), 1.0);
        assert_eq!(Vector2d::Y.dot(Vector2d::Y), 1.0);
        assert_eq!(Vector2d::X.dot(Vector2d::Y), 0.0);
        assert_eq!(Vector2d::Y.dot(Vector2d::X), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vector3d::X.cross(Vector3d::Y), Vector3d::Z);
        assert_eq!(Vector3d::Y.cross(Vector3d::X), -Vector3d::Z);
        assert_eq!(Vector3d::Y.cross(Vector3d::Z), Vector3d::X);

        let a = vec3(1.0, 3.0, 4.0);
        let b = vec3(2.0, -5.0, 8.0);
        assert_eq!(a.cross(b), vec3(44.0, 0.0, -11.0));
        assert_eq!(b.cross(a), -vec3(44.0, 0.0, -11.0));
        assert_eq!(a.cross(a), Vector3d::ZERO);
    }

    #[test]
    fn distance() {
        let a = vec3(3.0, 4.0, 0.0);
        let b = vec3(6.0, 8.0, 0.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
        assert_eq!(vec2(-1.0, 3.0).distance(vec2(2.0, -1.0)), 5.0);
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vector2d::Y.rotate_clockwise(TAU / 4.0), Vector2d::X);
        assert_approx_eq!(Vector2d::Y.rotate_clockwise(TAU / 2.0), -Vector2d::Y);
        assert_approx_eq!(Vector2d::X.rotate_clockwise(TAU / 2.0), -Vector2d::X);
        assert_approx_eq!(Vector2d::X.rotate_counterclockwise(TAU / 4.0), Vector2d::Y);
    }

    #[test]
    fn row_and_column_matrices() {
        assert_eq!(vec2(1, 2).to_row_matrix(), Matrix::from_rows([[1, 2]]));
        assert_eq!(vec2(1, 2).to_column_matrix(), Matrix::from_rows([[1], [2]]));
        assert_eq!(
            vec3(1, 2, 3).to_row_matrix(),
            Matrix::from_rows([[1, 2, 3]])
        );
        assert_eq!(
            vec3(1, 2, 3).to_column_matrix(),
            Matrix::from_rows([[1], [2], [3]])
        );

        assert_eq!(Vec2::from(vec2(1, 2).to_row_matrix()), vec2(1, 2));
        assert_eq!(Vec2::from(vec2(1, 2).to_column_matrix()), vec2(1, 2));
        assert_eq!(Vec3::from(vec3(1, 2, 3).to_row_matrix()), vec3(1, 2, 3));
        assert_eq!(Vec3::from(vec3(1, 2, 3).to_column_matrix()), vec3(1, 2, 3));
    }

    #[test]
    fn transform() {
        let quarter_turn = Matrix2d::rotation_counterclockwise(TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 0.0).transform(quarter_turn), vec2(0.0, 1.0));
        assert_approx_eq!(vec2(0.0, 1.0).transform(quarter_turn), vec2(-1.0, 0.0));

        // Axis-aligned quarter turns are exact in integers.
        let rot_z = Matrix::from_rows([[0, 1], [-1, 0]]);
        assert_eq!(vec2(1, 1).transform(rot_z), vec2(-1, 1));
        let rot_x = Matrix::from_rows([[1, 0, 0], [0, 0, 1], [0, -1, 0]]);
        assert_eq!(vec3(1, 1, 1).transform(rot_x), vec3(1, -1, 1));

        let v = vec3(0.5, -2.0, 3.0);
        assert_eq!(v.transform(Matrix::IDENTITY), v);

        // Transforming is the same as row-matrix multiplication.
        let m = Matrix2d::from_rows([[-3.0, 0.0], [5.0, 0.5]]);
        let p = vec2(-7.0, 2.0);
        assert!(approx_eq(
            &p.transform(m),
            &Vec2::from(p.to_row_matrix() * m),
        ));
    }
}
