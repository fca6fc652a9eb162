use std::{array, fmt};

use crate::{
    approx::{approx_eq, approx_zero, ApproxEq},
    traits::{Angle, Number, One, Zero},
    vec2, vec3, Vec2, Vec3, Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f64`] elements.
pub type Matrix2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f64`] elements.
pub type Matrix3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f64`] elements.
pub type Matrix4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_row_major`] fills a matrix from a flat slice of elements in row-major order.
/// - [`Matrix::splat`] creates a matrix by copying the given value into each element.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] allow creating 2D
///   rotation matrices from a rotation angle.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] (via the [`Zero`] trait) is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its main diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use rowmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use rowmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// Shapes with zero rows or columns are valid. They hold no elements, and every operation on them
/// is vacuous.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Zero for Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its main diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with the identity matrix returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(Matrix2d::IDENTITY, Matrix::from_rows([
    ///     [1.0, 0.0],
    ///     [0.0, 1.0],
    /// ]));
    ///
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v * Matrix::IDENTITY, v);
    /// ```
    pub const IDENTITY: Self = {
        // Overwriting an element requires the old value to have no drop glue, hence the `Copy`
        // bound.
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// The closure is invoked in row-major order. This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a flat slice of elements in row-major order.
    ///
    /// The slice does not have to contain exactly `R * C` elements: if it is shorter, the
    /// remaining elements are initialized with zero, and if it is longer, the extra elements are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 0],
    /// ]));
    /// ```
    pub fn from_row_major(values: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        let mut iter = values.iter().copied();
        Self::from_fn(|_, _| iter.next().unwrap_or(T::ZERO))
    }

    /// Creates a matrix with every element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::<i32, 2, 3>::splat(1);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 1, 1],
    ///     [1, 1, 1],
    /// ]));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut rows = self.0.map(|row| row.into_iter());
        // Each input row is drained front to back, one element per output row.
        Matrix::from_fn(|_, col| rows[col].next().unwrap())
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the number of rows `R`.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns `C`.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Returns the total number of elements (`R * C`).
    #[inline]
    pub const fn len(&self) -> usize {
        R * C
    }

    /// Returns whether this matrix holds no elements (one of its dimensions is 0).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether this matrix has as many rows as columns.
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Returns whether all elements outside the main diagonal are approximately zero.
    ///
    /// Non-square matrices are never considered diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert!(Matrix3d::IDENTITY.is_diagonal());
    /// assert!(Matrix::from_diagonal([1.0, 2.0, 3.0]).is_diagonal());
    /// assert!(!Matrix2d::from_rows([[1.0, 0.5], [0.0, 1.0]]).is_diagonal());
    /// ```
    pub fn is_diagonal(&self) -> bool
    where
        T: Zero + ApproxEq,
    {
        self.is_square()
            && (0..R).all(|row| (0..C).all(|col| row == col || approx_zero(&self.0[row][col])))
    }

    /// Returns whether `self` is approximately the identity matrix.
    ///
    /// Non-square matrices are never considered to be the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert!(Matrix2d::IDENTITY.is_identity());
    /// assert!(!Matrix2d::ZERO.is_identity());
    /// ```
    pub fn is_identity(&self) -> bool
    where
        T: Zero + One + ApproxEq,
    {
        self.is_square()
            && (0..R).all(|row| {
                (0..C).all(|col| {
                    if row == col {
                        approx_eq(&self.0[row][col], &T::ONE)
                    } else {
                        approx_zero(&self.0[row][col])
                    }
                })
            })
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// *Note*: This method is restricted to square matrices due to limitations in Rust's const
    /// generics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To create a non-square matrix from its diagonal, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Matrix3d::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

// Determinants are only provided up to 3x3.
impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is
    /// approximately zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(Matrix2d::IDENTITY.invert(), Matrix2d::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self
    where
        T: ApproxEq,
    {
        let det = self.determinant();
        assert!(
            !approx_zero(&det),
            "attempt to invert a non-invertible matrix"
        );

        let [[a, b], [c, d]] = self.0;
        Matrix::from_rows([[d, -b], [-c, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Angle,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// Multiplying a row vector with the resulting matrix rotates it by `radians`
    /// counterclockwise, assuming that the X axis points right and the Y axis points up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let rot = Matrix2d::rotation_counterclockwise(FRAC_PI_2);
    /// assert_approx_eq!(Vector2d::X * rot, Vector2d::Y);
    /// ```
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Angle,
    {
        Self::from_rows([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows stay on a single line each, even when `#` pretty-prints the outer list.
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T> From<Vec2<T>> for Matrix<T, 1, 2> {
    /// Converts a 2D vector into the matrix holding its elements as the only row.
    fn from(vec: Vec2<T>) -> Self {
        vec.to_row_matrix()
    }
}

impl<T> From<Vec2<T>> for Matrix<T, 2, 1> {
    /// Converts a 2D vector into the matrix holding its elements as the only column.
    fn from(vec: Vec2<T>) -> Self {
        vec.to_column_matrix()
    }
}

impl<T> From<Vec3<T>> for Matrix<T, 1, 3> {
    /// Converts a 3D vector into the matrix holding its elements as the only row.
    fn from(vec: Vec3<T>) -> Self {
        vec.to_row_matrix()
    }
}

impl<T> From<Vec3<T>> for Matrix<T, 3, 1> {
    /// Converts a 3D vector into the matrix holding its elements as the only column.
    fn from(vec: Vec3<T>) -> Self {
        vec.to_column_matrix()
    }
}

impl<T> From<Matrix<T, 1, 2>> for Vec2<T> {
    /// Converts a single-row matrix into the vector of its elements.
    fn from(mat: Matrix<T, 1, 2>) -> Self {
        let [[x, y]] = mat.0;
        vec2(x, y)
    }
}

impl<T> From<Matrix<T, 2, 1>> for Vec2<T> {
    /// Converts a single-column matrix into the vector of its elements.
    fn from(mat: Matrix<T, 2, 1>) -> Self {
        let [[x], [y]] = mat.0;
        vec2(x, y)
    }
}

impl<T> From<Matrix<T, 1, 3>> for Vec3<T> {
    /// Converts a single-row matrix into the vector of its elements.
    fn from(mat: Matrix<T, 1, 3>) -> Self {
        let [[x, y, z]] = mat.0;
        vec3(x, y, z)
    }
}

impl<T> From<Matrix<T, 3, 1>> for Vec3<T> {
    /// Converts a single-column matrix into the vector of its elements.
    fn from(mat: Matrix<T, 3, 1>) -> Self {
        let [[x], [y], [z]] = mat.0;
        vec3(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use crate::{assert_approx_eq, Vector2d};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(Matrix::from_rows([[1, 2, 3], [4, 5, 6]]), [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn from_fn() {
        let mat = Matrix::from_fn(|row, col| row * 10 + col);
        assert_eq!(mat, Matrix::from_rows([[0, 1, 2], [10, 11, 12]]));
    }

    #[test]
    fn splat() {
        assert_eq!(Matrix::splat(7), Matrix::from_rows([[7, 7], [7, 7], [7, 7]]));
    }

    #[test]
    fn from_row_major() {
        let exact = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3, 4]);
        assert_eq!(exact, [[1, 2], [3, 4]]);

        // Shorter slices are padded with zeroes, longer ones are truncated.
        let short = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3]);
        assert_eq!(short, [[1, 2], [3, 0]]);
        let long = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(long, [[1, 2], [3, 4]]);
        let none = Matrix::<i32, 2, 2>::from_row_major(&[]);
        assert_eq!(none, Matrix::ZERO);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Matrix2d::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Matrix2d::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Matrix3d::IDENTITY.trace(), 3.0);
        assert_eq!(Matrix4d::IDENTITY.trace(), 4.0);
        assert_eq!(Matrix::<i32, 2, 2>::default(), Matrix::ZERO);

        // The identity of a non-square shape has ones down its main diagonal.
        assert_eq!(Matrix::<i32, 2, 3>::IDENTITY, [[1, 0, 0], [0, 1, 0]]);
        assert_eq!(Matrix::<i32, 3, 2>::IDENTITY, [[1, 0], [0, 1], [0, 0]]);
    }

    #[test]
    fn shape() {
        let mat = Matrix::<i32, 2, 3>::ZERO;
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.columns(), 3);
        assert_eq!(mat.len(), 6);
        assert!(!mat.is_empty());
        assert!(!mat.is_square());
        assert!(Matrix4d::ZERO.is_square());

        let empty = Matrix::<i32, 0, 3>::ZERO;
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.transpose(), Matrix::<i32, 3, 0>::ZERO);
    }

    #[test]
    fn transpose() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 1,  2,  3],
            [ 4,  5,  6],
            [ 7,  8,  9],
            [10, 11, 12],
        ]);
        #[rustfmt::skip]
        assert_eq!(mat.transpose(), Matrix::from_rows([
            [1, 4, 7, 10],
            [2, 5, 8, 11],
            [3, 6, 9, 12],
        ]));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn get() {
        let mut mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.get(0, 0), Some(&0));
        assert_eq!(mat.get(1, 2), Some(&5));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 3), None);

        if let Some(elem) = mat.get_mut(1, 0) {
            *elem = 999;
        }
        assert_eq!(mat[(1, 0)], 999);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        let _ = mat[(2, 0)];
    }

    #[test]
    fn mat_mat_mul() {
        let a = Matrix2d::from_rows([[-3.0, 0.0], [5.0, 0.5]]);
        let b = Matrix2d::from_rows([[-7.0, 2.0], [4.0, 6.0]]);
        assert_eq!(a * b, [[21.0, -6.0], [-33.0, 13.0]]);

        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[2, 3], [4, 5]]);
        assert_eq!(a * b, [[10, 13], [22, 29]]);

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, -5,  3],
            [0, -2,  6],
            [7,  2, -4],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [-8, 6,  1],
            [ 7, 0, -3],
            [ 2, 4,  5],
        ]);
        #[rustfmt::skip]
        assert_eq!(a * b, [
            [-37, 18,  31],
            [ -2, 24,  36],
            [-50, 26, -19],
        ]);

        assert_eq!(a * Matrix::IDENTITY, a);
        assert_eq!(Matrix::IDENTITY * a, a);

        // Non-square shapes multiply as long as the inner dimensions agree.
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn vec_mat_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);

        // A unit vector picks out the corresponding row.
        assert_eq!(vec2(0, 1) * mat, [2, 3]);
    }

    #[test]
    fn arithmetic() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, [[11, 22], [33, 44]]);
        assert_eq!(b - a, [[9, 18], [27, 36]]);
        assert_eq!(-a, [[-1, -2], [-3, -4]]);

        let mut m = a;
        m += b;
        assert_eq!(m, [[11, 22], [33, 44]]);
        m -= b;
        assert_eq!(m, a);

        assert_eq!(a * 2, [[2, 4], [6, 8]]);
        assert_eq!(2 * a, a * 2);
        let mut m = a;
        m *= 10;
        assert_eq!(m, [[10, 20], [30, 40]]);

        let half = Matrix2d::from_rows([[1.0, 2.0], [3.0, 4.0]]) / 2.0;
        assert_eq!(half, [[0.5, 1.0], [1.5, 2.0]]);
        let mut m = Matrix2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        m /= 2.0;
        assert_eq!(m, half);
    }

    #[test]
    #[should_panic(expected = "attempt to divide a matrix by zero")]
    fn divide_by_zero() {
        let _ = Matrix2d::IDENTITY / 0.0;
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix2d::ZERO.determinant(), 0.0);
        assert_eq!(Matrix3d::ZERO.determinant(), 0.0);
        assert_eq!(Matrix2d::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix3d::IDENTITY.determinant(), 1.0);

        assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).determinant(), -2);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
    }

    #[test]
    fn invert() {
        let mat = Matrix2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let inv = mat.invert();
        assert_eq!(inv, [[-2.0, 1.0], [1.5, -0.5]]);
        assert_approx_eq!(mat * inv, Matrix2d::IDENTITY);
        assert_approx_eq!(inv * mat, Matrix2d::IDENTITY);

        assert_eq!(Matrix2d::IDENTITY.invert(), Matrix2d::IDENTITY);
    }

    #[test]
    #[should_panic(expected = "attempt to invert a non-invertible matrix")]
    fn invert_singular() {
        Matrix2d::from_rows([[2.0, 4.0], [1.0, 2.0]]).invert();
    }

    #[test]
    #[should_panic(expected = "attempt to invert a non-invertible matrix")]
    fn invert_near_singular() {
        // The determinant is 1e-9, well within EPSILON of zero.
        Matrix2d::from_rows([[1.0, 2.0], [2.0, 4.0 + 1e-9]]).invert();
    }

    #[test]
    fn rotation() {
        let cw = Matrix2d::rotation_clockwise(0.0);
        let ccw = Matrix2d::rotation_counterclockwise(0.0);
        assert_eq!(cw, Matrix2d::IDENTITY);
        assert_eq!(cw, ccw);

        let ccw = Matrix2d::rotation_counterclockwise(TAU / 4.0);
        assert_approx_eq!(Vector2d::X * ccw, Vector2d::Y);
        assert_approx_eq!(ccw.determinant(), 1.0);
        // Rotating back is the inverse.
        assert_approx_eq!(Matrix2d::rotation_clockwise(TAU / 4.0), ccw.invert());

        let cw = Matrix2d::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert());
    }

    #[test]
    fn predicates() {
        assert!(Matrix2d::IDENTITY.is_identity());
        assert!(Matrix3d::IDENTITY.is_identity());
        assert!(Matrix3d::IDENTITY.is_diagonal());
        assert!(Matrix2d::ZERO.is_diagonal());
        assert!(!Matrix2d::ZERO.is_identity());

        // Tolerance-based: tiny deviations still count.
        let near = Matrix2d::from_rows([[1.0 + 1e-9, 1e-9], [-1e-9, 1.0 - 1e-9]]);
        assert!(near.is_identity());

        let off = Matrix2d::from_rows([[1.0, 0.1], [0.0, 1.0]]);
        assert!(!off.is_diagonal());
        assert!(!off.is_identity());

        let diag = Matrix::from_diagonal([2.0, 3.0]);
        assert!(diag.is_diagonal());
        assert!(!diag.is_identity());

        // Non-square shapes are never diagonal or the identity.
        let rect = Matrix::<f64, 2, 3>::IDENTITY;
        assert!(!rect.is_diagonal());
        assert!(!rect.is_identity());
    }

    #[test]
    fn vector_conversions() {
        assert_eq!(Vec3::from(Matrix::from_rows([[1, 2, 3]])), vec3(1, 2, 3));
        assert_eq!(Vec3::from(Matrix::from_rows([[1], [2], [3]])), vec3(1, 2, 3));
        assert_eq!(Vec2::from(Matrix::from_rows([[4, 5]])), vec2(4, 5));
        assert_eq!(Vec2::from(Matrix::from_rows([[4], [5]])), vec2(4, 5));

        let mat: Matrix<i32, 1, 2> = vec2(1, 2).into();
        assert_eq!(mat, [[1, 2]]);
        let mat: Matrix<i32, 3, 1> = vec3(1, 2, 3).into();
        assert_eq!(mat, [[1], [2], [3]]);
    }
}
