use std::{array, fmt};

use crate::{Number, One, Quat, Vec2, Vec3, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Rows are stored as [`Vector`]s, so [`Matrix::row`] is free while [`Matrix::col`] gathers
/// elements. Vectors are treated as *row vectors*: they multiply a matrix from the left
/// (`v * m`), and the transform factories for 4x4 matrices keep the translation in the last row.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0, and [`Matrix::identity`] has 1 on
///   its main diagonal and 0 everywhere else.
/// - 4x4 transforms are created with [`Matrix::translation`], [`Matrix::scale`],
///   [`Matrix::rotation`] and [`Matrix::simple_view_proj`].
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based. Indexing with a single
/// `usize` yields a whole row.
///
/// ```
/// # use orrery_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[0], vec2(4, 1));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use orrery_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, C>; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, C>::ZERO; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
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
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
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
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
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
    /// # use orrery_linalg::*;
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
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    #[inline]
    pub fn row(&self, index: usize) -> &Vector<T, C> {
        &self.0[index]
    }

    /// Returns a mutable reference to row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> &mut Vector<T, C> {
        &mut self.0[index]
    }

    /// Returns a copy of column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.col(1), vec2(1, 4));
    /// ```
    pub fn col(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    #[inline]
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    #[inline]
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0
    }

    /// Returns all elements in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.as_flat(), &[0, 1, 2, 3]);
    /// ```
    pub fn as_flat(&self) -> &[T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.0)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with their [`Default`] value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Default + Copy,
    {
        Matrix::from_fn(|row, col| self.get(row, col).copied().unwrap_or_default())
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its main diagonal and 0 everywhere else. Non-square matrices
    /// are allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(Mat2x3::<i32>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
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
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

// Determinant limited to 3x3 for now.
impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0.map(Vector::into_array);
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0.map(Vector::into_array);
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a translation by `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let t = Mat4::translation(vec3(1, 2, 3));
    /// assert_eq!(t.transform_point(vec3(10, 10, 10)), vec3(11, 12, 13));
    /// assert_eq!(t.transform_vector(vec3(10, 10, 10)), vec3(10, 10, 10));
    /// ```
    pub fn translation(pos: Vec3<T>) -> Self {
        let mut t = Self::identity();
        t.row_mut(3).fill().put_all(pos);
        t
    }

    /// Creates a non-uniform scale.
    pub fn scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::ONE))
    }

    /// Creates a rotation matrix from a unit quaternion.
    ///
    /// For row vectors `p`, `p * Mat4::rotation(q)` rotates `p` the same way
    /// [`Quat::rotate_vector`] does.
    pub fn rotation(q: Quat<T>) -> Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let one = T::ONE;
        let zero = T::ZERO;
        let two = one + one;

        #[rustfmt::skip]
        let rotation = Self::from_rows([
            [one - two * (y * y + z * z), two * (x * y + z * w),       two * (x * z - y * w),       zero],
            [two * (x * y - z * w),       one - two * (x * x + z * z), two * (y * z + x * w),       zero],
            [two * (x * z + y * w),       two * (y * z - x * w),       one - two * (x * x + y * y), zero],
            [zero,                        zero,                        zero,                        one ],
        ]);
        rotation
    }

    /// Creates a projection that maps a screen of size `screen` (centered at the origin) to
    /// normalized device coordinates.
    pub fn simple_view_proj(screen: Vec2<T>) -> Self {
        let two = T::ONE + T::ONE;
        let mut proj = Self::identity();
        proj[(0, 0)] = two / screen.x();
        proj[(1, 1)] = two / screen.y();
        proj
    }

    /// Transforms the point `p`, including the translation part of the matrix.
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        (p.extend(T::ONE) * *self).truncate()
    }

    /// Transforms the direction `v`, ignoring the translation part of the matrix.
    pub fn transform_vector(&self, v: Vec3<T>) -> Vec3<T> {
        (v.extend(T::ZERO) * *self).truncate()
    }
}

impl<T: Number> Quat<T> {
    /// Converts this quaternion to a rotation matrix. See [`Matrix::rotation`].
    pub fn to_matrix(self) -> Mat4<T> {
        Matrix::rotation(self)
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

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const C: usize>(&'a Vector<T, C>);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
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

/// Writes one row per line, with elements separated by single spaces.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, vec4, Radians, UnitVec, Vec3f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn rows_and_columns() {
        #[rustfmt::skip]
        let mut mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(*mat.row(1), vec3(4, 5, 6));
        assert_eq!(mat.col(2), vec2(3, 6));
        assert_eq!(mat.rows().len(), 2);
        mat.row_mut(0).set_y(20);
        assert_eq!(mat[(0, 1)], 20);
        assert_eq!(mat.get(1, 3), None);
        assert_eq!(mat.into_rows()[0], vec3(1, 20, 3));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn identity() {
        assert_eq!(Mat3f::identity().trace(), 3.0);
        assert_eq!(Mat3x2::<i32>::identity().transpose(), Mat2x3::<i32>::identity());
        assert_eq!(Mat2f::ZERO, Mat2f::default());
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

        assert_eq!(mat.to_string(), "0 1\n2 3");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);
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
    fn flat_layout() {
        let mat = Mat2x3::from_rows([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(mat.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&mat);
        assert_eq!(bytes.len(), 6 * 4);
    }

    #[test]
    fn transforms() {
        let s = Mat4::scale(vec3(2, 3, 4));
        assert_eq!(s.transform_point(vec3(1, 1, 1)), vec3(2, 3, 4));
        assert_eq!(s.diagonal(), vec4(2, 3, 4, 1));

        let t = Mat4::translation(vec3(5, 6, 7));
        assert_eq!(*t.row(3), vec4(5, 6, 7, 1));
        assert_eq!((s * t).transform_point(vec3(1, 1, 1)), vec3(7, 9, 11));

        let proj = Mat4f::simple_view_proj(vec2(800.0, 600.0));
        assert_eq!(proj.transform_point(vec3(400.0, -300.0, 0.5)), vec3(1.0, -1.0, 0.5));
    }

    #[test]
    fn rotation() {
        let q = Quat::from_axis_angle(UnitVec::up(), Radians::new(FRAC_PI_2));
        let m = q.to_matrix();
        assert_abs_diff_eq!(m.transform_vector(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(
            m.transform_point(vec3(1.0, 2.0, 3.0)),
            q.rotate_vector(vec3(1.0, 2.0, 3.0)),
            epsilon = 1e-6
        );
        assert_eq!(Mat4f::rotation(Quat::IDENTITY), Mat4f::identity());
        let upper = Mat3::from_fn(|row, col| m[(row, col)]);
        assert_abs_diff_eq!(upper.determinant(), 1.0, epsilon = 1e-6);
    }
}
