use std::{array, fmt};

use crate::{One, Vector, Zero};

mod ops;

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;

/// An `R`x`C` matrix with elements of type `T`, stored column by column.
///
/// The cell in row `row` and column `col` lives at linear index `col * R + row`. Buffer-backed
/// matrix views use the same order, so a [`Matrix`] and a view of the same dimensions agree on
/// which bytes hold which cell.
///
/// Cells are addressed with `(row, col)` tuples, in that order:
///
/// ```
/// # use strata_linalg::*;
/// let mut m = Mat2::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// m[(1, 0)] = 30;
/// assert_eq!(m.row(1), [30, 4]);
/// assert_eq!(m.into_columns(), [[1, 30], [2, 4]]);
/// ```
///
/// Indexing panics on out-of-range cells; [`Matrix::get`] returns [`None`] instead.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize> {
    columns: [[T; R]; C],
}

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix out of `C` column vectors (or arrays) of length `R`.
    pub fn from_columns<V: Into<Vector<T, R>>>(columns: [V; C]) -> Self {
        Self {
            columns: columns.map(|column| column.into().into_array()),
        }
    }

    /// Builds a matrix out of `R` row vectors (or arrays) of length `C`.
    ///
    /// This is usually the more readable way of writing out a matrix literal.
    pub fn from_rows<V: Into<Vector<T, C>>>(rows: [V; R]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_columns(rows).transpose()
    }

    /// Builds a matrix by calling `f(row, col)` for every cell.
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let m = Matrix::<_, 2, 3>::from_fn(|row, col| (row, col));
    /// assert_eq!(m[(1, 2)], (1, 2));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            columns: array::from_fn(|col| array::from_fn(|row| f(row, col))),
        }
    }

    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.columns[row][col])
    }

    /// Returns the cell at `(row, col)`, or [`None`] if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.columns.get(col)?.get(row)
    }

    /// Copies column `col` out of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.columns[col])
    }

    /// Copies row `row` out of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.columns[col][row])
    }

    /// Unwraps the column-major storage.
    #[inline]
    pub fn into_columns(self) -> [[T; R]; C] {
        self.columns
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ZERO: Self = Self {
        columns: [[T::ZERO; R]; C],
    };
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// Ones on the diagonal, zeroes elsewhere.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; N]; N];
        let mut diag = 0;
        while diag < N {
            columns[diag][diag] = T::ONE;
            diag += 1;
        }
        Self { columns }
    };
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Prints the matrix row by row, regardless of the storage order.
impl<T: Copy + fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|row| self.row(row).into_array()))
            .finish()
    }
}
