use std::ops::{Index, IndexMut};

use crate::Matrix;

/// `matrix[(row, col)]`
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.columns[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.columns[col][row]
    }
}

// Allows comparing matrices with different (but comparable) element types.
impl<T: PartialEq<U>, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.columns == other.columns
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}
