//! Per-component access to heap-resident values.
//!
//! Buffer-backed views copy data in and out of ordinary values through these traits. They only
//! require reading or writing a single component at a time, and are implemented for the
//! [`strata_linalg`] types as well as plain arrays.

use strata_linalg::{Matrix, Quat, Vector};

/// Values made up of a fixed number of components, addressed by index.
pub trait Components {
    fn component_count(&self) -> usize;
}

/// Values whose components can be read one at a time.
pub trait ComponentSource<T>: Components {
    /// Returns the component at `index`.
    ///
    /// Callers guarantee that `index < self.component_count()`.
    fn component(&self, index: usize) -> T;
}

/// Values whose components can be written one at a time.
pub trait ComponentSink<T>: Components {
    /// Replaces the component at `index`.
    ///
    /// Callers guarantee that `index < self.component_count()`.
    fn set_component(&mut self, index: usize, value: T);
}

/// Square matrices with `dimension() * dimension()` cells, addressed by row and column.
pub trait Cells {
    fn dimension(&self) -> usize;
}

/// Square matrices whose cells can be read one at a time.
pub trait CellSource<T>: Cells {
    fn cell(&self, row: usize, col: usize) -> T;
}

/// Square matrices whose cells can be written one at a time.
pub trait CellSink<T>: Cells {
    fn set_cell(&mut self, row: usize, col: usize, value: T);
}

impl<T, const N: usize> Components for Vector<T, N> {
    fn component_count(&self) -> usize {
        N
    }
}

impl<T: Copy, const N: usize> ComponentSource<T> for Vector<T, N> {
    fn component(&self, index: usize) -> T {
        self[index]
    }
}

impl<T, const N: usize> ComponentSink<T> for Vector<T, N> {
    fn set_component(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T, const N: usize> Components for [T; N] {
    fn component_count(&self) -> usize {
        N
    }
}

impl<T: Copy, const N: usize> ComponentSource<T> for [T; N] {
    fn component(&self, index: usize) -> T {
        self[index]
    }
}

impl<T, const N: usize> ComponentSink<T> for [T; N] {
    fn set_component(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

// Quaternions are ordered `x, y, z, w`.
impl<T> Components for Quat<T> {
    fn component_count(&self) -> usize {
        4
    }
}

impl<T: Copy> ComponentSource<T> for Quat<T> {
    fn component(&self, index: usize) -> T {
        Quat::component(self, index)
    }
}

impl<T: Copy> ComponentSink<T> for Quat<T> {
    fn set_component(&mut self, index: usize, value: T) {
        Quat::set_component(self, index, value);
    }
}

impl<T, const N: usize> Cells for Matrix<T, N, N> {
    fn dimension(&self) -> usize {
        N
    }
}

impl<T: Copy, const N: usize> CellSource<T> for Matrix<T, N, N> {
    fn cell(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T, const N: usize> CellSink<T> for Matrix<T, N, N> {
    fn set_cell(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }
}

#[cfg(test)]
mod tests {
    use strata_linalg::{vec3, Mat2};

    use super::*;

    #[test]
    fn vectors() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(Components::component_count(&v), 3);
        assert_eq!(ComponentSource::component(&v, 2), 3);
        ComponentSink::set_component(&mut v, 0, 9);
        assert_eq!(v, vec3(9, 2, 3));
    }

    #[test]
    fn quats() {
        let mut q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(ComponentSource::<f64>::component(&q, 3), 4.0);
        ComponentSink::set_component(&mut q, 1, -1.0);
        assert_eq!(q.y(), -1.0);
    }

    #[test]
    fn matrices() {
        let mut m = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.dimension(), 2);
        assert_eq!(m.cell(0, 1), 2);
        m.set_cell(1, 0, 30);
        assert_eq!(m.row(1), [30, 4]);
    }
}
