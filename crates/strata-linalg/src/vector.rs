use std::{array, fmt};

use crate::Zero;

mod ops;

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

/// A column vector of `N` elements of type `T`.
///
/// Small vectors are most easily written with [`vec2`], [`vec3`] and [`vec4`]; any length can be
/// converted from an array, filled with [`Vector::splat`] or computed per index with
/// [`Vector::from_fn`].
///
/// Elements are read and written with `v[i]`. Comparisons against arrays work directly:
///
/// ```
/// # use strata_linalg::*;
/// let mut v = Vector::from([1, 2, 3]);
/// v[2] = 30;
/// assert_eq!(v, [1, 2, 30]);
/// ```
///
/// The layout is exactly that of `[T; N]`, so slices of vectors can be reinterpreted as bytes
/// through [`bytemuck`] when `T` is [`bytemuck::Pod`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    elems: [T; N],
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    pub const ZERO: Self = Self {
        elems: [T::ZERO; N],
    };
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self { elems: [value; N] }
    }

    /// Returns a vector whose element `i` is `f(i)`.
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(Vector::from_fn(|i| i * i), vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            elems: array::from_fn(f),
        }
    }

    /// Converts every element with `f`.
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector {
            elems: self.elems.map(f),
        }
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elems
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.elems
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self { elems }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.elems
    }
}

/// Prints the elements like a tuple, e.g. `(1, 2, 3)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elems
            .iter()
            .fold(&mut f.debug_tuple(""), |t, elem| t.field(elem))
            .finish()
    }
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector { elems: [x, y] }
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector { elems: [x, y, z] }
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector {
        elems: [x, y, z, w],
    }
}
