use std::fmt;

use crate::{vec4, One, Vector, Zero};

/// A quaternion `xi + yj + zk + w`, stored as the 4 components `x, y, z, w`.
///
/// `w` is the real part. Rotation quaternions are usually written with the identity
/// [`Quat::IDENTITY`] as the starting point.
#[derive(Clone, Copy, Hash, PartialEq)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// `(0, 0, 0, 1)`
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Interprets `vec` as `(x, y, z, w)`.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self::from_vec(vec4(x, y, z, w))
    }

    /// Returns the components of this quaternion as a [`Vector`], in `x, y, z, w` order.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }
}

impl<T: Copy> Quat<T> {
    pub fn x(&self) -> T {
        self.vec[0]
    }

    pub fn y(&self) -> T {
        self.vec[1]
    }

    pub fn z(&self) -> T {
        self.vec[2]
    }

    pub fn w(&self) -> T {
        self.vec[3]
    }

    /// Returns the component at `index` (`0..4`, in `x, y, z, w` order).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    pub fn component(&self, index: usize) -> T {
        self.vec[index]
    }

    /// Replaces the component at `index` (`0..4`, in `x, y, z, w` order).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    pub fn set_component(&mut self, index: usize, value: T) {
        self.vec[index] = value;
    }
}

impl<T: Default> Default for Quat<T> {
    fn default() -> Self {
        Self {
            vec: Vector::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat{:?}", self.vec)
    }
}
