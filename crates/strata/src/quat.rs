use std::fmt;

use strata_linalg::Quat;

use crate::{
    component::{ComponentSink, ComponentSource},
    BufferVector, ByteBuffer, Codec, Result, SharedBase,
};

/// A quaternion whose components live in a [`ByteBuffer`], encoded with codec `C`.
///
/// The components are stored like a 4-component vector in `x, y, z, w` order, where `w` is the real
/// part. All accessors behave like those of [`BufferVector`].
pub struct BufferQuat<'a, C: Codec> {
    vec: BufferVector<'a, C, 4>,
}

impl<'a, C: Codec> BufferQuat<'a, C> {
    /// The number of bytes the quaternion occupies in the buffer.
    pub const BYTE_SIZE: usize = 4 * C::SIZE;

    /// Creates a quaternion view located at `base + offset` in `buffer`.
    pub fn new(buffer: ByteBuffer<'a>, base: &'a SharedBase, offset: i32) -> Self {
        Self {
            vec: BufferVector::new(buffer, base, offset),
        }
    }

    pub fn address(&self) -> Result<i64> {
        self.vec.address()
    }

    #[inline]
    pub fn local_offset(&self) -> i32 {
        self.vec.local_offset()
    }

    #[inline]
    pub fn base(&self) -> &'a SharedBase {
        self.vec.base()
    }

    #[inline]
    pub fn buffer(&self) -> ByteBuffer<'a> {
        self.vec.buffer()
    }

    /// Reads the component at `index` (`0..4`, in `x, y, z, w` order).
    pub fn get(&self, index: usize) -> Result<C::Value> {
        self.vec.get(index)
    }

    /// Writes the component at `index` (`0..4`, in `x, y, z, w` order).
    pub fn set(&self, index: usize, value: C::Value) -> Result<()> {
        self.vec.set(index, value)
    }

    pub fn x(&self) -> Result<C::Value> {
        self.vec.x()
    }

    pub fn y(&self) -> Result<C::Value> {
        self.vec.y()
    }

    pub fn z(&self) -> Result<C::Value> {
        self.vec.z()
    }

    /// Reads the real part.
    pub fn w(&self) -> Result<C::Value> {
        self.vec.w()
    }

    pub fn set_x(&self, value: C::Value) -> Result<()> {
        self.vec.set_x(value)
    }

    pub fn set_y(&self, value: C::Value) -> Result<()> {
        self.vec.set_y(value)
    }

    pub fn set_z(&self, value: C::Value) -> Result<()> {
        self.vec.set_z(value)
    }

    /// Writes the real part.
    pub fn set_w(&self, value: C::Value) -> Result<()> {
        self.vec.set_w(value)
    }

    pub fn load(&self) -> Result<Quat<C::Value>> {
        self.vec.load().map(Quat::from_vec)
    }

    /// Writes all four components. None is written if the view does not fit the buffer.
    pub fn store(&self, value: &Quat<C::Value>) -> Result<()> {
        self.vec.copy_from(value)
    }

    /// See [`BufferVector::copy_from`].
    pub fn copy_from<S>(&self, src: &S) -> Result<()>
    where
        S: ComponentSource<C::Value> + ?Sized,
    {
        self.vec.copy_from(src)
    }

    /// See [`BufferVector::copy_to`].
    pub fn copy_to<S>(&self, dest: &mut S) -> Result<()>
    where
        S: ComponentSink<C::Value> + ?Sized,
    {
        self.vec.copy_to(dest)
    }
}

impl<'a, 'b, C: Codec> PartialEq<BufferQuat<'b, C>> for BufferQuat<'a, C> {
    fn eq(&self, other: &BufferQuat<'b, C>) -> bool {
        self.vec == other.vec
    }
}

impl<'a, C: Codec> PartialEq<Quat<C::Value>> for BufferQuat<'a, C> {
    fn eq(&self, other: &Quat<C::Value>) -> bool {
        self.load().map_or(false, |q| q == *other)
    }
}

impl<C: Codec> fmt::Debug for BufferQuat<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.load() {
            Ok(q) => write!(f, "BufferQuat @ {:?} {:?}", self.vec.placement(), q),
            Err(e) => write!(f, "BufferQuat @ {:?} <{}>", self.vec.placement(), e),
        }
    }
}
