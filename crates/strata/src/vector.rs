use std::{fmt, marker::PhantomData};

use strata_linalg::{vec2, vec3, vec4, Vector};

use crate::{
    base::Placement,
    component::{ComponentSink, ComponentSource},
    ByteBuffer, Codec, Error, Result, SharedBase,
};

/// A 2-component vector stored in a [`ByteBuffer`].
pub type BufVec2<'a, C> = BufferVector<'a, C, 2>;
/// A 3-component vector stored in a [`ByteBuffer`].
pub type BufVec3<'a, C> = BufferVector<'a, C, 3>;
/// A 4-component vector stored in a [`ByteBuffer`].
pub type BufVec4<'a, C> = BufferVector<'a, C, 4>;

/// An `N`-component vector whose components live in a [`ByteBuffer`], encoded with codec `C`.
///
/// The view is positioned at `base + offset`, where `base` is a [`SharedBase`] that may be shared
/// with other views and `offset` is fixed at construction. Components are packed back to back, so
/// component `i` starts `i * C::SIZE` bytes after the effective address.
///
/// The view itself holds no component data: every accessor resolves the current effective address,
/// validates it against the buffer and then reads or writes the encoded bytes. Accessors fail with
/// [`Error::OutOfBounds`] or [`Error::AddressOverflow`] when the view does not currently fit into
/// the buffer; a failing write leaves the buffer untouched.
///
/// # Examples
///
/// ```
/// # use strata::{codec::F64, BufVec2, ByteBuffer, Error, SharedBase};
/// let mut storage = [0; 100];
/// let buf = ByteBuffer::native(&mut storage);
/// let base = SharedBase::with_address(50);
/// let v = BufVec2::<F64>::new(buf, &base, 0);
///
/// v.set2(1.5, -2.25)?;
/// assert_eq!(v.get2()?, (1.5, -2.25));
///
/// base.set(90);
/// assert!(matches!(v.get2(), Err(Error::OutOfBounds { .. })));
/// # Ok::<_, Error>(())
/// ```
pub struct BufferVector<'a, C: Codec, const N: usize> {
    placement: Placement<'a>,
    codec: PhantomData<C>,
}

impl<'a, C: Codec, const N: usize> BufferVector<'a, C, N> {
    /// The number of bytes the vector occupies in the buffer.
    pub const BYTE_SIZE: usize = N * C::SIZE;

    /// Creates a vector view located at `base + offset` in `buffer`.
    ///
    /// Construction never fails; the location is validated on each access.
    pub fn new(buffer: ByteBuffer<'a>, base: &'a SharedBase, offset: i32) -> Self {
        Self {
            placement: Placement {
                buffer,
                base,
                offset,
            },
            codec: PhantomData,
        }
    }

    /// Returns the effective address (`base + offset`) the view currently starts at.
    pub fn address(&self) -> Result<i64> {
        self.placement.address()
    }

    #[inline]
    pub fn local_offset(&self) -> i32 {
        self.placement.offset
    }

    #[inline]
    pub fn base(&self) -> &'a SharedBase {
        self.placement.base
    }

    #[inline]
    pub fn buffer(&self) -> ByteBuffer<'a> {
        self.placement.buffer
    }

    pub(crate) fn placement(&self) -> &Placement<'a> {
        &self.placement
    }

    /// Validates the whole view and returns the byte position of its first component.
    fn start(&self) -> Result<usize> {
        self.placement.span(0, N, C::SIZE)
    }

    fn check_index(index: usize) -> Result<()> {
        if index < N {
            Ok(())
        } else {
            Err(Error::ComponentIndex { index, len: N })
        }
    }

    /// Reads the component at `index`.
    ///
    /// Fails with [`Error::OutOfBounds`] unless the entire view lies inside the buffer, even if the
    /// requested component alone would fit.
    pub fn get(&self, index: usize) -> Result<C::Value> {
        Self::check_index(index)?;
        let pos = self.start()? + index * C::SIZE;
        C::read(&self.placement.buffer, pos)
    }

    /// Writes `value` to the component at `index`.
    pub fn set(&self, index: usize, value: C::Value) -> Result<()> {
        Self::check_index(index)?;
        let pos = self.start()? + index * C::SIZE;
        C::write(&self.placement.buffer, pos, value)
    }

    /// Reads all components into a heap-resident [`Vector`].
    pub fn load(&self) -> Result<Vector<C::Value, N>> {
        let mut out = Vector::default();
        self.copy_to(&mut out)?;
        Ok(out)
    }

    /// Writes all components from `value`.
    pub fn store(&self, value: &Vector<C::Value, N>) -> Result<()> {
        self.copy_from(value)
    }

    /// Writes the components of `src` into this view.
    ///
    /// If `src` has fewer components than the view, the remaining components of the view are left
    /// untouched. If it has more, only the first `N` are copied. The whole view is validated
    /// before any byte is written, also when `src` is empty.
    pub fn copy_from<S>(&self, src: &S) -> Result<()>
    where
        S: ComponentSource<C::Value> + ?Sized,
    {
        let start = self.start()?;
        let count = src.component_count().min(N);
        for i in 0..count {
            C::write(&self.placement.buffer, start + i * C::SIZE, src.component(i))?;
        }
        Ok(())
    }

    /// Reads the components of this view into `dest`.
    ///
    /// This mirrors [`BufferVector::copy_from`]: only the first `min(N, dest.component_count())`
    /// components are transferred.
    pub fn copy_to<S>(&self, dest: &mut S) -> Result<()>
    where
        S: ComponentSink<C::Value> + ?Sized,
    {
        let start = self.start()?;
        let count = dest.component_count().min(N);
        for i in 0..count {
            dest.set_component(i, C::read(&self.placement.buffer, start + i * C::SIZE)?);
        }
        Ok(())
    }
}

macro_rules! axes {
    ($n:literal: $($get:ident, $set:ident = $index:literal;)+) => {
        impl<'a, C: Codec> BufferVector<'a, C, $n> {
            $(
                #[doc = concat!("Reads the `", stringify!($get), "` component.")]
                #[inline]
                pub fn $get(&self) -> Result<C::Value> {
                    self.get($index)
                }

                #[doc = concat!("Writes the `", stringify!($get), "` component.")]
                #[inline]
                pub fn $set(&self, value: C::Value) -> Result<()> {
                    self.set($index, value)
                }
            )+
        }
    };
}
axes! { 2:
    x, set_x = 0;
    y, set_y = 1;
}
axes! { 3:
    x, set_x = 0;
    y, set_y = 1;
    z, set_z = 2;
}
axes! { 4:
    x, set_x = 0;
    y, set_y = 1;
    z, set_z = 2;
    w, set_w = 3;
}

impl<'a, C: Codec> BufferVector<'a, C, 2> {
    pub fn get2(&self) -> Result<(C::Value, C::Value)> {
        let [x, y] = self.load()?.into_array();
        Ok((x, y))
    }

    /// Writes both components. Neither is written if the view does not fit the buffer.
    pub fn set2(&self, x: C::Value, y: C::Value) -> Result<()> {
        self.store(&vec2(x, y))
    }
}

impl<'a, C: Codec> BufferVector<'a, C, 3> {
    pub fn get3(&self) -> Result<(C::Value, C::Value, C::Value)> {
        let [x, y, z] = self.load()?.into_array();
        Ok((x, y, z))
    }

    /// Writes all three components. None is written if the view does not fit the buffer.
    pub fn set3(&self, x: C::Value, y: C::Value, z: C::Value) -> Result<()> {
        self.store(&vec3(x, y, z))
    }
}

impl<'a, C: Codec> BufferVector<'a, C, 4> {
    pub fn get4(&self) -> Result<(C::Value, C::Value, C::Value, C::Value)> {
        let [x, y, z, w] = self.load()?.into_array();
        Ok((x, y, z, w))
    }

    /// Writes all four components. None is written if the view does not fit the buffer.
    pub fn set4(&self, x: C::Value, y: C::Value, z: C::Value, w: C::Value) -> Result<()> {
        self.store(&vec4(x, y, z, w))
    }
}

/// Compares the decoded contents, not the location. Views that cannot be read are never equal.
impl<'a, 'b, C: Codec, const N: usize> PartialEq<BufferVector<'b, C, N>>
    for BufferVector<'a, C, N>
{
    fn eq(&self, other: &BufferVector<'b, C, N>) -> bool {
        match (self.load(), other.load()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a, C: Codec, const N: usize> PartialEq<Vector<C::Value, N>> for BufferVector<'a, C, N> {
    fn eq(&self, other: &Vector<C::Value, N>) -> bool {
        self.load().map_or(false, |v| v == *other)
    }
}

impl<C: Codec, const N: usize> fmt::Debug for BufferVector<'_, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.load() {
            Ok(v) => write!(f, "BufferVector @ {:?} {:?}", self.placement, v),
            Err(e) => write!(f, "BufferVector @ {:?} <{}>", self.placement, e),
        }
    }
}
