//! Byte-order-aware access to externally-owned byte regions.

use std::{cell::Cell, fmt, mem};

use crate::{Error, Result};

/// Byte order of the multi-byte values stored in a [`ByteBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the target platform.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// A fixed-capacity byte region owned by someone else, with a configured [`ByteOrder`].
///
/// This is the storage that buffer-backed views read from and write to. It borrows the underlying
/// bytes for `'a` and never resizes or reallocates them. Any number of views may share one
/// [`ByteBuffer`] and write through it, which is why it hands out access via [`Cell`]s instead of a
/// unique `&mut [u8]`. As a consequence it is not [`Sync`]: sharing it across threads requires
/// external synchronization.
///
/// All accesses take an absolute byte position and are bounds-checked; a failed access never
/// touches any byte.
#[derive(Clone, Copy)]
pub struct ByteBuffer<'a> {
    bytes: &'a [Cell<u8>],
    order: ByteOrder,
}

impl<'a> ByteBuffer<'a> {
    /// Wraps `bytes`, storing multi-byte values in the given byte `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata::{ByteBuffer, ByteOrder};
    /// let mut storage = [0; 4];
    /// let buf = ByteBuffer::new(&mut storage, ByteOrder::Big);
    /// buf.write_i32(0, 0x01020304).unwrap();
    /// assert_eq!(buf.to_vec(), [1, 2, 3, 4]);
    /// ```
    pub fn new(bytes: &'a mut [u8], order: ByteOrder) -> Self {
        Self::from_cells(Cell::from_mut(bytes).as_slice_of_cells(), order)
    }

    /// Wraps `bytes` using the platform's native byte order.
    pub fn native(bytes: &'a mut [u8]) -> Self {
        Self::new(bytes, ByteOrder::NATIVE)
    }

    /// Wraps a region that is already shared as a slice of [`Cell`]s.
    pub fn from_cells(bytes: &'a [Cell<u8>], order: ByteOrder) -> Self {
        Self { bytes, order }
    }

    /// Returns the number of bytes in this buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Copies the current contents of the buffer into a [`Vec`].
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.iter().map(Cell::get).collect()
    }

    fn cells(&self, pos: usize, len: usize) -> Result<&'a [Cell<u8>]> {
        pos.checked_add(len)
            .and_then(|end| self.bytes.get(pos..end))
            .ok_or(Error::OutOfBounds {
                address: i64::try_from(pos).unwrap_or(i64::MAX),
                size: len,
                capacity: self.bytes.len(),
            })
    }

    /// Reads `N` raw bytes starting at `pos`, without any byte order conversion.
    pub fn load<const N: usize>(&self, pos: usize) -> Result<[u8; N]> {
        let cells = self.cells(pos, N)?;
        let mut out = [0; N];
        for (dest, cell) in out.iter_mut().zip(cells) {
            *dest = cell.get();
        }
        Ok(out)
    }

    /// Writes `N` raw bytes starting at `pos`, without any byte order conversion.
    pub fn store<const N: usize>(&self, pos: usize, bytes: [u8; N]) -> Result<()> {
        let cells = self.cells(pos, N)?;
        for (cell, byte) in cells.iter().zip(bytes) {
            cell.set(byte);
        }
        Ok(())
    }
}

macro_rules! accessors {
    ($($ty:ty: $read:ident, $write:ident;)+) => {
        impl<'a> ByteBuffer<'a> {
            $(
                #[doc = concat!("Reads an [`", stringify!($ty), "`] at byte position `pos`, in the buffer's byte order.")]
                #[inline]
                pub fn $read(&self, pos: usize) -> Result<$ty> {
                    let bytes = self.load::<{ mem::size_of::<$ty>() }>(pos)?;
                    Ok(match self.order {
                        ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                        ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                    })
                }

                #[doc = concat!("Writes an [`", stringify!($ty), "`] at byte position `pos`, in the buffer's byte order.")]
                #[inline]
                pub fn $write(&self, pos: usize, value: $ty) -> Result<()> {
                    let bytes = match self.order {
                        ByteOrder::Little => value.to_le_bytes(),
                        ByteOrder::Big => value.to_be_bytes(),
                    };
                    self.store(pos, bytes)
                }
            )+
        }
    };
}
accessors! {
    u16: read_u16, write_u16;
    i16: read_i16, write_i16;
    i32: read_i32, write_i32;
    i64: read_i64, write_i64;
    f32: read_f32, write_f32;
    f64: read_f64, write_f64;
}

impl fmt::Debug for ByteBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer({} bytes, {:?})", self.capacity(), self.order)
    }
}
