//! Element encodings.
//!
//! A [`Codec`] decides how a single component is represented in a [`ByteBuffer`]. Views are generic
//! over their codec, so the element width is fixed when the view type is chosen and the accessors
//! are monomorphized per encoding.
//!
//! | Codec   | Component type | Bytes |
//! |---------|----------------|-------|
//! | [`I16`] | [`i16`]        | 2     |
//! | [`I32`] | [`i32`]        | 4     |
//! | [`I64`] | [`i64`]        | 8     |
//! | [`F32`] | [`f32`]        | 4     |
//! | [`F64`] | [`f64`]        | 8     |
//! | [`F16`] | [`f64`]        | 2     |

use std::{fmt, mem};

use half::f16;

use crate::{ByteBuffer, Result};

/// An encoding of one component value as a fixed number of bytes.
///
/// Implementations are stateless. Multi-byte encodings use the byte order the [`ByteBuffer`] was
/// configured with.
pub trait Codec {
    /// The decoded component type.
    type Value: Copy + Default + PartialEq + fmt::Debug;

    /// Number of bytes one encoded component occupies.
    const SIZE: usize;

    /// Decodes the component stored at byte position `pos`.
    fn read(buffer: &ByteBuffer<'_>, pos: usize) -> Result<Self::Value>;

    /// Encodes `value` into the bytes starting at position `pos`.
    fn write(buffer: &ByteBuffer<'_>, pos: usize, value: Self::Value) -> Result<()>;
}

macro_rules! exact_codecs {
    ($($(#[$attr:meta])* $name:ident($ty:ty): $read:ident, $write:ident;)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Codec for $name {
                type Value = $ty;

                const SIZE: usize = mem::size_of::<$ty>();

                #[inline]
                fn read(buffer: &ByteBuffer<'_>, pos: usize) -> Result<$ty> {
                    buffer.$read(pos)
                }

                #[inline]
                fn write(buffer: &ByteBuffer<'_>, pos: usize, value: $ty) -> Result<()> {
                    buffer.$write(pos, value)
                }
            }
        )+
    };
}
exact_codecs! {
    /// 16-bit two's complement integers.
    I16(i16): read_i16, write_i16;
    /// 32-bit two's complement integers.
    I32(i32): read_i32, write_i32;
    /// 64-bit two's complement integers.
    I64(i64): read_i64, write_i64;
    /// IEEE-754 binary32 floats.
    F32(f32): read_f32, write_f32;
    /// IEEE-754 binary64 floats.
    F64(f64): read_f64, write_f64;
}

/// IEEE-754 binary16 ("half precision") floats, exposed as [`f64`].
///
/// Writing narrows the value to the nearest binary16 value, rounding ties to even. Finite values
/// too large for binary16 become infinities of the same sign, and every NaN is stored as a quiet
/// NaN. The narrowing is lossy and never reported as an error.
///
/// Reading widens the stored bit pattern to [`f64`], which is always exact.
///
/// # Examples
///
/// ```
/// # use strata::{codec::{Codec, F16}, ByteBuffer};
/// let mut storage = [0; 2];
/// let buf = ByteBuffer::native(&mut storage);
///
/// F16::write(&buf, 0, 65504.0).unwrap();
/// assert_eq!(F16::read(&buf, 0).unwrap(), 65504.0);
///
/// F16::write(&buf, 0, 100000.0).unwrap();
/// assert_eq!(F16::read(&buf, 0).unwrap(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct F16;

impl F16 {
    /// Narrows `value` to its binary16 bit pattern.
    #[inline]
    pub fn narrow(value: f64) -> u16 {
        f16::from_f64(value).to_bits()
    }

    /// Widens a binary16 bit pattern to [`f64`].
    #[inline]
    pub fn widen(bits: u16) -> f64 {
        f16::from_bits(bits).to_f64()
    }
}

impl Codec for F16 {
    type Value = f64;

    const SIZE: usize = mem::size_of::<f16>();

    #[inline]
    fn read(buffer: &ByteBuffer<'_>, pos: usize) -> Result<f64> {
        buffer.read_u16(pos).map(Self::widen)
    }

    #[inline]
    fn write(buffer: &ByteBuffer<'_>, pos: usize, value: f64) -> Result<()> {
        buffer.write_u16(pos, Self::narrow(value))
    }
}
