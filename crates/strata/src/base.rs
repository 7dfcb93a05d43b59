//! Shared base addresses.

use std::{cell::Cell, fmt};

use crate::{address, ByteBuffer, Error, Result};

/// A mutable base address shared by any number of buffer-backed views.
///
/// Every view stores a reference to a [`SharedBase`] plus its own fixed local offset. The view's
/// effective address is recomputed from the base on *every* access, so calling [`SharedBase::set`]
/// moves all views referencing this base at once. This allows a single base to be used as a cursor
/// that walks over an array of structures, without recreating the views for every element.
///
/// The base is a 64-bit value and may lie outside of any single buffer, as long as the final byte
/// positions computed from it do not.
///
/// [`SharedBase`] is not [`Sync`]. Sharing one between threads requires external synchronization.
///
/// # Examples
///
/// ```
/// # use strata::{codec::I32, BufVec2, ByteBuffer, SharedBase};
/// let mut storage = [0; 32];
/// let buf = ByteBuffer::native(&mut storage);
/// let base = SharedBase::new();
/// let a = BufVec2::<I32>::new(buf, &base, 0);
/// let b = BufVec2::<I32>::new(buf, &base, 8);
///
/// base.set(16);
/// a.set2(1, 2).unwrap();
/// b.set2(3, 4).unwrap();
/// assert_eq!(buf.read_i32(16).unwrap(), 1);
/// assert_eq!(buf.read_i32(24).unwrap(), 3);
/// ```
#[derive(Default)]
pub struct SharedBase {
    address: Cell<i64>,
}

impl SharedBase {
    /// Creates a new base at address 0.
    pub const fn new() -> Self {
        Self::with_address(0)
    }

    /// Creates a new base at `address`.
    pub const fn with_address(address: i64) -> Self {
        Self {
            address: Cell::new(address),
        }
    }

    /// Returns the current base address.
    #[inline]
    pub fn get(&self) -> i64 {
        self.address.get()
    }

    /// Relocates the base to `address`.
    ///
    /// This is observed by every view referencing `self` on its next access.
    #[inline]
    pub fn set(&self, address: i64) {
        self.address.set(address);
    }

    /// Moves the base by `delta` bytes and returns the new address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AddressOverflow`] and leaves the base unchanged if the new address does not
    /// fit into an [`i64`].
    pub fn advance(&self, delta: i64) -> Result<i64> {
        let current = self.get();
        let address = current
            .checked_add(delta)
            .ok_or(Error::AddressOverflow {
                base: current,
                offset: delta,
                index: 0,
                stride: 0,
            })?;
        self.set(address);
        Ok(address)
    }
}

impl fmt::Debug for SharedBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedBase").field(&self.get()).finish()
    }
}

/// Where a view lives: a buffer, a shared base, and the view's fixed local offset.
#[derive(Clone, Copy)]
pub(crate) struct Placement<'a> {
    pub(crate) buffer: ByteBuffer<'a>,
    pub(crate) base: &'a SharedBase,
    pub(crate) offset: i32,
}

impl<'a> Placement<'a> {
    pub(crate) fn address(&self) -> Result<i64> {
        address::effective_address(self.base.get(), self.offset)
    }

    /// Validates `count` elements of `size` bytes starting at element `first`, and returns the byte
    /// position of element `first`.
    pub(crate) fn span(&self, first: usize, count: usize, size: usize) -> Result<usize> {
        address::span_position(
            self.base.get(),
            self.offset,
            first,
            count,
            size,
            self.buffer.capacity(),
        )
    }
}

impl fmt::Debug for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.base.get(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set() {
        let base = SharedBase::new();
        assert_eq!(base.get(), 0);
        base.set(-12);
        assert_eq!(base.get(), -12);
        assert_eq!(SharedBase::with_address(1 << 40).get(), 1 << 40);
        assert_eq!(SharedBase::default().get(), 0);
        assert_eq!(format!("{:?}", SharedBase::with_address(3)), "SharedBase(3)");
    }

    #[test]
    fn advance() {
        let base = SharedBase::with_address(8);
        assert_eq!(base.advance(24), Ok(32));
        assert_eq!(base.advance(-40), Ok(-8));
        assert_eq!(base.get(), -8);

        let base = SharedBase::with_address(i64::MAX - 1);
        assert!(matches!(
            base.advance(2),
            Err(Error::AddressOverflow { .. })
        ));
        assert_eq!(base.get(), i64::MAX - 1);
    }

    #[test]
    fn placement() {
        let mut storage = [0; 16];
        let base = SharedBase::with_address(4);
        let placement = Placement {
            buffer: ByteBuffer::native(&mut storage),
            base: &base,
            offset: 2,
        };
        assert_eq!(placement.address(), Ok(6));
        assert_eq!(placement.span(1, 1, 4), Ok(10));
        assert_eq!(placement.span(0, 2, 4), Ok(6));

        base.set(10);
        assert_eq!(placement.span(0, 1, 4), Ok(12));
        assert!(placement.span(1, 1, 4).is_err());
        assert!(placement.span(0, 2, 4).is_err());
    }
}
