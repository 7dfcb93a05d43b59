//! Overflow-checked buffer address arithmetic.
//!
//! A view's *effective address* is a 64-bit shared base plus a 32-bit local offset. The base is
//! wider than a buffer position so that one base can describe a larger virtual layout, but the
//! final byte position must fit the 32-bit signed position space of the buffer and lie within its
//! capacity.

use crate::{Error, Result};

/// Computes the effective address `base + offset`.
///
/// This only checks that the sum is representable; it does not validate it against any buffer.
pub fn effective_address(base: i64, offset: i32) -> Result<i64> {
    base.checked_add(i64::from(offset))
        .ok_or_else(|| overflow(base, offset, 0, 0))
}

/// Computes and validates the byte position of element `index` of size `element_size`, relative to
/// `base + offset`.
///
/// # Errors
///
/// - [`Error::AddressOverflow`] if `base + offset + index * element_size` overflows, or does not
///   fit into an `i32`.
/// - [`Error::OutOfBounds`] if the resulting position is negative, or the element would extend past
///   `capacity`.
///
/// # Examples
///
/// ```
/// # use strata::address::element_position;
/// assert_eq!(element_position(50, 0, 1, 8, 100), Ok(58));
/// assert!(element_position(90, 0, 2, 8, 100).is_err());
/// ```
pub fn element_position(
    base: i64,
    offset: i32,
    index: usize,
    element_size: usize,
    capacity: usize,
) -> Result<usize> {
    span_position(base, offset, index, 1, element_size, capacity)
}

/// Like [`element_position`], but validates the `count` consecutive elements starting at `first`.
///
/// Returns the byte position of element `first`. Bulk accessors use this to reject an access before
/// writing any of its bytes.
pub fn span_position(
    base: i64,
    offset: i32,
    first: usize,
    count: usize,
    element_size: usize,
    capacity: usize,
) -> Result<usize> {
    let address = checked_address(base, offset, first, element_size)?;
    let size = count.saturating_mul(element_size);

    let end = i64::try_from(size)
        .ok()
        .and_then(|size| address.checked_add(size));
    let limit = i64::try_from(capacity).unwrap_or(i64::MAX);
    match (usize::try_from(address), end) {
        (Ok(position), Some(end)) if end <= limit => Ok(position),
        _ => {
            log::trace!(
                "rejecting access of {size} bytes at {address} (base {base}, offset {offset}, capacity {capacity})"
            );
            Err(Error::OutOfBounds {
                address,
                size,
                capacity,
            })
        }
    }
}

fn checked_address(base: i64, offset: i32, index: usize, stride: usize) -> Result<i64> {
    let scaled = i64::try_from(index)
        .ok()
        .zip(i64::try_from(stride).ok())
        .and_then(|(index, stride)| index.checked_mul(stride));
    let address = scaled
        .and_then(|scaled| base.checked_add(i64::from(offset))?.checked_add(scaled))
        .ok_or_else(|| overflow(base, offset, index, stride))?;

    // Buffer positions are 32-bit, even though the base is carried as 64-bit.
    if i32::try_from(address).is_err() {
        return Err(overflow(base, offset, index, stride));
    }
    Ok(address)
}

fn overflow(base: i64, offset: i32, index: usize, stride: usize) -> Error {
    log::trace!("address overflow: {base} + {offset} + {index} * {stride}");
    Error::AddressOverflow {
        base,
        offset: offset.into(),
        index,
        stride,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds() {
        assert_eq!(element_position(0, 0, 0, 4, 4), Ok(0));
        assert_eq!(element_position(50, 0, 1, 8, 100), Ok(58));
        assert_eq!(element_position(10, -10, 0, 2, 2), Ok(0));
        assert_eq!(element_position(0, 12, 3, 4, 100), Ok(24));

        // The last element may end exactly at the capacity.
        assert_eq!(element_position(92, 0, 0, 8, 100), Ok(92));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            element_position(93, 0, 0, 8, 100),
            Err(Error::OutOfBounds {
                address: 93,
                size: 8,
                capacity: 100,
            })
        );
        assert_eq!(
            element_position(0, -2, 0, 2, 100),
            Err(Error::OutOfBounds {
                address: -2,
                size: 2,
                capacity: 100,
            })
        );
        assert!(matches!(
            element_position(0, 0, 0, 2, 0),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn address_overflow() {
        assert!(matches!(
            element_position(i64::MAX, 1, 0, 8, 100),
            Err(Error::AddressOverflow { .. })
        ));
        assert!(matches!(
            element_position(0, 0, usize::MAX, 8, 100),
            Err(Error::AddressOverflow { .. })
        ));
        assert!(matches!(
            element_position(i64::from(i32::MAX), 0, 1, 2, 100),
            Err(Error::AddressOverflow { .. })
        ));
        assert!(matches!(
            element_position(i64::from(i32::MIN) - 1, 0, 0, 2, 100),
            Err(Error::AddressOverflow { .. })
        ));
        assert_eq!(
            effective_address(i64::MIN, -1),
            Err(Error::AddressOverflow {
                base: i64::MIN,
                offset: -1,
                index: 0,
                stride: 0,
            })
        );
    }

    #[test]
    fn wide_base() {
        // A base outside of the 32-bit range is fine as long as the final position is not.
        let base = 1i64 << 40;
        let offset = i32::MIN;
        assert!(effective_address(base, offset).is_ok());
        assert!(matches!(
            element_position(base, offset, 0, 4, 100),
            Err(Error::AddressOverflow { .. })
        ));

        let base = i64::from(i32::MAX) + 16;
        assert_eq!(element_position(base, i32::MIN, 0, 4, 100), Ok(15));
    }

    #[test]
    fn spans() {
        assert_eq!(span_position(0, 0, 0, 4, 4, 16), Ok(0));
        assert_eq!(span_position(0, 4, 1, 2, 4, 16), Ok(8));
        assert_eq!(
            span_position(0, 0, 0, 5, 4, 16),
            Err(Error::OutOfBounds {
                address: 0,
                size: 20,
                capacity: 16,
            })
        );
    }
}
