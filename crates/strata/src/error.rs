use thiserror::Error;

/// Errors returned by buffer-backed views and the address arithmetic underneath them.
///
/// Every error is scoped to the single call that produced it: no bytes are written by a call that
/// fails, and nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// `base + offset + index * stride` does not fit into the 32-bit buffer position space.
    #[error(
        "address overflow: {base} + {offset} + {index} * {stride} does not fit a 32-bit buffer position"
    )]
    AddressOverflow {
        base: i64,
        offset: i64,
        index: usize,
        stride: usize,
    },

    /// The accessed byte range `address..address + size` is not contained in the buffer.
    #[error("access of {size} bytes at address {address} is out of bounds for a buffer of {capacity} bytes")]
    OutOfBounds {
        address: i64,
        size: usize,
        capacity: usize,
    },

    /// A component or matrix cell index is not smaller than the view's dimension.
    #[error("component index {index} is out of range for dimension {len}")]
    ComponentIndex { index: usize, len: usize },
}

/// Convenience alias used throughout `strata`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
