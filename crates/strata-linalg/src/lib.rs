//! Plain vector, matrix and quaternion values.
//!
//! These are the owned counterparts of the buffer-backed views in `strata`. Each value stores its
//! components inline, and views copy data between these values and byte buffers.
//!
//! Dimensions are const generic parameters. Matrices are stored column-major without padding, which
//! is also the byte layout the views produce.
//!
//! This crate only covers construction and per-component access; there is no arithmetic.

mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
