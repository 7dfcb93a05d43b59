//! Typed vector, matrix and quaternion views over raw byte buffers.
//!
//! # Overview
//!
//! ## Buffers and Views
//!
//! `strata` does not own any tensor data. A [`ByteBuffer`] wraps a caller-provided `&mut [u8]`
//! (for example a GPU staging buffer or a memory-mapped file) together with a [`ByteOrder`], and
//! *views* interpret a fixed region of that buffer as a small fixed-size tensor:
//!
//! - [`BufferVector`] (and the [`BufVec2`], [`BufVec3`], [`BufVec4`] aliases),
//! - [`BufferMatrix`] (and [`BufMat2`], [`BufMat3`], [`BufMat4`]), stored column-major,
//! - [`BufferQuat`].
//!
//! Each view is generic over a [`Codec`](codec::Codec) that decides how a single component is
//! encoded. Integer and float codecs are exact; [`codec::F16`] narrows to IEEE-754 binary16.
//!
//! Views never cache anything: every accessor resolves the view's address, validates it against the
//! buffer, and reads or writes the encoded bytes.
//!
//! ## Shared Bases
//!
//! A view's address is `base + offset`, where the offset is fixed and the base is a
//! [`SharedBase`] that any number of views can reference. Relocating the base moves all of them at
//! once, which makes it easy to walk an array of structures with a single set of views.
//!
//! ## Heap Types
//!
//! Views copy to and from the [`strata_linalg`] types ([`Vector`](strata_linalg::Vector),
//! [`Matrix`](strata_linalg::Matrix), [`Quat`](strata_linalg::Quat)) and plain arrays. The copy
//! operations only need per-component access, expressed by the traits in this crate's root
//! ([`ComponentSource`], [`ComponentSink`], [`CellSource`], [`CellSink`]).
//!
//! ## Errors
//!
//! All fallible operations return [`Result`]. Out-of-range accesses and arithmetic overflow are
//! reported, never clamped, and a failed write does not modify the buffer.

pub mod address;
pub mod codec;

mod base;
mod buffer;
mod component;
mod error;
mod matrix;
mod quat;
mod vector;

#[cfg(test)]
mod tests;

pub use base::SharedBase;
pub use buffer::*;
pub use codec::Codec;
pub use component::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use quat::*;
pub use vector::*;
