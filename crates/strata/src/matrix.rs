use std::{fmt, marker::PhantomData};

use strata_linalg::{Matrix, Vector};

use crate::{
    base::Placement,
    component::{CellSink, CellSource},
    ByteBuffer, Codec, Error, Result, SharedBase,
};

/// A 2x2 matrix stored in a [`ByteBuffer`].
pub type BufMat2<'a, C> = BufferMatrix<'a, C, 2>;
/// A 3x3 matrix stored in a [`ByteBuffer`].
pub type BufMat3<'a, C> = BufferMatrix<'a, C, 3>;
/// A 4x4 matrix stored in a [`ByteBuffer`].
pub type BufMat4<'a, C> = BufferMatrix<'a, C, 4>;

/// An `N`x`N` matrix whose cells live in a [`ByteBuffer`], encoded with codec `C`.
///
/// Cells are stored in column-major order: the cell at `(row, col)` is element `col * N + row`, and
/// element `i` starts `i * C::SIZE` bytes after the effective address `base + offset`. This matches
/// the memory layout of [`Matrix`], so a buffer written through a [`BufferMatrix`] in native byte
/// order can be handed to anything expecting column-major matrices.
///
/// Like [`BufferVector`][crate::BufferVector], the view holds no data and resolves its location
/// through the [`SharedBase`] on every access.
///
/// # Examples
///
/// ```
/// # use strata::{codec::I32, BufMat3, ByteBuffer, SharedBase};
/// let mut storage = [0; 36];
/// let buf = ByteBuffer::native(&mut storage);
/// let base = SharedBase::new();
/// let m = BufMat3::<I32>::new(buf, &base, 0);
///
/// m.set(1, 0, 7)?;
/// assert_eq!(m.element(1)?, 7);
/// assert_eq!(buf.read_i32(4)?, 7);
/// # Ok::<_, strata::Error>(())
/// ```
pub struct BufferMatrix<'a, C: Codec, const N: usize> {
    placement: Placement<'a>,
    codec: PhantomData<C>,
}

impl<'a, C: Codec, const N: usize> BufferMatrix<'a, C, N> {
    /// The number of bytes the matrix occupies in the buffer.
    pub const BYTE_SIZE: usize = N * N * C::SIZE;

    /// Creates a matrix view located at `base + offset` in `buffer`.
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

    /// Validates the whole view and returns the byte position of element 0.
    fn start(&self) -> Result<usize> {
        self.placement.span(0, N * N, C::SIZE)
    }

    fn check_dim(index: usize) -> Result<()> {
        if index < N {
            Ok(())
        } else {
            Err(Error::ComponentIndex { index, len: N })
        }
    }

    fn check_cell(row: usize, col: usize) -> Result<usize> {
        Self::check_dim(row)?;
        Self::check_dim(col)?;
        Ok(col * N + row)
    }

    /// Reads the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<C::Value> {
        self.read(Self::check_cell(row, col)?)
    }

    /// Writes `value` to the cell at `(row, col)`.
    pub fn set(&self, row: usize, col: usize, value: C::Value) -> Result<()> {
        self.write(Self::check_cell(row, col)?, value)
    }

    /// Reads element `index` in column-major order.
    pub fn element(&self, index: usize) -> Result<C::Value> {
        if index >= N * N {
            return Err(Error::ComponentIndex { index, len: N * N });
        }
        self.read(index)
    }

    /// Writes element `index` in column-major order.
    pub fn set_element(&self, index: usize, value: C::Value) -> Result<()> {
        if index >= N * N {
            return Err(Error::ComponentIndex { index, len: N * N });
        }
        self.write(index, value)
    }

    fn read(&self, element: usize) -> Result<C::Value> {
        let pos = self.start()? + element * C::SIZE;
        C::read(&self.placement.buffer, pos)
    }

    fn write(&self, element: usize, value: C::Value) -> Result<()> {
        let pos = self.start()? + element * C::SIZE;
        C::write(&self.placement.buffer, pos, value)
    }

    /// Reads column `col`.
    pub fn column(&self, col: usize) -> Result<Vector<C::Value, N>> {
        Self::check_dim(col)?;
        let start = self.start()? + col * N * C::SIZE;
        let mut out = Vector::default();
        for row in 0..N {
            out[row] = C::read(&self.placement.buffer, start + row * C::SIZE)?;
        }
        Ok(out)
    }

    /// Reads row `row`.
    pub fn row(&self, row: usize) -> Result<Vector<C::Value, N>> {
        Self::check_dim(row)?;
        let start = self.start()? + row * C::SIZE;
        let mut out = Vector::default();
        for col in 0..N {
            out[col] = C::read(&self.placement.buffer, start + col * N * C::SIZE)?;
        }
        Ok(out)
    }

    /// Overwrites column `col`. Nothing is written if the view does not fit the buffer.
    pub fn set_column(&self, col: usize, value: &Vector<C::Value, N>) -> Result<()> {
        Self::check_dim(col)?;
        let start = self.start()? + col * N * C::SIZE;
        for row in 0..N {
            C::write(&self.placement.buffer, start + row * C::SIZE, value[row])?;
        }
        Ok(())
    }

    /// Overwrites row `row`. Nothing is written if the view does not fit the buffer.
    pub fn set_row(&self, row: usize, value: &Vector<C::Value, N>) -> Result<()> {
        Self::check_dim(row)?;
        let start = self.start()? + row * C::SIZE;
        for col in 0..N {
            C::write(&self.placement.buffer, start + col * N * C::SIZE, value[col])?;
        }
        Ok(())
    }

    /// Reads all cells into a [`Matrix`].
    pub fn load(&self) -> Result<Matrix<C::Value, N, N>> {
        let mut out = Matrix::default();
        self.copy_to(&mut out)?;
        Ok(out)
    }

    /// Writes all cells from `value`.
    pub fn store(&self, value: &Matrix<C::Value, N, N>) -> Result<()> {
        self.copy_from(value)
    }

    /// Writes the cells of the square matrix `src` into this view.
    ///
    /// A smaller source is written into the upper-left block, leaving the remaining cells
    /// untouched. A larger source is truncated to its upper-left `N`x`N` block. The whole view is
    /// validated before any byte is written, regardless of the source's size.
    pub fn copy_from<S>(&self, src: &S) -> Result<()>
    where
        S: CellSource<C::Value> + ?Sized,
    {
        let start = self.start()?;
        let n = src.dimension().min(N);
        for col in 0..n {
            for row in 0..n {
                let pos = start + (col * N + row) * C::SIZE;
                C::write(&self.placement.buffer, pos, src.cell(row, col))?;
            }
        }
        Ok(())
    }

    /// Reads the upper-left block of this view into the square matrix `dest`.
    pub fn copy_to<S>(&self, dest: &mut S) -> Result<()>
    where
        S: CellSink<C::Value> + ?Sized,
    {
        let start = self.start()?;
        let n = dest.dimension().min(N);
        for col in 0..n {
            for row in 0..n {
                let pos = start + (col * N + row) * C::SIZE;
                dest.set_cell(row, col, C::read(&self.placement.buffer, pos)?);
            }
        }
        Ok(())
    }
}

/// Compares the decoded contents, not the location. Views that cannot be read are never equal.
impl<'a, 'b, C: Codec, const N: usize> PartialEq<BufferMatrix<'b, C, N>>
    for BufferMatrix<'a, C, N>
{
    fn eq(&self, other: &BufferMatrix<'b, C, N>) -> bool {
        match (self.load(), other.load()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a, C: Codec, const N: usize> PartialEq<Matrix<C::Value, N, N>> for BufferMatrix<'a, C, N> {
    fn eq(&self, other: &Matrix<C::Value, N, N>) -> bool {
        self.load().map_or(false, |m| m == *other)
    }
}

impl<C: Codec, const N: usize> fmt::Debug for BufferMatrix<'_, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.load() {
            Ok(m) => write!(f, "BufferMatrix @ {:?} {:?}", self.placement, m),
            Err(e) => write!(f, "BufferMatrix @ {:?} <{}>", self.placement, e),
        }
    }
}
