//! A fixed-size occupancy bitboard using const generics.
//!
//! Cells are addressed by the flat index `row * N + col`, which is how the
//! placement engine walks the grid.
//! The whole `N×N` board is packed into the unsigned integer `T`.

use core::ops::{BitAnd, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Flat index is outside [0..N*N).
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    pub const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty bitboard (all cells free).
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the cell at flat `index`.
    pub fn get(&self, index: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(index)?;
        Ok(((self.bits >> index) & T::one()) != T::zero())
    }

    /// Marks the cell at flat `index` occupied.
    pub fn set(&mut self, index: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    #[inline]
    fn check_bounds(index: usize) -> Result<(), BitBoardError> {
        if index >= Self::CELLS {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over flat indices.
    pub fn from_indices<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut board = Self::new();
        for idx in iter {
            board.set(idx)?;
        }
        Ok(board)
    }

    /// Iterator over the occupied flat indices, in ascending order.
    #[inline]
    pub fn iter_set(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(idx);
            }
        }
        None
    }
}

/// Bitwise AND, used to test a candidate mask against the occupied cells.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() & rhs.into_raw())
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
