/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use super::MatrixError;

/// A dense `rows x cols` matrix of `i32` values backed by a flat row-major
/// buffer.
///
/// Dimensions are fixed at construction and strictly positive; there is no
/// resize operation. Arithmetic methods never mutate their operands and
/// return a freshly allocated result, so operands and results never share
/// storage. Element arithmetic wraps around on overflow.
///
/// Rows can be accessed as slices by indexing:
/// ```
/// use densemat::Matrix;
///
/// let m = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m[1][0], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major backing storage; always exactly `rows * cols` elements.
    pub(super) data: Vec<i32>,
}

impl Matrix {
    /// Creates a zero-filled matrix with the given dimensions.
    ///
    /// Both dimensions must be strictly positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        })
    }

    /// Creates a matrix from an iterator of rows.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields no rows, an empty row, or rows of
    /// unequal lengths.
    pub fn from_rows<R: AsRef<[i32]>>(rows: impl IntoIterator<Item = R>) -> Self {
        let mut data = Vec::new();
        let mut num_rows = 0;
        let mut cols = None;
        for row in rows {
            let row = row.as_ref();
            match cols {
                None => cols = Some(row.len()),
                Some(cols) => assert_eq!(
                    row.len(),
                    cols,
                    "row {} has {} elements instead of {}",
                    num_rows,
                    row.len(),
                    cols
                ),
            }
            data.extend_from_slice(row);
            num_rows += 1;
        }
        let cols = cols.expect("no rows given");
        assert_ne!(cols, 0, "rows cannot be empty");
        Self {
            rows: num_rows,
            cols,
            data,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the elementwise sum of `self` and `other` as a new matrix.
    ///
    /// Both operands must have the same dimensions.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::AdditionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| x.wrapping_add(y))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Returns the matrix product of `self` and `other` as a new matrix.
    ///
    /// The column count of `self` must be equal to the row count of `other`;
    /// the result has the rows of `self` and the columns of `other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::MultiplicationMismatch {
                left_cols: self.cols,
                right_rows: other.rows,
            });
        }
        let mut data = vec![0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0_i32;
                for k in 0..self.cols {
                    sum = sum.wrapping_add(
                        self.data[i * self.cols + k].wrapping_mul(other.data[k * other.cols + j]),
                    );
                }
                data[i * other.cols + j] = sum;
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Returns the sum of the main and secondary diagonals.
    ///
    /// Defined only for square matrices. An element lying on both diagonals
    /// (the center of an odd-sized matrix) is counted twice.
    pub fn sum_of_diagonals(&self) -> Result<i32, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut main = 0_i32;
        let mut secondary = 0_i32;
        for i in 0..self.rows {
            main = main.wrapping_add(self[i][i]);
            secondary = secondary.wrapping_add(self[i][self.rows - 1 - i]);
        }
        Ok(main.wrapping_add(secondary))
    }

    /// Exchanges the contents of two rows in place.
    ///
    /// Swapping a row with itself is a no-op.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), MatrixError> {
        for index in [row1, row2] {
            if index >= self.rows {
                return Err(MatrixError::IndexOutOfRange {
                    index,
                    rows: self.rows,
                });
            }
        }
        if row1 == row2 {
            return Ok(());
        }
        let (low, high) = (row1.min(row2), row1.max(row2));
        let (head, tail) = self.data.split_at_mut(high * self.cols);
        head[low * self.cols..(low + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
        Ok(())
    }
}

impl Index<usize> for Matrix {
    type Output = [i32];

    #[inline(always)]
    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

#[test]
fn test_new_is_zero_filled() -> Result<(), MatrixError> {
    let m = Matrix::new(3, 2)?;
    for i in 0..3 {
        assert_eq!(m[i], [0, 0]);
    }
    Ok(())
}

#[test]
fn test_swap_with_self() -> Result<(), MatrixError> {
    let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
    m.swap_rows(1, 1)?;
    assert_eq!(m, Matrix::from_rows([[1, 2], [3, 4]]));
    Ok(())
}
