/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dense integer matrices and the operations defined on them.
//!
//! The entry point is [`Matrix`], a fixed-size grid of `i32` values stored in
//! row-major order. Matrices are built with [`Matrix::new`] or
//! [`Matrix::from_rows`], filled from whitespace-delimited text sources with
//! [`Matrix::load`] or [`Matrix::read_from`], and combined with
//! [`Matrix::add`] and [`Matrix::multiply`]. Every failure mode is a variant
//! of [`MatrixError`].

use std::io;
use thiserror::Error;

mod dense;
mod load;

pub use dense::Matrix;

/// Error types that can occur while building, loading, or combining matrices.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A requested dimension is zero.
    #[error("matrix dimensions must be positive: got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// The source cannot be opened or read.
    #[error("cannot read matrix data")]
    UnreadableSource(#[from] io::Error),

    /// The source ran out of integer tokens before the grid was full.
    #[error("not enough matrix data: needed {needed} integer tokens, found {found}")]
    InsufficientData { needed: usize, found: usize },

    /// The operands of an addition differ in shape.
    #[error("addition requires equal dimensions: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    AdditionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// The inner dimensions of a product disagree.
    #[error("multiplication requires the left column count to equal the right row count: {left_cols} != {right_rows}")]
    MultiplicationMismatch { left_cols: usize, right_rows: usize },

    /// A diagonal sum was requested on a rectangular matrix.
    #[error("diagonal sums are defined only for square matrices: got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A row index is past the end of the matrix.
    #[error("row index {index} out of range: the matrix has {rows} rows")]
    IndexOutOfRange { index: usize, rows: usize },
}
