/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{Matrix, MatrixError};

impl Matrix {
    /// Fills the matrix with integer tokens read from `reader`.
    ///
    /// The first `lines_to_skip` lines are discarded in full, terminators
    /// included; if the source has fewer lines, reading continues from
    /// whatever remains. After skipping, whitespace-separated integer tokens
    /// are read in row-major order, crossing line boundaries freely, until
    /// `rows * cols` of them have been consumed.
    ///
    /// The grid is overwritten only once all tokens have been read; on error
    /// the previous contents are left untouched. Dimensions never change.
    pub fn read_from(
        &mut self,
        reader: impl BufRead,
        lines_to_skip: usize,
    ) -> Result<(), MatrixError> {
        let needed = self.rows() * self.cols();
        let mut values = Vec::with_capacity(needed);

        let mut lines = reader.lines();
        for _ in 0..lines_to_skip {
            if lines.next().transpose()?.is_none() {
                break;
            }
        }

        'read: for line in lines {
            for token in line?.split_whitespace() {
                // a token that does not parse ends the stream of valid tokens
                let Ok(value) = token.parse::<i32>() else {
                    break 'read;
                };
                values.push(value);
                if values.len() == needed {
                    break 'read;
                }
            }
        }

        if values.len() < needed {
            return Err(MatrixError::InsufficientData {
                needed,
                found: values.len(),
            });
        }

        log::debug!(
            "read {} integer tokens after skipping {} lines",
            needed,
            lines_to_skip
        );
        self.data.copy_from_slice(&values);
        Ok(())
    }

    /// Opens `path` and delegates to [`read_from`](Self::read_from).
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        lines_to_skip: usize,
    ) -> Result<(), MatrixError> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file), lines_to_skip)
    }
}
