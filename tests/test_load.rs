/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::{Cursor, Write};

use anyhow::Result;
use densemat::{Matrix, MatrixError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

#[test]
fn test_read_row_major() -> Result<()> {
    let mut m = Matrix::new(2, 3)?;
    m.read_from(Cursor::new("1 2 3\n4 5 6\n"), 0)?;
    assert_eq!(m, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));
    Ok(())
}

#[test]
fn test_tokens_cross_line_boundaries() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    m.read_from(Cursor::new("1\n2 3\n4"), 0)?;
    assert_eq!(m, Matrix::from_rows([[1, 2], [3, 4]]));
    Ok(())
}

#[test]
fn test_skip_lines() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    m.read_from(Cursor::new("these tokens\nare not read\n1 2\n3 4\n"), 2)?;
    assert_eq!(m, Matrix::from_rows([[1, 2], [3, 4]]));
    Ok(())
}

#[test]
fn test_skip_past_the_end() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    assert!(matches!(
        m.read_from(Cursor::new("1 2\n"), 10),
        Err(MatrixError::InsufficientData {
            needed: 4,
            found: 0,
        })
    ));
    Ok(())
}

#[test]
fn test_insufficient_data() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    assert!(matches!(
        m.read_from(Cursor::new("1 2 3"), 0),
        Err(MatrixError::InsufficientData {
            needed: 4,
            found: 3,
        })
    ));
    Ok(())
}

#[test]
fn test_non_integer_token_ends_the_stream() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    assert!(matches!(
        m.read_from(Cursor::new("1 2 x 3 4"), 0),
        Err(MatrixError::InsufficientData {
            needed: 4,
            found: 2,
        })
    ));
    Ok(())
}

#[test]
fn test_failed_read_leaves_contents_untouched() -> Result<()> {
    let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
    assert!(m.read_from(Cursor::new("9 9 9"), 0).is_err());
    assert_eq!(m, Matrix::from_rows([[1, 2], [3, 4]]));
    Ok(())
}

#[test]
fn test_read_overwrites_previous_contents() -> Result<()> {
    let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
    m.read_from(Cursor::new("5 6 7 8"), 0)?;
    assert_eq!(m, Matrix::from_rows([[5, 6], [7, 8]]));
    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let mut m = Matrix::new(2, 2)?;
    assert!(matches!(
        m.load("this/file/does/not/exist.txt", 0),
        Err(MatrixError::UnreadableSource(_))
    ));
    Ok(())
}

#[test]
fn test_random_round_trip() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    let values = (0..30).map(|_| rng.random_range(-1000..1000)).collect::<Vec<i32>>();

    let mut file = NamedTempFile::new()?;
    for chunk in values.chunks(6) {
        writeln!(
            file,
            "{}",
            chunk
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )?;
    }
    file.flush()?;

    let mut m = Matrix::new(5, 6)?;
    m.load(file.path(), 0)?;
    for i in 0..5 {
        for j in 0..6 {
            assert_eq!(m[i][j], values[i * 6 + j]);
        }
    }
    Ok(())
}

#[test]
fn test_two_matrices_back_to_back() -> Result<()> {
    // The classic exercise: an 8-line file holding two 4x4 matrices, the
    // second one starting after 4 lines.
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 16\n16 15 14 13\n12 11 10 9\n8 7 6 5\n4 3 2 1\n"
    )?;
    file.flush()?;

    let mut a = Matrix::new(4, 4)?;
    a.load(file.path(), 0)?;
    let mut b = Matrix::new(4, 4)?;
    b.load(file.path(), 4)?;

    assert_eq!(
        a,
        Matrix::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]])
    );
    assert_eq!(
        b,
        Matrix::from_rows([[16, 15, 14, 13], [12, 11, 10, 9], [8, 7, 6, 5], [4, 3, 2, 1]])
    );

    assert_eq!(a.add(&b)?, Matrix::from_rows([[17; 4]; 4]));

    assert_eq!(
        a.multiply(&b)?,
        Matrix::from_rows([
            [80, 70, 60, 50],
            [240, 214, 188, 162],
            [400, 358, 316, 274],
            [560, 502, 444, 386],
        ])
    );

    assert_eq!(a.sum_of_diagonals()?, 68);

    a.swap_rows(0, 1)?;
    assert_eq!(
        a,
        Matrix::from_rows([[5, 6, 7, 8], [1, 2, 3, 4], [9, 10, 11, 12], [13, 14, 15, 16]])
    );
    Ok(())
}
