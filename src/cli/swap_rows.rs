/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::{load_matrix, ShapeArgs};

#[derive(Parser, Debug)]
#[command(name = "swap-rows", about = "Prints a matrix after exchanging two of its rows.", long_about = None)]
pub struct CliArgs {
    /// The file containing the matrix, as whitespace-separated integers in
    /// row-major order.
    pub src: PathBuf,

    /// The first row to exchange.
    pub row1: usize,

    /// The second row to exchange.
    pub row2: usize,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip before reading.
    pub lines_to_skip: usize,

    #[clap(flatten)]
    pub shape: ShapeArgs,
}

pub fn main(args: CliArgs) -> Result<()> {
    let mut matrix = load_matrix(&args.src, args.shape.rows, args.shape.cols, args.lines_to_skip)?;
    matrix.swap_rows(args.row1, args.row2)?;
    print!("{}", matrix);
    Ok(())
}
