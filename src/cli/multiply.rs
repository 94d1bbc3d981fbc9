/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::{load_matrix, PairSkipArgs, ShapeArgs};

#[derive(Parser, Debug)]
#[command(name = "multiply", about = "Prints the product of two matrices stored in the same file.", long_about = None)]
pub struct CliArgs {
    /// The file containing both matrices, as whitespace-separated integers in
    /// row-major order.
    pub src: PathBuf,

    #[clap(flatten)]
    pub shape: ShapeArgs,

    #[arg(long)]
    /// The number of columns of the right matrix. Defaults to the column
    /// count of the left matrix.
    pub second_cols: Option<usize>,

    #[clap(flatten)]
    pub skips: PairSkipArgs,
}

pub fn main(args: CliArgs) -> Result<()> {
    let second_cols = args.second_cols.unwrap_or(args.shape.cols);
    let first = load_matrix(&args.src, args.shape.rows, args.shape.cols, args.skips.first_skip)?;
    let second = load_matrix(
        &args.src,
        args.shape.cols,
        second_cols,
        args.skips.second_skip_or(args.shape.rows),
    )?;
    print!("{}", first.multiply(&second)?);
    Ok(())
}
