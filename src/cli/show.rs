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
#[command(name = "show", about = "Reads a matrix from a text file and prints it.", long_about = None)]
pub struct CliArgs {
    /// The file containing the matrix, as whitespace-separated integers in
    /// row-major order.
    pub src: PathBuf,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip before reading.
    pub lines_to_skip: usize,

    #[clap(flatten)]
    pub shape: ShapeArgs,
}

pub fn main(args: CliArgs) -> Result<()> {
    let matrix = load_matrix(&args.src, args.shape.rows, args.shape.cols, args.lines_to_skip)?;
    print!("{}", matrix);
    Ok(())
}
