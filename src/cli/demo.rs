/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::{load_pair, PairSkipArgs, ShapeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "demo",
    about = "Runs the whole exercise: prints two matrices, their sum, their product, the first matrix's diagonal sum, and the first matrix after a row swap.",
    long_about = None
)]
pub struct CliArgs {
    /// The file containing both matrices, as whitespace-separated integers in
    /// row-major order.
    pub src: PathBuf,

    #[clap(flatten)]
    pub shape: ShapeArgs,

    #[clap(flatten)]
    pub skips: PairSkipArgs,
}

pub fn main(args: CliArgs) -> Result<()> {
    let (mut first, second) = load_pair(&args.src, args.shape, args.skips)?;

    println!("Matrix A:");
    print!("{}", first);

    println!();
    println!("Matrix B:");
    print!("{}", second);

    println!();
    println!("Sum of Matrix A and Matrix B:");
    print!("{}", first.add(&second)?);

    println!();
    println!("Product of Matrix A and Matrix B:");
    print!("{}", first.multiply(&second)?);

    println!();
    println!("Sum of the diagonals in Matrix A: {}", first.sum_of_diagonals()?);

    println!();
    println!("Matrix A after swapping rows 0 and 1:");
    first.swap_rows(0, 1)?;
    print!("{}", first);

    Ok(())
}
