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
#[command(name = "add", about = "Prints the sum of two matrices stored in the same file.", long_about = None)]
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
    let (first, second) = load_pair(&args.src, args.shape, args.skips)?;
    print!("{}", first.add(&second)?);
    Ok(())
}
