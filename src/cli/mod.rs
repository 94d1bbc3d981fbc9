/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each command is implemented as a submodule with its own `CliArgs` parser
//! and `main` function.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::Path;

use crate::matrix::Matrix;

pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    pub fn version_string() -> String {
        format!(
            "{}
git info: {} {} {}
build info: built on {} for {} with {}",
            PKG_VERSION,
            GIT_VERSION.unwrap_or(""),
            GIT_COMMIT_HASH.unwrap_or(""),
            match GIT_DIRTY {
                None => "",
                Some(true) => "(dirty)",
                Some(false) => "(clean)",
            },
            BUILT_TIME_UTC,
            TARGET,
            RUSTC_VERSION
        )
    }
}

pub mod add;
pub mod demo;
pub mod diagonal_sum;
pub mod multiply;
pub mod show;
pub mod swap_rows;

/// Shared CLI arguments for the shape of the matrices to read.
///
/// The defaults reproduce the classic exercise file: two 4x4 matrices stored
/// back to back, one matrix row per line.
#[derive(Args, Debug, Clone, Copy)]
pub struct ShapeArgs {
    #[arg(short = 'r', long, default_value_t = 4)]
    /// The number of rows of each matrix.
    pub rows: usize,

    #[arg(short = 'c', long, default_value_t = 4)]
    /// The number of columns of each matrix.
    pub cols: usize,
}

/// Shared CLI arguments for commands reading two matrices from one source.
#[derive(Args, Debug, Clone, Copy)]
pub struct PairSkipArgs {
    #[arg(long, default_value_t = 0)]
    /// How many lines to skip before reading the first matrix.
    pub first_skip: usize,

    #[arg(long)]
    /// How many lines to skip before reading the second matrix. Defaults to
    /// the first skip plus the number of rows, which reads back-to-back
    /// matrices from files with one matrix row per line.
    pub second_skip: Option<usize>,
}

impl PairSkipArgs {
    /// Returns the skip offset of the second matrix for the given row count.
    pub fn second_skip_or(&self, rows: usize) -> usize {
        self.second_skip.unwrap_or(self.first_skip + rows)
    }
}

/// Reads a single matrix of the given shape from `path`.
pub fn load_matrix(
    path: impl AsRef<Path>,
    rows: usize,
    cols: usize,
    lines_to_skip: usize,
) -> Result<Matrix> {
    let path = path.as_ref();
    let mut matrix = Matrix::new(rows, cols)?;
    matrix.load(path, lines_to_skip).with_context(|| {
        format!(
            "Cannot load a {}x{} matrix from {} (skipping {} lines)",
            rows,
            cols,
            path.display(),
            lines_to_skip
        )
    })?;
    log::info!(
        "Loaded a {}x{} matrix from {} (skipped {} lines)",
        rows,
        cols,
        path.display(),
        lines_to_skip
    );
    Ok(matrix)
}

/// Reads two matrices of the same shape laid out back to back in `path`.
pub fn load_pair(
    path: impl AsRef<Path>,
    shape: ShapeArgs,
    skips: PairSkipArgs,
) -> Result<(Matrix, Matrix)> {
    let path = path.as_ref();
    let first = load_matrix(path, shape.rows, shape.cols, skips.first_skip)?;
    let second = load_matrix(path, shape.rows, shape.cols, skips.second_skip_or(shape.rows))?;
    Ok((first, second))
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Show(show::CliArgs),
    Add(add::CliArgs),
    Multiply(multiply::CliArgs),
    DiagonalSum(diagonal_sum::CliArgs),
    SwapRows(swap_rows::CliArgs),
    Demo(demo::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "densemat", version = build_info::version_string())]
/// Tools to load, combine, and query dense integer matrices stored in
/// whitespace-delimited text files.
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

pub fn init_envlogger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        writeln!(
            buf,
            "{}.{:03} {style}{}{style:#} {} - {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.init();
    Ok(())
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Show(args) => show::main(args),
        SubCommands::Add(args) => add::main(args),
        SubCommands::Multiply(args) => multiply::main(args),
        SubCommands::DiagonalSum(args) => diagonal_sum::main(args),
        SubCommands::SwapRows(args) => swap_rows::main(args),
        SubCommands::Demo(args) => demo::main(args),
    }
}
