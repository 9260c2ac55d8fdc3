//! Command-line front end for the dedoku solver.
//!
//! Reads a puzzle from an argument, a file or stdin, runs the
//! constraint-propagation solver, and prints the resulting grid together
//! with the outcome line. An unsolved puzzle is a reported result, not a
//! failure; only unreadable or malformed input exits nonzero.
//!
//! # Usage
//!
//! ```sh
//! dedoku "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! dedoku --file puzzle.txt
//! cat puzzle.txt | dedoku
//! dedoku --line --pass-limit 50 --file puzzle.txt
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use dedoku_core::{Grid, ParseGridError};
use dedoku_solver::{DEFAULT_PASS_LIMIT, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle: 81 cells as digits 1-9, with `.`, `_` or `0` for
    /// blanks. Whitespace is ignored. Read from stdin when neither this
    /// nor --file is given.
    #[arg(value_name = "PUZZLE", conflicts_with = "file")]
    puzzle: Option<String>,

    /// Read the puzzle from a file instead.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Give up after this many passes.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_PASS_LIMIT)]
    pass_limit: u32,

    /// Print the result as a compact 81-character line instead of a
    /// framed grid.
    #[arg(long)]
    line: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read input: {_0}")]
    Read(io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(ParseGridError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("dedoku: {err}");
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let input = read_input(args)?;
    let mut grid: Grid = input.parse()?;
    log::debug!("initial grid:\n{grid}");

    let solver = Solver::new().with_pass_limit(args.pass_limit);
    let outcome = solver.solve(&mut grid);
    log::info!("{outcome}");

    if args.line {
        println!("{}", grid.to_line_string());
    } else {
        println!("{grid}");
    }
    println!("{outcome}");
    Ok(())
}

fn read_input(args: &Args) -> Result<String, io::Error> {
    if let Some(puzzle) = &args.puzzle {
        return Ok(puzzle.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
