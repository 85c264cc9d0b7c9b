use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use chelate::parse::{self, Format};
use chelate::render;

/// Solve a Numberlink puzzle by reduction to SAT.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file; `.csv` files are comma-delimited, anything else is one
    /// character per cell.
    puzzle: PathBuf,
    /// Skip the colored rendering of the solution.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = match fs::read_to_string(&args.puzzle) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("cannot read {}: {}", args.puzzle.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let grid = match parse::parse(&input, Format::from_extension(&args.puzzle)) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("cannot parse {}: {}", args.puzzle.display(), err);
            return ExitCode::FAILURE;
        }
    };

    info!("parsed {0}x{0} puzzle with {1} label(s)", grid.side(), grid.num_labels());
    println!("{}", grid);

    match grid.solve() {
        Ok(Some(solved)) => {
            println!("{}", solved);
            if !args.no_color {
                print!("{}", render::colored(&solved));
                println!("{}", render::color_key(&solved));
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("no solution");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
