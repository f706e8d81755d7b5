//! Running the demos.

use crate::args::{Args, Mode};
use gridlife_lib::{stamp_blinker, stamp_glider, Error, Grid, Line, DEAD};
use rand::{rngs::StdRng, SeedableRng};

/// Runs the selected demo, printing one rendered frame per generation.
pub(crate) fn run(args: &Args) -> Result<(), Error> {
    match args.mode {
        Mode::Line { length, index } => run_line(args, length, index),
        Mode::Grid { size, row, col } => run_grid(args, size, row, col),
    }
}

/// The 1-dimensional demo; every generation is a single text line.
fn run_line(args: &Args, length: isize, index: isize) -> Result<(), Error> {
    let mut line = Line::new(length, DEAD)?;
    if args.random {
        line.randomize(args.density, &mut rng(args.seed));
    } else {
        stamp_blinker(&mut line, index)?;
    }
    print!("{line}");
    for _ in 0..args.generations {
        line.evolve()?;
        print!("{line}");
    }
    Ok(())
}

/// The 2-dimensional demo; frames are separated by a blank line.
fn run_grid(args: &Args, size: isize, row: isize, col: isize) -> Result<(), Error> {
    let mut grid = Grid::new(size, size, DEAD)?;
    if args.random {
        grid.randomize(args.density, &mut rng(args.seed));
    } else {
        stamp_glider(&mut grid, row, col)?;
    }
    print!("{grid}");
    for _ in 0..args.generations {
        grid.evolve()?;
        println!();
        print!("{grid}");
    }
    Ok(())
}

/// A seeded generator when `--seed` is given, a fresh one otherwise.
fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
