//! Parsing command-line arguments.

use clap::{crate_description, crate_version, value_parser, Arg, ArgAction, Command};

/// Which demo to run, with its geometry.
pub(crate) enum Mode {
    /// The 1-dimensional world.
    Line { length: isize, index: isize },
    /// The 2-dimensional world.
    Grid { size: isize, row: isize, col: isize },
}

/// The parsed command line.
pub(crate) struct Args {
    pub(crate) mode: Mode,
    pub(crate) generations: u32,
    pub(crate) random: bool,
    pub(crate) density: f64,
    pub(crate) seed: Option<u64>,
}

/// Parses the command line, exiting with a usage message on bad input.
pub(crate) fn parse() -> Args {
    let matches = Command::new("gridlife")
        .version(crate_version!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("line")
                .about("Runs the 1-dimensional world")
                .long_about(
                    "Runs the 1-dimensional world\n\
                     \n\
                     Seeds a row of cells with a blinker (or a random soup, with \
                     --random), then prints one text line per generation: `#` for \
                     living cells, `-` for dead ones.\n",
                )
                .arg(
                    Arg::new("LENGTH")
                        .help("Number of cells in the row")
                        .short('l')
                        .long("length")
                        .value_parser(value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("12"),
                )
                .arg(
                    Arg::new("INDEX")
                        .help("Where the blinker is stamped")
                        .short('i')
                        .long("index")
                        .value_parser(value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("3"),
                )
                .arg(
                    Arg::new("GENERATIONS")
                        .help("How many generations to evolve")
                        .short('g')
                        .long("generations")
                        .value_parser(value_parser!(u32))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("RANDOM")
                        .help("Seeds a random soup instead of the blinker")
                        .short('r')
                        .long("random")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("DENSITY")
                        .help("Probability that a soup cell starts alive")
                        .short('d')
                        .long("density")
                        .value_parser(value_parser!(f64))
                        .default_value("0.3")
                        .requires("RANDOM"),
                )
                .arg(
                    Arg::new("SEED")
                        .help("Seed for the soup, for reproducible runs")
                        .short('s')
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .requires("RANDOM"),
                ),
        )
        .subcommand(
            Command::new("grid")
                .about("Runs the 2-dimensional world")
                .long_about(
                    "Runs the 2-dimensional world\n\
                     \n\
                     Seeds a square of cells with a glider (or a random soup, with \
                     --random), then prints one text block per generation, one row \
                     per line: `#` for living cells, `-` for dead ones.\n",
                )
                .arg(
                    Arg::new("SIZE")
                        .help("Edge length of the square world")
                        .short('n')
                        .long("size")
                        .value_parser(value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("7"),
                )
                .arg(
                    Arg::new("ROW")
                        .help("Top row of the stamped glider")
                        .long("row")
                        .value_parser(value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("3"),
                )
                .arg(
                    Arg::new("COL")
                        .help("Left column of the stamped glider")
                        .long("col")
                        .value_parser(value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("1"),
                )
                .arg(
                    Arg::new("GENERATIONS")
                        .help("How many generations to evolve")
                        .short('g')
                        .long("generations")
                        .value_parser(value_parser!(u32))
                        .default_value("4"),
                )
                .arg(
                    Arg::new("RANDOM")
                        .help("Seeds a random soup instead of the glider")
                        .short('r')
                        .long("random")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("DENSITY")
                        .help("Probability that a soup cell starts alive")
                        .short('d')
                        .long("density")
                        .value_parser(value_parser!(f64))
                        .default_value("0.3")
                        .requires("RANDOM"),
                )
                .arg(
                    Arg::new("SEED")
                        .help("Seed for the soup, for reproducible runs")
                        .short('s')
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .requires("RANDOM"),
                ),
        )
        .get_matches();

    let (mode, sub) = match matches.subcommand() {
        Some(("line", sub)) => (
            Mode::Line {
                length: *sub.get_one("LENGTH").unwrap(),
                index: *sub.get_one("INDEX").unwrap(),
            },
            sub,
        ),
        Some(("grid", sub)) => (
            Mode::Grid {
                size: *sub.get_one("SIZE").unwrap(),
                row: *sub.get_one("ROW").unwrap(),
                col: *sub.get_one("COL").unwrap(),
            },
            sub,
        ),
        _ => unreachable!("a subcommand is required"),
    };

    Args {
        mode,
        generations: *sub.get_one("GENERATIONS").unwrap(),
        random: sub.get_flag("RANDOM"),
        density: *sub.get_one("DENSITY").unwrap(),
        seed: sub.get_one("SEED").copied(),
    }
}
