//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command,
    Error,
};
use std::path::PathBuf;

/// Where the simulation is read from.
pub(crate) enum Source {
    /// Line by line, from a file or from stdin.
    Lines(Option<PathBuf>),
    /// A config file.
    Config(PathBuf),
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) source: Source,
    pub(crate) seed: Option<u64>,
    pub(crate) max_cells: Option<u64>,
    pub(crate) json: bool,
    pub(crate) verbose: u8,
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Simulates GreenVsRed, and counts how often a cell was green.\n\
             \n\
             The input is read line by line:\n\
             * the grid size, `height, width`, where 0 < height <= width < 1000;\n\
             * one line per row of generation zero, with `0` for red and `1` for \
             green cells;\n\
             * the observed cell and the number of generations, `x, y, n`, \
             where x is the row and y the column.\n\
             \n\
             A cell becomes green with 3 or 6 green cells around it, keeps its \
             type with 2, and becomes red otherwise.\n",
        )
        .arg(
            Arg::new("INPUT")
                .help("Reads the input from a file instead of stdin")
                .short('i')
                .long("input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("CONFIG"),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the whole simulation from a config file")
                .long_help(
                    "Reads the whole simulation from a config file\n\
                     The format is TOML for `.toml` files, YAML for `.yaml` and \
                     `.yml` files, and JSON otherwise.\n",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for a random generation zero")
                .long_help(
                    "Seed for a random generation zero\n\
                     Only used when the config file has no rows.\n",
                )
                .long("seed")
                .value_parser(value_parser!(u64))
                .requires("CONFIG"),
        )
        .arg(
            Arg::new("MAX")
                .help("Upper bound for the number of cells kept in memory")
                .long_help(
                    "Upper bound for the number of cells kept in memory\n\
                     Every generation is kept until the end of the run, so `n` \
                     generations of a `height` by `width` grid keep \
                     `height * width * (n + 1)` cells.\n",
                )
                .short('m')
                .long("max-cells")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("JSON")
                .help("Prints the result as JSON")
                .long("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more; repeat for even more")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = command().try_get_matches()?;

        let source = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => Source::Config(path.clone()),
            None => Source::Lines(matches.get_one::<PathBuf>("INPUT").cloned()),
        };

        Ok(Args {
            source,
            seed: matches.get_one::<u64>("SEED").copied(),
            max_cells: matches.get_one::<u64>("MAX").copied(),
            json: matches.get_flag("JSON"),
            verbose: matches.get_count("VERBOSE"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn seed_requires_config() {
        let result = command().try_get_matches_from(["green-vs-red", "--seed", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn input_conflicts_with_config() {
        let result = command().try_get_matches_from([
            "green-vs-red",
            "--input",
            "a.txt",
            "--config",
            "b.toml",
        ]);
        assert!(result.is_err());
    }
}
