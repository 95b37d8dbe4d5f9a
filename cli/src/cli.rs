//! Running a simulation from the command line.

use crate::args::{Args, Source};
use green_vs_red_lib::{input, Config, Error as SimError, Simulation, DEFAULT_MAX_CELLS};
use log::debug;
use serde::Serialize;
use std::{
    error::Error,
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufRead, BufReader, IsTerminal, Lines},
    path::Path,
};

/// The result of a run, for `--json`.
#[derive(Serialize)]
struct Report {
    x: usize,
    y: usize,
    generations: u64,
    green_count: usize,
}

/// Input lines, with prompts on stderr when someone is typing them.
struct Prompter<R> {
    lines: Lines<R>,
    interactive: bool,
}

impl<R: BufRead> Prompter<R> {
    fn new(reader: R, interactive: bool) -> Self {
        Prompter {
            lines: reader.lines(),
            interactive,
        }
    }

    fn prompt(&self, text: &str) {
        if self.interactive {
            eprintln!("{}", text);
        }
    }

    fn next_line(&mut self) -> Result<String, Box<dyn Error>> {
        Ok(self.lines.next().ok_or("unexpected end of input")??)
    }
}

/// Reads a simulation line by line, and sets it up.
fn read_simulation<R: BufRead>(
    reader: R,
    interactive: bool,
    max_cells: u64,
) -> Result<Simulation, Box<dyn Error>> {
    let mut lines = Prompter::new(reader, interactive);
    let mut simulation = Simulation::with_max_cells(max_cells);

    lines.prompt("Grid size, as `height, width` (0 < height <= width < 1000):");
    let (height, width) = input::parse_grid_size(&lines.next_line()?)?;
    simulation.init_grid(height, width)?;

    lines.prompt(&format!(
        "{} rows of `0` (red) and `1` (green), each {} long:",
        height, width
    ));
    for row in 0..height {
        let cells = input::parse_row(row, &lines.next_line()?, width)?;
        simulation.load_cells(row, &cells)?;
    }
    simulation.finalize_generation_zero()?;

    lines.prompt("Observed cell and number of generations, as `x, y, n`:");
    let observed = input::parse_observed_cell(&lines.next_line()?, height, width)?;
    simulation.set_observed_cell(observed.x, observed.y, observed.generations)?;
    Ok(simulation)
}

/// Parses a config: TOML for `toml`, YAML for `yaml` and `yml`, and JSON
/// for any other extension.
fn parse_config(text: &str, extension: Option<&str>) -> Result<Config, Box<dyn Error>> {
    Ok(match extension {
        Some("toml") => toml::from_str(text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(text)?,
        _ => serde_json::from_str(text)?,
    })
}

/// Loads a config file, choosing the format by the extension.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text, path.extension().and_then(OsStr::to_str))?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Sets up the simulation, runs it, and prints the result.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let max_cells = args.max_cells.unwrap_or(DEFAULT_MAX_CELLS);
    let mut simulation = match &args.source {
        Source::Config(path) => {
            let mut config = load_config(path)?;
            if let Some(seed) = args.seed {
                config = config.set_seed(seed);
            }
            if let Some(max_cells) = args.max_cells {
                config = config.set_max_cells(max_cells);
            }
            config.simulation()?
        }
        Source::Lines(Some(path)) => {
            read_simulation(BufReader::new(File::open(path)?), false, max_cells)?
        }
        Source::Lines(None) => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            read_simulation(stdin.lock(), interactive, max_cells)?
        }
    };

    let green_count = simulation.run()?;
    let observed = simulation.observed_cell().ok_or(SimError::NoObservedCell)?;

    if args.json {
        let report = Report {
            x: observed.x,
            y: observed.y,
            generations: observed.generations,
            green_count,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("The observed cell was green for {} generations!", green_count);
    }
    Ok(())
}
