mod app;
mod colors;
mod config;
mod engine;
mod error;
mod grid;
mod headless;
mod help;
mod logging;
mod patterns;
mod settings;
mod simulation;
mod terminal;
mod world;

use clap::{Args, Parser, Subcommand};
use config::LifeConfig;
use error::AppError;
use headless::PrintOptions;
use logging::LogTarget;
use patterns::{Pattern, PATTERNS};
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Conway's Game of Life on a bounded, editable terminal grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Grid options shared by every mode; unset flags fall back to the config file
#[derive(Args)]
struct GridArgs {
    /// Spacing between cell centers (screen units)
    #[arg(short = 'P', long, allow_negative_numbers = true)]
    pitch: Option<i32>,

    /// Margin between the screen edge and the grid
    #[arg(long, allow_negative_numbers = true)]
    padding: Option<i32>,

    /// Most cells a randomize can bring to life
    #[arg(short = 'n', long)]
    population: Option<usize>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seed with a named pattern instead of random cells
    #[arg(short, long)]
    pattern: Option<String>,

    /// Settings file (default: <config dir>/lifegrid/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit and run the simulation in the terminal
    Run {
        #[command(flatten)]
        grid: GridArgs,

        /// Generations per second
        #[arg(short, long)]
        tps: Option<u32>,
    },

    /// Step a seeded grid without a terminal and print the result
    Print {
        #[command(flatten)]
        grid: GridArgs,

        /// Screen width in screen units
        #[arg(short = 'W', long)]
        width: Option<i32>,

        /// Screen height in screen units
        #[arg(short = 'H', long)]
        height: Option<i32>,

        /// Number of generations to run
        #[arg(short, long, default_value = "0")]
        generations: u64,

        /// Print a JSON report instead of a text grid
        #[arg(long)]
        json: bool,
    },

    /// List built-in patterns
    Patterns,
}

impl GridArgs {
    fn apply(&self, config: &mut LifeConfig) {
        if let Some(pitch) = self.pitch {
            config.cell_pitch = pitch;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(population) = self.population {
            config.max_population = population;
        }
    }

    fn pattern(&self) -> Result<Option<&'static Pattern>, AppError> {
        self.pattern
            .as_deref()
            .map(|name| patterns::find(name).ok_or_else(|| AppError::UnknownPattern(name.to_string())))
            .transpose()
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }

    fn load_settings(&self) -> Result<Settings, AppError> {
        Settings::load(self.config.as_deref())
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Run { grid, tps } => {
            let target = grid.log_file.as_deref().map_or(LogTarget::Off, LogTarget::File);
            logging::init(target)?;

            let mut config = grid.load_settings()?.terminal_config();
            grid.apply(&mut config);
            if let Some(tps) = tps {
                config.ticks_per_second = tps;
            }
            app::run(config, grid.seed(), grid.pattern()?)
        }
        Commands::Print {
            grid,
            width,
            height,
            generations,
            json,
        } => {
            let target = grid.log_file.as_deref().map_or(LogTarget::Stderr, LogTarget::File);
            logging::init(target)?;

            let mut config = grid.load_settings()?.life;
            grid.apply(&mut config);
            if let Some(width) = width {
                config.screen_width = width;
            }
            if let Some(height) = height {
                config.screen_height = height;
            }
            let options = PrintOptions {
                seed: grid.seed(),
                pattern: grid.pattern()?,
                generations,
                json,
            };
            print!("{}", headless::run(&config, &options)?);
            if json {
                println!();
            }
            Ok(())
        }
        Commands::Patterns => {
            for pattern in PATTERNS {
                let (rows, cols) = pattern.size();
                println!("{:<12} {:>2}x{:<2} {} cells", pattern.name, cols, rows, pattern.cells.len());
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lifegrid: {err}");
            ExitCode::FAILURE
        }
    }
}
