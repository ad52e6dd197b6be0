mod config;
mod controller;
mod driver;
mod help;
mod life;
mod settings;
mod terminal;

use clap::Parser;
use config::{Density, LifeConfig, PrintConfig};
use log::{info, LevelFilter};
use settings::Settings;
use simple_logger::SimpleLogger;
use std::io;

/// Fallback size for print mode when stdout is not a terminal
const PRINT_FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Parser)]
#[command(name = "termlife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal", long_about = None)]
struct Cli {
    /// Wrap the grid at the edges, treating it like a torus
    #[arg(short, long)]
    wrap: bool,

    /// Probability that a seeded cell starts alive, in (0, 1]
    #[arg(short, long)]
    density: Option<Density>,

    /// Seconds per generation
    #[arg(short, long)]
    time: Option<f32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Character drawn for live cells
    #[arg(short, long)]
    char: Option<char>,

    /// Print the final frame to stdout (no interactive display)
    #[arg(short, long)]
    print: bool,

    /// Generations to simulate before printing (print mode)
    #[arg(short, long, default_value = "0")]
    generations: u64,

    /// Grid width for print mode (defaults to terminal width)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height for print mode (defaults to terminal height)
    #[arg(long)]
    height: Option<usize>,

    /// Log level written to stderr: off, error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: LevelFilter,
}

impl Cli {
    /// Layer CLI flags over the settings file over built-in defaults
    fn life_config(&self, settings: &Settings) -> LifeConfig {
        let defaults = LifeConfig::default();
        let file = &settings.life;
        LifeConfig {
            wrap: self.wrap || file.wrap.unwrap_or(defaults.wrap),
            density: self.density.or(file.density).unwrap_or(defaults.density),
            time_step: self.time.or(file.time).unwrap_or(defaults.time_step),
            seed: self.seed,
            alive_char: self.char.or(file.glyph).unwrap_or(defaults.alive_char),
            dead_char: defaults.dead_char,
        }
    }

    fn print_config(&self) -> PrintConfig {
        let (cols, rows) = crossterm::terminal::size().unwrap_or(PRINT_FALLBACK_SIZE);
        PrintConfig {
            width: self.width.unwrap_or(cols as usize),
            height: self.height.unwrap_or(rows as usize),
            generations: self.generations,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = SimpleLogger::new().with_level(cli.log_level).init() {
        eprintln!("termlife: logging disabled: {}", err);
    }

    let settings = Settings::load();
    let config = cli.life_config(&settings);
    info!(
        "termlife v{}: wrap={} density={} tick={}s",
        env!("CARGO_PKG_VERSION"),
        config.wrap,
        config.density,
        config.time_step
    );

    if cli.print {
        driver::print(&config, cli.print_config())
    } else {
        driver::run(&config)
    }
}
