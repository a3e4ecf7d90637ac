mod clock;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::game::{GameConfig, SnakeGame, DEFAULT_TICKS_PER_SECOND};
use crate::grid::Grid;
use crate::term::TermManager;

pub type TermInt = u16;
pub type PixelInt = u32;
/// (column, row) on the board.
pub type Cell = (i32, i32);

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a board whose edges wrap around")]
struct Cli {
    /// Board width in pixels
    #[arg(long, default_value_t = 640)]
    width: PixelInt,

    /// Board height in pixels
    #[arg(long, default_value_t = 480)]
    height: PixelInt,

    /// Side of one square cell in pixels
    #[arg(long, default_value_t = 20)]
    cell_size: PixelInt,

    /// Game ticks per second
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND)]
    speed: u32,

    /// Where to write the log, the terminal is busy drawing the game
    #[arg(long, default_value = "wrap_snake.log")]
    log_file: PathBuf,

    /// How much to write to the log
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Copy, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Error creating log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file).context("Error setting up logging")?;

    let grid = Grid::new(cli.width, cli.height, cli.cell_size)?;
    let config = GameConfig::new(grid, cli.speed)?;
    info!(
        "Starting on a {}x{} board ({} px cells) at {} ticks/s",
        grid.columns(), grid.rows(), grid.cell_size(), config.ticks_per_second
    );

    let mut game = SnakeGame::new(config, rand::thread_rng());
    debug!("First food at {:?}", game.food().position());
    let mut term = TermManager::acquire(&grid)?;
    // The terminal goes back to normal when `term` drops, error or not
    game.run(&mut term)?;

    info!("Exiting with a snake of length {}", game.snake().length());
    Ok(())
}
