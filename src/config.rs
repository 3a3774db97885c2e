use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::Result;
use crate::grid::Grid;
use crate::ticker::Ticker;

#[derive(Parser, Debug, Clone)]
#[command(name = "gridsnake", version, about = "Grid snake on a wrapping board")]
pub struct Config {
    /// Board width in cells
    #[arg(long, default_value_t = 25)]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = 20)]
    pub height: u16,

    /// Length of one frame of the driving clock, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub frame_ms: u64,

    /// Frames between two game steps
    #[arg(long, default_value_t = 6)]
    pub frames_per_step: u32,

    /// Where the best score is kept
    #[arg(long, default_value = "best_score.json")]
    pub score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Seed for food placement, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height)
    }

    pub fn ticker(&self) -> Ticker {
        Ticker::new(Duration::from_millis(self.frame_ms), self.frames_per_step)
    }
}
