use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Coords;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("score file {path:?} is malformed: {source}")]
    ScoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid must be at least 2x2, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },

    #[error("cell {pos:?} is outside the {width}x{height} grid")]
    OffGrid { pos: Coords, width: u16, height: u16 },

    #[error("terminal is {have:?} but the board needs at least {need:?}")]
    TerminalTooSmall { have: Coords, need: Coords },
}

pub type Result<T> = std::result::Result<T, Error>;
