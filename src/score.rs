use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// A single named slot holding the best score ever reached.
pub trait ScoreStore {
    fn load(&self) -> Result<Option<u32>>;
    fn save(&mut self, best: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct BestScore {
    best: u32,
}

/// Keeps the best score as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<Option<u32>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let slot: BestScore = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| Error::ScoreFormat { path: self.path.clone(), source })?;
        Ok(Some(slot.best))
    }

    fn save(&mut self, best: u32) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, &BestScore { best })
            .map_err(|source| Error::ScoreFormat { path: self.path.clone(), source })?;
        writer.flush()?;
        Ok(())
    }
}

/// In-process slot, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn new(best: Option<u32>) -> Self {
        MemoryStore { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.best = Some(best);
        Ok(())
    }
}

pub struct Scoreboard {
    store: Box<dyn ScoreStore>,
    best: u32,
}

impl Scoreboard {
    /// Reads the persisted best. A missing or unreadable slot counts as 0.
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.load() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "could not read best score, starting from 0");
                0
            }
        };

        Scoreboard { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Raises the best score if `score` beats it. Returns whether it did.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;
        info!(best = score, "new best score");
        if let Err(e) = self.store.save(score) {
            warn!(error = %e, "could not persist best score");
        }
        true
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }
}
