use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or write the persisted best score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed score file {path:?}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("score store unavailable")]
    Unavailable,
}

/// A single persisted best score
pub trait ScoreStore {
    /// Stored value, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<u32>, StoreError>;

    fn save(&self, best: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    best_score: u32,
}

/// Best score kept as a small JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform's per-user data directory
    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "snake_tui").ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dirs.data_local_dir().join("best_score.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let record: ScoreRecord =
            serde_json::from_str(&json).map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(record.best_score))
    }

    fn save(&self, best: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let json = serde_json::to_string_pretty(&ScoreRecord { best_score: best }).map_err(
            |source| StoreError::Format {
                path: self.path.clone(),
                source,
            },
        )?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|err| self.io_error(err))?;
        std::fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))?;
        Ok(())
    }
}

/// In-memory store, used with `--no-persist` and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<u32>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(best: u32) -> Self {
        Self {
            value: Cell::new(Some(best)),
            saves: Cell::new(0),
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value.get()
    }

    /// Number of successful saves so far
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.value.get())
    }

    fn save(&self, best: u32) -> Result<(), StoreError> {
        self.value.set(Some(best));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
