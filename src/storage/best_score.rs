use tracing::{debug, warn};

use super::store::ScoreStore;

/// The best score seen so far, mirrored to a [`ScoreStore`] on a best-effort basis
///
/// Store failures are logged and otherwise ignored: the in-memory value keeps
/// working, it just won't survive the process.
pub struct BestScore {
    value: u32,
    store: Box<dyn ScoreStore>,
}

impl BestScore {
    /// Read the stored value once. Missing or unreadable values count as zero.
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let value = match store.load() {
            Ok(value) => value.unwrap_or(0),
            Err(err) => {
                warn!(error = %err, "could not read best score, starting from zero");
                0
            }
        };
        debug!(value, "best score loaded");
        Self { value, store }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record `score`; returns true when it beats the previous best.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(err) = self.store.save(score) {
            warn!(error = %err, score, "could not persist best score");
        }
        true
    }
}
