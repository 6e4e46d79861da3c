use std::time::Duration;

use tokio::time::{Instant, sleep_until};

use crate::game::GameStatus;

/// The single pending tick timer of a play session
///
/// Holds at most one deadline. Nothing is armed unless the game is running,
/// so pausing or finishing a game leaves no timer behind.
#[derive(Debug, Default)]
pub struct TickClock {
    deadline: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Replace any pending deadline with one `after` from now
    pub fn arm(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Armed iff `status` is running. An existing deadline is kept as is, so a
    /// new interval only applies to the next tick scheduled.
    pub fn sync(&mut self, status: GameStatus, interval: Duration) {
        match (status == GameStatus::Running, self.deadline) {
            (true, None) => self.arm(interval),
            (false, Some(_)) => self.disarm(),
            _ => {}
        }
    }

    /// Resolves at `deadline`; never resolves when there is none.
    pub async fn wait(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
