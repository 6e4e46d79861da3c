use super::action::Direction;

/// Committed heading plus at most one heading queued for the next tick
///
/// Input handlers only ever call [`Steering::request`]; the tick calls
/// [`Steering::commit`] once before moving the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steering {
    committed: Direction,
    pending: Option<Direction>,
}

impl Steering {
    pub fn new(heading: Direction) -> Self {
        Self {
            committed: heading,
            pending: None,
        }
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Heading new requests are compared against: the queued one if any,
    /// else the committed one.
    pub fn active(&self) -> Direction {
        self.pending.unwrap_or(self.committed)
    }

    /// Queue `requested` for the next tick.
    ///
    /// Returns false and leaves the queue alone if `requested` reverses the
    /// active heading. An accepted request replaces any earlier pending one.
    pub fn request(&mut self, requested: Direction) -> bool {
        if self.active().is_opposite(requested) {
            return false;
        }
        self.pending = Some(requested);
        true
    }

    /// Take the pending heading, if any, and return the heading for this tick.
    ///
    /// A pending heading that would reverse the committed one is dropped.
    pub fn commit(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            if !self.committed.is_opposite(next) {
                self.committed = next;
            }
        }
        self.committed
    }
}
