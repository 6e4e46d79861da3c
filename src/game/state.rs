use super::action::Direction;
use super::steering::Steering;

/// Side length of the board as a coordinate bound, saturating instead of wrapping
pub fn grid_extent(grid_size: usize) -> i32 {
    i32::try_from(grid_size).unwrap_or(i32::MAX)
}

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies on a `grid_size` x `grid_size` board
    pub fn is_within(&self, grid_size: usize) -> bool {
        let size = grid_extent(grid_size);
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// True when `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// The snake's body, head first
///
/// A `Snake` is never edited in place by the engine: every step builds a new
/// body and the old one is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.opposite().delta();
        let body = std::iter::successors(Some(head), |segment| Some(segment.moved_by(dx, dy)))
            .take(length.max(1))
            .collect();

        Self { body }
    }

    pub fn from_segments(body: Vec<Position>) -> Self {
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Body cells a new head may not enter.
    ///
    /// When the snake is not growing its tail vacates this tick, so the tail
    /// cell is left out.
    pub fn blocking_segments(&self, growing: bool) -> &[Position] {
        if growing {
            &self.body
        } else {
            &self.body[..self.body.len() - 1]
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Body advanced to `new_head`, keeping the tail only when growing
    pub fn advanced(&self, new_head: Position, growing: bool) -> Snake {
        let keep = if growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        let body = std::iter::once(new_head)
            .chain(self.body[..keep].iter().copied())
            .collect();

        Snake { body }
    }

    /// Every segment follows the previous one by a single orthogonal step
    pub fn is_contiguous(&self) -> bool {
        self.body.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
    }

    /// No cell appears twice
    pub fn has_unique_segments(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        self.body.iter().all(|segment| seen.insert(*segment))
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
    /// The snake fills the whole board
    Won,
}

impl GameStatus {
    /// Game over or won: nothing more will happen until a restart
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub steering: Steering,
    pub grid_size: usize,
    pub score: u32,
    pub steps: u32,
    pub status: GameStatus,
    pub last_collision: Option<CollisionType>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, heading: Direction, food: Position, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            steering: Steering::new(heading),
            grid_size,
            score: 0,
            steps: 0,
            status: GameStatus::NotStarted,
            last_collision: None,
        }
    }

    /// Heading the snake is currently travelling in
    pub fn heading(&self) -> Direction {
        self.steering.committed()
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }
}
