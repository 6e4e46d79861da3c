/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Heading after a quarter turn to the left: up -> left -> down -> right -> up
    pub fn turned_left(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Heading after a quarter turn to the right (the reverse cycle of `turned_left`)
    pub fn turned_right(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A navigation command, either absolute or relative to the current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move in a specific direction
    Move(Direction),
    /// Keep going straight
    Continue,
    /// Quarter turn to the left of the current heading
    TurnLeft,
    /// Quarter turn to the right of the current heading
    TurnRight,
}

impl Action {
    /// Resolve this command against `current` into the heading it asks for.
    ///
    /// Pure: the result does not depend on anything but the two arguments. Whether
    /// the heading is actually allowed is decided by [`Steering`](super::Steering).
    pub fn resolve(self, current: Direction) -> Direction {
        match self {
            Action::Move(direction) => direction,
            Action::Continue => current,
            Action::TurnLeft => current.turned_left(),
            Action::TurnRight => current.turned_right(),
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_left_turn_cycle() {
        let mut heading = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            heading = heading.turned_left();
            seen.push(heading);
        }
        assert_eq!(
            seen,
            vec![Direction::Left, Direction::Down, Direction::Right, Direction::Up]
        );
    }

    #[test]
    fn test_right_turn_undoes_left_turn() {
        for dir in ALL {
            assert_eq!(dir.turned_left().turned_right(), dir);
            assert_eq!(dir.turned_right().turned_left(), dir);
        }
    }

    #[test]
    fn test_relative_turns_never_reverse() {
        for dir in ALL {
            assert!(!Action::TurnLeft.resolve(dir).is_opposite(dir));
            assert!(!Action::TurnRight.resolve(dir).is_opposite(dir));
            assert_eq!(Action::Continue.resolve(dir), dir);
        }
    }

    #[test]
    fn test_absolute_move_ignores_current_heading() {
        assert_eq!(
            Action::Move(Direction::Down).resolve(Direction::Left),
            Direction::Down
        );
        assert_eq!(Action::from(Direction::Up).resolve(Direction::Down), Direction::Up);
    }
}
