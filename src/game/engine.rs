use super::{
    action::Direction,
    config::GameConfig,
    spawn::spawn_food,
    state::{CollisionType, GameState, Position, Snake, grid_extent},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake grew to cover every cell, leaving nowhere to put food
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Body after the step; the input body on collision
    pub snake: Snake,
    /// Food after the step; the input food unless it was eaten
    pub food: Position,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn collided(snake: &Snake, food: Position, collision_type: CollisionType) -> Self {
        Self {
            snake: snake.clone(),
            food,
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type: Some(collision_type),
                board_full: false,
            },
        }
    }
}

/// The game engine: movement, collisions and food placement
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh game: centred snake heading right, food on an empty cell
    pub fn reset(&mut self) -> GameState {
        let center = grid_extent(self.config.grid_size) / 2;
        let snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        );
        let (food, _) = self.spawn_food_or_head(&snake);

        GameState::new(snake, Direction::Right, food, self.config.grid_size)
    }

    /// Advance `snake` one cell along `heading`.
    ///
    /// The inputs are not modified; the returned result carries a freshly built
    /// body. On collision the result repeats the inputs and `terminated` is set.
    pub fn step(&mut self, snake: &Snake, heading: Direction, food: Position) -> StepResult {
        let new_head = snake.head().moved_in_direction(heading);

        if !new_head.is_within(self.config.grid_size) {
            return StepResult::collided(snake, food, CollisionType::Wall);
        }

        let ate_food = new_head == food;

        if snake.blocking_segments(ate_food).contains(&new_head) {
            return StepResult::collided(snake, food, CollisionType::SelfCollision);
        }

        let next = snake.advanced(new_head, ate_food);

        let (next_food, board_full) = if ate_food {
            self.spawn_food_or_head(&next)
        } else {
            (food, false)
        };

        StepResult {
            snake: next,
            food: next_food,
            terminated: board_full,
            info: StepInfo {
                ate_food,
                collision_type: None,
                board_full,
            },
        }
    }

    /// Spawn food on an empty cell.
    ///
    /// With no empty cell left the food lands on the snake's head and the flag
    /// is set.
    pub fn spawn_food_or_head(&mut self, snake: &Snake) -> (Position, bool) {
        match spawn_food(&mut self.rng, snake, self.config.grid_size) {
            Some(food) => (food, false),
            None => (snake.head(), true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(grid_size: usize) -> GameEngine {
        GameEngine::new(GameConfig::new(grid_size).with_seed(9))
    }

    fn body(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake, body(&[(12, 12), (11, 12), (10, 12)]));
        assert_eq!(state.heading(), Direction::Right);
        assert!(!state.snake.contains(state.food));
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine(24);
        let snake = body(&[(12, 12), (11, 12), (10, 12)]);
        let food = Position::new(0, 0);

        let result = engine.step(&snake, Direction::Up, food);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(result.snake, body(&[(12, 11), (12, 12), (11, 12)]));
        assert_eq!(result.food, food);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = engine(24);
        let snake = body(&[(12, 12), (11, 12), (10, 12)]);

        let result = engine.step(&snake, Direction::Right, Position::new(13, 12));

        assert!(result.info.ate_food);
        assert!(!result.terminated);
        assert_eq!(result.snake, body(&[(13, 12), (12, 12), (11, 12), (10, 12)]));
        assert!(!result.snake.contains(result.food));
        assert!(result.food.is_within(24));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine(24);
        let snake = body(&[(0, 12), (1, 12), (2, 12)]);
        let food = Position::new(5, 5);

        let result = engine.step(&snake, Direction::Left, food);

        assert!(result.terminated);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(result.snake, snake);
        assert_eq!(result.food, food);
    }

    #[test]
    fn test_far_wall_collision() {
        let mut engine = engine(10);
        let snake = body(&[(9, 0), (8, 0), (7, 0)]);

        assert_eq!(
            engine.step(&snake, Direction::Right, Position::new(5, 5)).info.collision_type,
            Some(CollisionType::Wall)
        );
        assert_eq!(
            engine.step(&snake, Direction::Up, Position::new(5, 5)).info.collision_type,
            Some(CollisionType::Wall)
        );
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine(10);
        // Head at (5,5) heading up into its own body at (5,4)
        let snake = body(&[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)]);
        let food = Position::new(0, 0);

        let result = engine.step(&snake, Direction::Up, food);

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
        assert_eq!(result.snake, snake);
    }

    #[test]
    fn test_chasing_tail_is_legal() {
        let mut engine = engine(10);
        // 2x2 loop: the head moves into the cell the tail is leaving
        let snake = body(&[(1, 1), (2, 1), (2, 2), (1, 2)]);

        let result = engine.step(&snake, Direction::Down, Position::new(8, 8));

        assert!(!result.terminated);
        assert_eq!(result.snake, body(&[(1, 2), (1, 1), (2, 1), (2, 2)]));
        assert!(result.snake.has_unique_segments());
    }

    #[test]
    fn test_tail_blocks_when_growing() {
        let mut engine = engine(10);
        let snake = body(&[(1, 1), (2, 1), (2, 2), (1, 2)]);

        // Food sits on the tail, so the tail stays and the head hits it
        let result = engine.step(&snake, Direction::Down, Position::new(1, 2));

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_filling_the_board() {
        let mut engine = engine(2);
        let snake = body(&[(0, 1), (0, 0), (1, 0)]);

        let result = engine.step(&snake, Direction::Right, Position::new(1, 1));

        assert!(result.info.ate_food);
        assert!(result.info.board_full);
        assert!(result.terminated);
        assert_eq!(result.snake.len(), 4);
        assert_eq!(result.food, result.snake.head());
    }

    #[test]
    fn test_length_changes_by_at_most_one() {
        let mut engine = engine(12);
        let mut state = engine.reset();
        let mut heading = Direction::Right;

        for i in 0..40 {
            if i % 5 == 4 {
                heading = heading.turned_right();
            }
            let before = state.snake.len();
            let result = engine.step(&state.snake, heading, state.food);
            if result.terminated {
                assert_eq!(result.snake.len(), before);
                break;
            }
            let grown = result.snake.len() - before;
            assert_eq!(grown, usize::from(result.info.ate_food));
            assert!(result.snake.is_contiguous());
            assert!(result.snake.has_unique_segments());
            state.snake = result.snake;
            state.food = result.food;
        }
    }
}
