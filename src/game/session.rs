use std::time::Duration;

use tracing::{debug, info};

use super::{
    action::Action,
    config::GameConfig,
    engine::GameEngine,
    speed::{level, tick_interval},
    state::{CollisionType, GameState, GameStatus},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing moved
    Idle,
    /// The snake moved
    Moved { ate_food: bool },
    /// The snake hit something; the game is over
    Collided(CollisionType),
    /// The snake now covers the whole board
    BoardFilled,
}

/// One game from start to finish, plus the commands that drive it
///
/// This is the only owner of the game state. Key presses go through
/// [`GameSession::steer`], which only queues a heading; the snake itself only
/// changes inside [`GameSession::tick`].
pub struct GameSession {
    engine: GameEngine,
    state: GameState,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self { engine, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Begin play. A finished game starts over; a running or paused one is left alone.
    pub fn start(&mut self) {
        match self.state.status {
            GameStatus::NotStarted => {
                self.state.status = GameStatus::Running;
                info!("game started");
            }
            GameStatus::GameOver | GameStatus::Won => self.restart(),
            GameStatus::Running | GameStatus::Paused => {}
        }
    }

    /// Flip between running and paused. Does nothing in any other status.
    pub fn toggle_pause(&mut self) -> GameStatus {
        self.state.status = match self.state.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        debug!(status = ?self.state.status, "pause toggled");
        self.state.status
    }

    /// Throw the current game away and start a fresh one
    pub fn restart(&mut self) {
        self.state = self.engine.reset();
        self.state.status = GameStatus::Running;
        info!("game restarted");
    }

    /// Queue a heading change for the next tick.
    ///
    /// Relative turns are taken from the active heading (the queued one if
    /// any). Returns false if the game is not running or the turn would
    /// reverse the snake.
    pub fn steer(&mut self, action: Action) -> bool {
        if self.state.status != GameStatus::Running {
            return false;
        }
        let requested = action.resolve(self.state.steering.active());
        let accepted = self.state.steering.request(requested);
        debug!(?action, ?requested, accepted, "steer");
        accepted
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let heading = self.state.steering.commit();
        let result = self
            .engine
            .step(&self.state.snake, heading, self.state.food);

        self.state.steps += 1;

        if let Some(collision) = result.info.collision_type {
            self.state.status = GameStatus::GameOver;
            self.state.last_collision = Some(collision);
            info!(?collision, score = self.state.score, "game over");
            return TickOutcome::Collided(collision);
        }

        self.state.snake = result.snake;
        self.state.food = result.food;

        if result.info.ate_food {
            self.state.score += 1;
            debug!(score = self.state.score, length = self.state.snake.len(), "food eaten");
        }

        if result.info.board_full {
            self.state.status = GameStatus::Won;
            info!(score = self.state.score, "board filled");
            return TickOutcome::BoardFilled;
        }

        TickOutcome::Moved {
            ate_food: result.info.ate_food,
        }
    }

    /// Delay before the next tick at the current score
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.state.score, &self.engine.config().speed)
    }

    pub fn level(&self) -> u32 {
        level(self.state.score, &self.engine.config().speed)
    }
}
