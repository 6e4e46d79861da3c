use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, trace, warn};

use super::clock::TickClock;
use crate::game::{GameConfig, GameSession, GameStatus, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::storage::BestScore;

pub struct HumanMode {
    session: GameSession,
    best_score: BestScore,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    clock: TickClock,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, best_score: BestScore) -> Self {
        Self {
            session: GameSession::new(config),
            best_score,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            clock: TickClock::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal; a failure past raw mode must not leave the shell raw
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = setup_or_restore(enter_terminal, restore_after_failed_setup)?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            best = self.best_score.value(),
            games = self.metrics.games_played,
            "session ended"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Tui,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            let deadline = self.clock.deadline();

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; only armed while running
                _ = TickClock::wait(deadline) => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let drawn = terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.session,
                            self.best_score.value(),
                            &self.metrics,
                        );
                    });
                    if let Err(err) = drawn {
                        warn!(error = %err, "frame skipped");
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            if !action.is_handled() {
                trace!(code = ?key.code, "key ignored");
                return;
            }
            self.apply(action);
        }
    }

    /// Carry out one command. Steering only queues a heading; the snake
    /// itself only moves in `on_tick`.
    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(action) => {
                self.session.steer(action);
            }
            KeyAction::TogglePause => match self.session.toggle_pause() {
                GameStatus::Paused => self.metrics.on_pause(),
                GameStatus::Running => self.metrics.on_resume(),
                _ => {}
            },
            KeyAction::Start => {
                let before = self.session.status();
                self.session.start();
                if before != self.session.status() {
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Restart => {
                self.session.restart();
                self.metrics.on_game_start();
                // Fresh game, fresh timer
                self.clock.disarm();
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }

        self.sync_clock();
    }

    fn on_tick(&mut self) {
        // The deadline that woke us is spent
        self.clock.disarm();

        match self.session.tick() {
            TickOutcome::Moved { ate_food: true } => {
                self.best_score.observe(self.session.score());
            }
            TickOutcome::BoardFilled => {
                self.best_score.observe(self.session.score());
                self.metrics.on_game_over();
            }
            TickOutcome::Collided(_) => {
                self.metrics.on_game_over();
            }
            TickOutcome::Moved { ate_food: false } | TickOutcome::Idle => {}
        }

        self.sync_clock();
    }

    /// Arm the tick timer while running, at the interval for the current score
    fn sync_clock(&mut self) {
        self.clock
            .sync(self.session.status(), self.session.tick_interval());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Tui,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run `setup`; when it fails, call `restore` before handing back the error
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().map_err(|err| {
        restore();
        err
    })
}

fn enter_terminal() -> Result<Tui> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Best-effort undo of a half-finished setup
fn restore_after_failed_setup() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "could not disable raw mode");
    }
    if let Err(err) = execute!(stderr(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "could not leave alternate screen");
    }
}
