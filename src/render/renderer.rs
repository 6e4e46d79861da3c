use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::state::grid_extent;
use crate::game::{CollisionType, GameSession, GameState, GameStatus, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the whole screen from the current session. Pure projection: nothing
    /// here changes game state.
    pub fn render(
        &self,
        frame: &mut Frame,
        session: &GameSession,
        best_score: u32,
        metrics: &GameMetrics,
    ) {
        let state = session.state();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(session, best_score, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = chunks[1];

        match state.status {
            GameStatus::GameOver | GameStatus::Won => {
                let game_over = self.render_game_over(state, best_score);
                frame.render_widget(game_over, game_area);
            }
            GameStatus::NotStarted => {
                frame.render_widget(self.render_grid(state), game_area);
                self.render_banner(frame, game_area, "SNAKE", "Press Enter to start");
            }
            GameStatus::Paused => {
                frame.render_widget(self.render_grid(state), game_area);
                self.render_banner(frame, game_area, "PAUSED", "Press Space to resume");
            }
            GameStatus::Running => {
                frame.render_widget(self.render_grid(state), game_area);
            }
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let size = grid_extent(state.grid_size);

        let lines: Vec<Line> = (0..size)
            .map(|y| {
                let spans: Vec<Span> = (0..size)
                    .map(|x| self.render_cell(state, head, Position::new(x, y)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_cell(&self, state: &GameState, head: Position, pos: Position) -> Span<'static> {
        if pos == head {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if state.snake.contains(pos) {
            Span::styled("□ ", Style::default().fg(Color::Green))
        } else if pos == state.food {
            Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }

    fn render_stats(
        &self,
        session: &GameSession,
        best_score: u32,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                session.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Level: ", label),
            Span::styled(session.level().to_string(), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", session.tick_interval().as_millis()), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, title: &str, hint: &str) {
        let popup = centered_rect(30, 5, area);
        let text = vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            popup,
        );
    }

    fn render_game_over(&self, state: &GameState, best_score: u32) -> Paragraph<'_> {
        let (headline, color, reason) = match (state.status, state.last_collision) {
            (GameStatus::Won, _) => ("YOU WIN", Color::Green, "The snake fills the board"),
            (_, Some(CollisionType::Wall)) => ("GAME OVER", Color::Red, "Hit the wall"),
            (_, Some(CollisionType::SelfCollision)) => {
                ("GAME OVER", Color::Red, "Bit your own tail")
            }
            _ => ("GAME OVER", Color::Red, ""),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(best_score.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" move | "),
            Span::styled("W", key),
            Span::raw(" straight | "),
            Span::styled("A/D", key),
            Span::raw(" turn | "),
            Span::styled("Space", key),
            Span::raw(" pause | "),
            Span::styled("Enter", key),
            Span::raw(" start | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
