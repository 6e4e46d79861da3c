use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Navigation; only ever queues a heading
    Steer(Action),
    TogglePause,
    Start,
    Restart,
    Quit,
    None,
}

impl KeyAction {
    /// Keys the game consumes; everything else is left to the terminal
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyAction::None)
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Absolute movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::Steer(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::Steer(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::Steer(Action::Move(Direction::Right)),

            // Relative movement
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Action::Continue),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Action::TurnLeft),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Action::TurnRight),

            // Controls
            KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Steer(Action::Move(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Steer(Action::Move(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Steer(Action::Move(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_relative_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Steer(Action::Continue)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Steer(Action::TurnLeft)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('d'))),
            KeyAction::Steer(Action::TurnRight)
        );
    }

    #[test]
    fn test_relative_keys_uppercase() {
        let handler = InputHandler::new();

        let a_upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(a_upper),
            KeyAction::Steer(Action::TurnLeft)
        );
        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::Steer(Action::TurnRight)
        );
    }

    #[test]
    fn test_s_is_not_navigation() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_command_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            KeyAction::TogglePause
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Enter)), KeyAction::Start);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Restart
        );
        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let action = handler.handle_key_event(press(KeyCode::Char('x')));
        assert_eq!(action, KeyAction::None);
        assert!(!action.is_handled());
        assert!(KeyAction::TogglePause.is_handled());
    }
}
