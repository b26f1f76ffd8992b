//! Device event to command mapping
//!
//! Mouse buttons and touch zones collapse onto the same two-way choice:
//! left/primary hops one cell, right/secondary hops two.

use crate::sim::{Step, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// From a DOM-style `MouseEvent.button` code
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// A raw input event as the host sees it
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MouseUp(MouseButton),
    /// `x` is relative to the left edge of a surface `width` wide
    TouchStart { x: f32, width: f32 },
    /// Key name as reported by the platform (`" "`, `"Enter"`, `"1"`, ...)
    KeyDown(String),
}

/// What an input event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump(Step),
}

/// Map a device event to a command; unmapped events yield `None`
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::MouseUp(MouseButton::Left) => Some(Command::Jump(Step::One)),
        InputEvent::MouseUp(MouseButton::Right) => Some(Command::Jump(Step::Two)),
        InputEvent::MouseUp(MouseButton::Middle) => None,
        InputEvent::TouchStart { x, width } => {
            if *x < width / 2.0 {
                Some(Command::Jump(Step::One))
            } else {
                Some(Command::Jump(Step::Two))
            }
        }
        InputEvent::KeyDown(key) => match key.as_str() {
            " " | "Enter" => Some(Command::Start),
            "1" | "ArrowUp" => Some(Command::Jump(Step::One)),
            "2" | "ArrowRight" => Some(Command::Jump(Step::Two)),
            _ => None,
        },
    }
}

impl TickInput {
    /// Fold a device event into this frame's input
    pub fn apply(&mut self, event: &InputEvent) {
        match command_for(event) {
            Some(Command::Start) => self.start = true,
            Some(Command::Jump(step)) => self.press(step),
            None => log::debug!("Unmapped input {event:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(MouseButton::from_code(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_code(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_code(7), None);

        assert_eq!(
            command_for(&InputEvent::MouseUp(MouseButton::Left)),
            Some(Command::Jump(Step::One))
        );
        assert_eq!(
            command_for(&InputEvent::MouseUp(MouseButton::Right)),
            Some(Command::Jump(Step::Two))
        );
        assert_eq!(command_for(&InputEvent::MouseUp(MouseButton::Middle)), None);
    }

    #[test]
    fn test_touch_zones() {
        let left = InputEvent::TouchStart { x: 10.0, width: 400.0 };
        let right = InputEvent::TouchStart { x: 300.0, width: 400.0 };
        let middle = InputEvent::TouchStart { x: 200.0, width: 400.0 };
        assert_eq!(command_for(&left), Some(Command::Jump(Step::One)));
        assert_eq!(command_for(&right), Some(Command::Jump(Step::Two)));
        assert_eq!(command_for(&middle), Some(Command::Jump(Step::Two)));
    }

    #[test]
    fn test_apply_to_tick_input() {
        let mut input = TickInput::default();
        input.apply(&InputEvent::KeyDown("Enter".into()));
        input.apply(&InputEvent::KeyDown("q".into()));
        input.apply(&InputEvent::TouchStart { x: 390.0, width: 400.0 });
        assert!(input.start);
        assert!(!input.primary);
        assert!(input.secondary);
    }
}
