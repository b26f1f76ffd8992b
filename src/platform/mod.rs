//! Platform abstraction layer
//!
//! Translates raw device events (mouse, touch, keyboard) into game
//! commands. The host owns the event plumbing and feeds it through here.

pub mod input;

pub use input::{Command, InputEvent, MouseButton, command_for};
