//! Terminal input module.
//!
//! Maps `crossterm` mouse and key events into [`ControlAction`]s. The mapping
//! is pure (event in, optional action out); translating terminal coordinates
//! into grid cells goes through a [`FieldMap`] describing where the field sits
//! on screen.
//!
//! [`ControlAction`]: tui_life_types::ControlAction

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, map_mouse_event, should_quit, FieldMap};
