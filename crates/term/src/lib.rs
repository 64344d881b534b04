//! Terminal rendering for the life sandbox.
//!
//! A small framebuffer-based pipeline: [`GridView`] maps a core snapshot into
//! styled character cells (pure, testable), and [`TerminalRenderer`] flushes a
//! framebuffer to the terminal with diff-based redraws.
//!
//! The renderer also owns the terminal session lifecycle (raw mode, alternate
//! screen, mouse capture) since painting with the mouse is the primary
//! interface.

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use grid_view::{GridView, Viewport};
pub use renderer::TerminalRenderer;
