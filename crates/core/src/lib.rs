//! Core simulation logic - pure, deterministic, and testable.
//!
//! This crate contains the cell grid, the Game of Life step rule, and the
//! sandbox controller that mediates user edits, run/pause, and speed. It has
//! **zero dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: a grid plus a number of steps fully determines the result
//! - **Testable**: every rule is exercised by unit tests without a terminal
//! - **Portable**: can run headless (terminal front end lives elsewhere)
//!
//! # Module structure
//!
//! - [`grid`]: bounded boolean cell matrix with the generational step rule
//! - [`sandbox`]: user-facing controller (edit strokes, run/pause, speed, ticks)
//!
//! # Example
//!
//! ```
//! use tui_life_core::Sandbox;
//!
//! let mut sandbox = Sandbox::new(50, 50).unwrap();
//! sandbox.begin_stroke(10, 10); // paint a cell
//! sandbox.end_stroke();
//! sandbox.toggle_run();
//! sandbox.on_tick(); // one generation (a lone cell dies of isolation)
//! assert_eq!(sandbox.grid().get(10, 10), Ok(false));
//! ```

pub mod grid;
pub mod sandbox;

pub use grid::{Grid, GridError};
pub use sandbox::{RunState, Sandbox, Stroke};
