//! Shared constants and pure data types.
//!
//! Everything here is plain data with no external dependencies, usable from
//! the core simulation, the input mapping layer, and the terminal renderer
//! alike.
//!
//! # Field dimensions
//!
//! The field is a fixed 50x50 grid of binary cells. Dimensions never change
//! after startup.
//!
//! # Timing constants
//!
//! All delays are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DELAY_MS` | 200 | Step interval at startup |
//! | `MIN_DELAY_MS` | 20 | Fastest allowed step interval |
//! | `MAX_DELAY_MS` | 2000 | Slowest allowed step interval |
//! | `DELAY_STEP_MS` | 30 | Interval change per wheel unit |

/// Field dimensions, in cells.
pub const GRID_WIDTH: usize = 50;
pub const GRID_HEIGHT: usize = 50;

/// Step-interval bounds (milliseconds).
pub const MIN_DELAY_MS: u32 = 20;
pub const MAX_DELAY_MS: u32 = 2000;

/// Interval change applied per wheel unit.
pub const DELAY_STEP_MS: u32 = 30;

/// Step interval at startup.
pub const DEFAULT_DELAY_MS: u32 = 200;

/// Terminal footprint of one grid cell, in character cells.
/// 2x1 compensates for the typical terminal glyph aspect ratio.
pub const CELL_COLS: u16 = 2;
pub const CELL_ROWS: u16 = 1;

/// Event-poll timeout while paused, when no tick is due.
pub const IDLE_POLL_MS: u64 = 250;

/// User intents produced by the input mapping layer.
///
/// Coordinates are grid cells, not terminal characters, and are signed:
/// pointer positions on the field margins map to out-of-range values, which
/// the controller silently ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Primary button pressed: start an edit stroke at this cell.
    BeginStroke { col: i32, row: i32 },
    /// Drag while a stroke is active.
    ExtendStroke { col: i32, row: i32 },
    /// Button released: the stroke is over.
    EndStroke,
    /// Flip between running and paused.
    ToggleRun,
    /// Kill every cell on the field.
    ClearGrid,
    /// Wheel units; positive means faster (smaller step interval).
    AdjustSpeed(i32),
}
