//! Sandbox controller - mediates user intent and timer ticks into grid state.
//!
//! The controller owns one [`Grid`] plus two orthogonal state machines:
//! run/pause ([`RunState`]) and the edit stroke ([`Stroke`]). Editing is
//! permitted in both run states; a stroke written between ticks is simply what
//! the next generation is computed from.
//!
//! All methods are synchronous and non-blocking. The host dispatches events
//! serially (single-threaded event loop), so there is no internal locking.

use tui_life_types::{ControlAction, DEFAULT_DELAY_MS, DELAY_STEP_MS, MAX_DELAY_MS, MIN_DELAY_MS};

use crate::grid::{Grid, GridError};

/// Whether automatic stepping is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Edit-stroke sub-state, orthogonal to [`RunState`].
///
/// `fill` is latched from the first cell of the stroke: pressing on a dead
/// cell starts a painting stroke, pressing on a live cell an erasing one.
/// Revisiting a cell within the same stroke re-applies the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Idle,
    Painting { fill: bool },
}

/// The interactive simulation: one grid plus run/pause, stroke, and speed state.
#[derive(Debug, Clone)]
pub struct Sandbox {
    grid: Grid,
    run: RunState,
    stroke: Stroke,
    delay_ms: u32,
}

impl Sandbox {
    /// Create a paused sandbox with an all-dead grid and the default step interval.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_delay(width, height, DEFAULT_DELAY_MS)
    }

    /// Create with a caller-supplied step interval, clamped to the allowed range.
    pub fn with_delay(width: usize, height: usize, delay_ms: u32) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            run: RunState::Idle,
            stroke: Stroke::Idle,
            delay_ms: delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS),
        })
    }

    /// Apply a mapped user intent.
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::BeginStroke { col, row } => self.begin_stroke(col, row),
            ControlAction::ExtendStroke { col, row } => self.extend_stroke(col, row),
            ControlAction::EndStroke => self.end_stroke(),
            ControlAction::ToggleRun => {
                self.toggle_run();
            }
            ControlAction::ClearGrid => self.clear(),
            ControlAction::AdjustSpeed(units) => {
                self.adjust_speed(units);
            }
        }
    }

    /// Start an edit stroke at (col, row).
    ///
    /// The stroke paints if the pressed cell was dead and erases if it was
    /// alive, and keeps doing so for every cell it passes over. Off-field
    /// presses are routine (margins, window chrome) and are ignored without
    /// starting a stroke.
    pub fn begin_stroke(&mut self, col: i32, row: i32) {
        let Ok(alive) = self.grid.get(col, row) else {
            return;
        };
        let fill = !alive;
        let _ = self.grid.set(col, row, fill);
        self.stroke = Stroke::Painting { fill };
    }

    /// Continue the stroke through (col, row). No-op without an active stroke;
    /// off-field drag positions are ignored.
    pub fn extend_stroke(&mut self, col: i32, row: i32) {
        if let Stroke::Painting { fill } = self.stroke {
            let _ = self.grid.set(col, row, fill);
        }
    }

    /// Finish the stroke. Always succeeds; no-op when no stroke is active.
    pub fn end_stroke(&mut self) {
        self.stroke = Stroke::Idle;
    }

    /// Flip between running and paused, returning the new state.
    /// Never touches the grid.
    pub fn toggle_run(&mut self) -> RunState {
        self.run = match self.run {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
        self.run
    }

    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Kill every cell, regardless of run state. Does not pause.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Change the step interval by one quantum per wheel unit; positive units
    /// speed up (shrink the interval). The bound is applied after each unit,
    /// so a direction reversal within one call cannot overshoot the range.
    /// Returns the resulting interval for display.
    pub fn adjust_speed(&mut self, units: i32) -> u32 {
        let quantum = if units > 0 {
            -(DELAY_STEP_MS as i64)
        } else {
            DELAY_STEP_MS as i64
        };
        for _ in 0..units.unsigned_abs() {
            let next = self.delay_ms as i64 + quantum;
            self.delay_ms = next.clamp(MIN_DELAY_MS as i64, MAX_DELAY_MS as i64) as u32;
        }
        self.delay_ms
    }

    /// Current step interval in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Advance one generation.
    ///
    /// The timer service only delivers ticks while running; this method does
    /// not gate on run state itself.
    pub fn on_tick(&mut self) {
        self.grid = self.grid.step();
    }

    /// Read-only snapshot of the field, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
