//! Terminal Life sandbox runner.
//!
//! Paint cells with the left mouse button, toggle the simulation with the
//! right button, clear with the middle button, and set the step delay with
//! the wheel. The event loop doubles as the timer service: while running,
//! input polling times out at the next step deadline.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{RunState, Sandbox};
use tui_life::input::{handle_key_event, map_mouse_event, should_quit, FieldMap};
use tui_life::term::{GridView, TerminalRenderer, Viewport};
use tui_life::types::{ControlAction, GRID_HEIGHT, GRID_WIDTH, IDLE_POLL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sandbox = Sandbox::new(GRID_WIDTH, GRID_HEIGHT)?;
    let view = GridView::default();

    // Deadline of the next generation; None while paused.
    let mut next_tick: Option<Instant> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&sandbox, viewport);
        term.draw(&fb)?;

        let timeout = match next_tick {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::from_millis(IDLE_POLL_MS),
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(&mut sandbox, action, &mut next_tick);
                    }
                }
                Event::Mouse(mouse) => {
                    let (origin_x, origin_y) = view.field_origin(&sandbox, viewport);
                    let (cell_cols, cell_rows) = view.cell_pitch();
                    let field = FieldMap {
                        origin_x,
                        origin_y,
                        cell_cols,
                        cell_rows,
                    };
                    if let Some(action) = map_mouse_event(&mouse, field) {
                        dispatch(&mut sandbox, action, &mut next_tick);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if let Some(deadline) = next_tick {
            if Instant::now() >= deadline {
                sandbox.on_tick();
                next_tick = Some(Instant::now() + step_interval(&sandbox));
            }
        }
    }
}

fn dispatch(sandbox: &mut Sandbox, action: ControlAction, next_tick: &mut Option<Instant>) {
    if action == ControlAction::ToggleRun {
        // The loop is the timer service: arm it on resume (first tick fires
        // immediately), disarm on pause.
        *next_tick = match sandbox.toggle_run() {
            RunState::Running => Some(Instant::now()),
            RunState::Idle => None,
        };
    } else {
        // Speed changes take effect when the timer re-arms after the next tick.
        sandbox.apply(action);
    }
}

fn step_interval(sandbox: &Sandbox) -> Duration {
    Duration::from_millis(sandbox.delay_ms() as u64)
}
