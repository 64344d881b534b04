//! Event mapping from terminal input to control actions.
//!
//! Mouse bindings: left button paints (press starts a stroke, drag extends it,
//! release ends it), right button toggles run/pause, middle button clears the
//! field, and the wheel adjusts the step interval (wheel up = faster).
//!
//! Keyboard fallbacks cover terminals without mouse reporting.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::ControlAction;

/// Where the field sits on screen: terminal position of grid cell (0, 0) and
/// the per-cell pitch in terminal columns/rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_cols: u16,
    pub cell_rows: u16,
}

impl FieldMap {
    /// Translate a terminal position into grid coordinates by integer
    /// division by the cell pitch.
    ///
    /// Positions left of or above the field come out negative (euclidean
    /// division, so the column just left of the origin is -1, not 0);
    /// positions past the far edge exceed the grid dimensions. Both are out
    /// of range and ignored by the controller.
    pub fn cell_at(&self, x: u16, y: u16) -> (i32, i32) {
        let col = (x as i32 - self.origin_x as i32).div_euclid(self.cell_cols.max(1) as i32);
        let row = (y as i32 - self.origin_y as i32).div_euclid(self.cell_rows.max(1) as i32);
        (col, row)
    }
}

/// Map a mouse event to a control action.
pub fn map_mouse_event(mouse: &MouseEvent, field: FieldMap) -> Option<ControlAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (col, row) = field.cell_at(mouse.column, mouse.row);
            Some(ControlAction::BeginStroke { col, row })
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let (col, row) = field.cell_at(mouse.column, mouse.row);
            Some(ControlAction::ExtendStroke { col, row })
        }
        MouseEventKind::Up(_) => Some(ControlAction::EndStroke),
        MouseEventKind::Down(MouseButton::Right) => Some(ControlAction::ToggleRun),
        MouseEventKind::Down(MouseButton::Middle) => Some(ControlAction::ClearGrid),
        // Wheel up means faster, i.e. positive units / smaller interval.
        MouseEventKind::ScrollUp => Some(ControlAction::AdjustSpeed(1)),
        MouseEventKind::ScrollDown => Some(ControlAction::AdjustSpeed(-1)),
        _ => None,
    }
}

/// Map keyboard input to control actions (fallback for mouse-less terminals).
pub fn handle_key_event(key: KeyEvent) -> Option<ControlAction> {
    match key.code {
        KeyCode::Char(' ') => Some(ControlAction::ToggleRun),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(ControlAction::ClearGrid),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ControlAction::AdjustSpeed(1)),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(ControlAction::AdjustSpeed(-1)),
        _ => None,
    }
}

/// Check if the key should quit the sandbox.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldMap = FieldMap {
        origin_x: 10,
        origin_y: 5,
        cell_cols: 2,
        cell_rows: 1,
    };

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cell_at_divides_by_pitch() {
        assert_eq!(FIELD.cell_at(10, 5), (0, 0));
        assert_eq!(FIELD.cell_at(11, 5), (0, 0));
        assert_eq!(FIELD.cell_at(12, 5), (1, 0));
        assert_eq!(FIELD.cell_at(22, 9), (6, 4));
    }

    #[test]
    fn test_cell_at_maps_margins_out_of_range() {
        // One column left of the field must not alias to column 0.
        assert_eq!(FIELD.cell_at(9, 5), (-1, 0));
        assert_eq!(FIELD.cell_at(10, 4), (0, -1));
        assert_eq!(FIELD.cell_at(0, 0), (-5, -5));
    }

    #[test]
    fn test_left_button_paints() {
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 6), FIELD),
            Some(ControlAction::BeginStroke { col: 1, row: 1 })
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 14, 6), FIELD),
            Some(ControlAction::ExtendStroke { col: 2, row: 1 })
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Up(MouseButton::Left), 14, 6), FIELD),
            Some(ControlAction::EndStroke)
        );
    }

    #[test]
    fn test_right_and_middle_buttons() {
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), FIELD),
            Some(ControlAction::ToggleRun)
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Middle), 0, 0), FIELD),
            Some(ControlAction::ClearGrid)
        );
    }

    #[test]
    fn test_wheel_up_is_faster() {
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::ScrollUp, 0, 0), FIELD),
            Some(ControlAction::AdjustSpeed(1))
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::ScrollDown, 0, 0), FIELD),
            Some(ControlAction::AdjustSpeed(-1))
        );
    }

    #[test]
    fn test_moves_are_ignored() {
        assert_eq!(map_mouse_event(&mouse(MouseEventKind::Moved, 12, 6), FIELD), None);
    }

    #[test]
    fn test_key_fallbacks() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(ControlAction::ToggleRun)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(ControlAction::ClearGrid)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(ControlAction::AdjustSpeed(1))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(ControlAction::AdjustSpeed(-1))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
