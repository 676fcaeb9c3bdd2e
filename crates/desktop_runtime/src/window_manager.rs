//! Window transition helpers shared by the reducer and the trash sequence.

use crate::layout::{compute_initial_position, place_near_open_windows};
use crate::model::{DesktopState, WindowId, WindowRecord};

/// Closes a window and remembers where it was.
///
/// Returns `true` when the window was open.
pub fn close_record(window: &mut WindowRecord) -> bool {
    if !window.is_open {
        return false;
    }
    window.is_open = false;
    window.last_position = Some(window.position);
    true
}

/// Soft-deletes a window. Deleted windows never come back.
pub fn delete_record(window: &mut WindowRecord) -> bool {
    if window.is_deleted {
        return false;
    }
    close_record(window);
    window.is_deleted = true;
    true
}

/// Raises `window_id` above every other window.
///
/// The window always lands at `current max + 1`, even when it is already on top. Deleted windows
/// are never raised. Returns `true` when the z-index changed.
pub fn focus_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_deleted {
        return false;
    }

    let next_z = state.current_max_z() + 1;
    if let Some(window) = state.window_mut(window_id) {
        window.z_index = next_z;
    }
    true
}

/// Opens a closed window at its remembered position, or next to the visible windows when it has
/// none, and raises it.
pub fn open_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_deleted || window.is_open {
        return false;
    }

    let position = window.last_position.unwrap_or_else(|| {
        place_near_open_windows(
            &state.windows,
            Some(window_id),
            window.effective_size(),
            state.viewport,
        )
    });
    let next_z = state.current_max_z() + 1;
    if let Some(window) = state.window_mut(window_id) {
        window.is_open = true;
        window.position = position;
        window.last_position = Some(position);
        window.z_index = next_z;
    }
    true
}

/// Flips a window between open and closed. Deleted windows stay put.
pub fn toggle_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    match state.window(window_id) {
        Some(window) if window.is_deleted => false,
        Some(window) if window.is_open => state.window_mut(window_id).is_some_and(close_record),
        Some(_) => open_window_internal(state, window_id),
        None => false,
    }
}

/// Re-runs the grid layout for the visible windows, keyed by registry index.
pub fn relayout_visible_windows(state: &mut DesktopState) -> bool {
    let total = state.windows.len();
    let viewport = state.viewport;
    let mut changed = false;
    for (index, window) in state.windows.iter_mut().enumerate() {
        if !window.is_visible() {
            continue;
        }
        let position = compute_initial_position(index, total, viewport);
        if window.position != position || window.last_position != Some(position) {
            window.position = position;
            window.last_position = Some(position);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Viewport, WindowContent, WindowPosition};
    use pretty_assertions::assert_eq;

    fn window(id: &str, z_index: u32, is_open: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId::new(id),
            title: id.to_string(),
            is_open,
            z_index,
            position: WindowPosition::new(20, 20),
            size: None,
            last_position: Some(WindowPosition::new(20, 20)),
            is_deleted: false,
            content: WindowContent::Hero,
        }
    }

    fn state(windows: Vec<WindowRecord>) -> DesktopState {
        DesktopState {
            windows,
            viewport: Viewport::new(1200, 800),
            ..DesktopState::default()
        }
    }

    #[test]
    fn focus_raises_window_already_on_top() {
        let mut state = state(vec![window("a", 1, true), window("b", 2, true)]);
        assert!(focus_window_internal(&mut state, &WindowId::new("b")));
        assert_eq!(state.windows[1].z_index, 3);
        assert_eq!(state.windows[0].z_index, 1);
    }

    #[test]
    fn focus_breaks_ties_at_the_top() {
        let mut state = state(vec![window("a", 2, true), window("b", 2, true)]);
        assert!(focus_window_internal(&mut state, &WindowId::new("a")));
        assert_eq!(state.windows[0].z_index, 3);
    }

    #[test]
    fn delete_closes_first() {
        let mut record = window("a", 1, true);
        record.position = WindowPosition::new(90, 90);
        assert!(delete_record(&mut record));
        assert!(!record.is_open);
        assert_eq!(record.last_position, Some(WindowPosition::new(90, 90)));
        assert!(!delete_record(&mut record));
    }

    #[test]
    fn relayout_skips_closed_windows() {
        let mut state = state(vec![window("a", 1, true), window("b", 2, false)]);
        state.viewport = Viewport::new(1920, 1080);
        assert!(relayout_visible_windows(&mut state));
        assert_eq!(
            state.windows[0].position,
            compute_initial_position(0, 2, state.viewport)
        );
        assert_eq!(state.windows[1].position, WindowPosition::new(20, 20));
    }
}
