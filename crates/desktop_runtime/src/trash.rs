//! Staggered "empty trash" sequence.
//!
//! The sequence closes every target one step at a time, then soft-deletes every target one step
//! at a time, both in registry order. Each [`TrashSequence::advance`] call performs exactly one
//! step and reports how long the host should wait before the next one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{WindowId, WindowRecord, TRASH_CLOSE_STEP, TRASH_DELETE_STEP};
use crate::window_manager::{close_record, delete_record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrashPhase {
    Closing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashSequence {
    pub phase: TrashPhase,
    pub cursor: usize,
    pub targets: Vec<WindowId>,
    pub cancelled: bool,
}

impl TrashSequence {
    pub fn new(targets: Vec<WindowId>) -> Self {
        Self {
            phase: TrashPhase::Closing,
            cursor: 0,
            targets,
            cancelled: false,
        }
    }

    /// Snapshot of every window in registry order.
    pub fn for_windows(windows: &[WindowRecord]) -> Self {
        Self::new(windows.iter().map(|w| w.id.clone()).collect())
    }

    /// Runs one step against `windows`.
    ///
    /// Returns the delay before the next step, or `None` once every target is deleted. Targets
    /// that disappeared from the registry still consume their step.
    pub fn advance(&mut self, windows: &mut [WindowRecord]) -> Option<Duration> {
        if self.phase == TrashPhase::Closing {
            if let Some(target) = self.targets.get(self.cursor) {
                if let Some(window) = windows.iter_mut().find(|w| &w.id == target) {
                    close_record(window);
                }
                self.cursor += 1;
                return Some(TRASH_CLOSE_STEP);
            }
            self.phase = TrashPhase::Deleting;
            self.cursor = 0;
        }

        let target = self.targets.get(self.cursor)?;
        if let Some(window) = windows.iter_mut().find(|w| &w.id == target) {
            delete_record(window);
        }
        self.cursor += 1;
        Some(TRASH_DELETE_STEP)
    }

    /// Number of steps still to run, counting both phases.
    pub fn remaining_steps(&self) -> usize {
        let len = self.targets.len();
        match self.phase {
            TrashPhase::Closing => len.saturating_sub(self.cursor) + len,
            TrashPhase::Deleting => len.saturating_sub(self.cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WindowContent, WindowPosition};
    use pretty_assertions::assert_eq;

    fn window(id: &str, is_open: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId::new(id),
            title: id.to_string(),
            is_open,
            z_index: 1,
            position: WindowPosition::new(20, 20),
            size: None,
            last_position: None,
            is_deleted: false,
            content: WindowContent::Hero,
        }
    }

    #[test]
    fn closes_all_then_deletes_all_in_order() {
        let mut windows = vec![window("a", true), window("b", true)];
        let mut sequence = TrashSequence::for_windows(&windows);
        assert_eq!(sequence.remaining_steps(), 4);

        assert_eq!(sequence.advance(&mut windows), Some(TRASH_CLOSE_STEP));
        assert!(!windows[0].is_open);
        assert!(windows[1].is_open);

        assert_eq!(sequence.advance(&mut windows), Some(TRASH_CLOSE_STEP));
        assert!(!windows[1].is_open);
        assert!(windows.iter().all(|w| !w.is_deleted));

        assert_eq!(sequence.advance(&mut windows), Some(TRASH_DELETE_STEP));
        assert!(windows[0].is_deleted);
        assert!(!windows[1].is_deleted);

        assert_eq!(sequence.advance(&mut windows), Some(TRASH_DELETE_STEP));
        assert!(windows[1].is_deleted);

        assert_eq!(sequence.remaining_steps(), 0);
        assert_eq!(sequence.advance(&mut windows), None);
    }

    #[test]
    fn close_step_captures_last_position() {
        let mut windows = vec![window("a", true)];
        windows[0].position = WindowPosition::new(140, 60);
        let mut sequence = TrashSequence::for_windows(&windows);
        sequence.advance(&mut windows);
        assert_eq!(windows[0].last_position, Some(WindowPosition::new(140, 60)));
    }

    #[test]
    fn empty_registry_finishes_immediately() {
        let mut windows = Vec::new();
        let mut sequence = TrashSequence::for_windows(&windows);
        assert_eq!(sequence.advance(&mut windows), None);
    }

    #[test]
    fn missing_targets_still_consume_a_step() {
        let mut windows = vec![window("a", true)];
        let mut sequence = TrashSequence::new(vec![WindowId::new("gone"), WindowId::new("a")]);
        assert_eq!(sequence.advance(&mut windows), Some(TRASH_CLOSE_STEP));
        assert!(windows[0].is_open);
        assert_eq!(sequence.advance(&mut windows), Some(TRASH_CLOSE_STEP));
        assert!(!windows[0].is_open);
    }
}
