//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::time::Duration;

use site_content::Language;
use thiserror::Error;

use crate::layout::place_near_open_windows;
use crate::model::{
    DesktopSkin, DesktopState, Viewport, WindowContent, WindowId, WindowPosition, WindowRecord,
    WindowSize,
};
use crate::trash::TrashSequence;
use crate::window_manager::{
    close_record, focus_window_internal, relayout_visible_windows, toggle_window_internal,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a closed window or close an open one.
    ToggleWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window above every other window.
    FocusWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Commit the final position of a drag.
    UpdatePosition {
        /// Window that was dragged.
        window_id: WindowId,
        /// Top-left corner at release.
        position: WindowPosition,
    },
    /// Append a new note window.
    CreateWindow {
        /// Title shown in the title bar and under the icon.
        title: String,
        /// Initial size; the default window size when absent.
        size: Option<WindowSize>,
        /// Creation time in unix milliseconds, used to derive the id.
        created_at_ms: u64,
    },
    /// Start the staggered close-then-delete sequence over every window.
    EmptyTrash,
    /// Run the next step of the running trash sequence.
    AdvanceTrash,
    /// Stop the running trash sequence before its next step.
    CancelEmptyTrash,
    /// Record a new viewport and re-lay out the visible windows.
    SetViewport {
        /// New viewport size.
        viewport: Viewport,
    },
    /// Switch the desktop skin and persist it.
    SetSkin {
        /// Skin to apply.
        skin: DesktopSkin,
    },
    /// Switch the display language and persist it.
    SetLanguage {
        /// Language to apply.
        language: Language,
    },
    /// Switch to the other display language and persist it.
    ToggleLanguage,
    /// Apply preferences loaded at boot without writing them back.
    HydratePreferences {
        /// Stored skin, if any.
        skin: Option<DesktopSkin>,
        /// Stored language, if any.
        language: Option<Language>,
    },
    /// Replace the text of a note window.
    SetNoteText {
        /// Note window.
        window_id: WindowId,
        /// Full note text.
        text: String,
    },
    /// Copy text to the clipboard.
    CopyText {
        /// Text to copy.
        text: String,
    },
    /// Open an external URL in a new tab.
    OpenExternalUrl {
        /// Absolute URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] and executed by the host layer.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::AdvanceTrash`] after the delay.
    ScheduleTrashStep(Duration),
    /// Save the current skin.
    PersistSkin,
    /// Save the current language and sync the language cookie.
    PersistLanguage,
    /// Write text to the clipboard.
    CopyToClipboard(String),
    /// Open a URL outside the desktop.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot run in the current state.
pub enum ReducerError {
    /// An empty-trash sequence is already running.
    #[error("empty trash already in progress")]
    TrashInProgress,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions naming an unknown window are no-ops without effects.
///
/// # Errors
///
/// Returns [`ReducerError::TrashInProgress`] when [`DesktopAction::EmptyTrash`] arrives while a
/// sequence is still running.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ToggleWindow { window_id } => {
            toggle_window_internal(state, &window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            if let Some(window) = state.window_mut(&window_id) {
                close_record(window);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, &window_id);
        }
        DesktopAction::UpdatePosition {
            window_id,
            position,
        } => {
            if let Some(window) = state.window_mut(&window_id) {
                window.position = position;
                window.last_position = Some(position);
            }
        }
        DesktopAction::CreateWindow {
            title,
            size,
            created_at_ms,
        } => {
            let window_id = next_note_id(state, created_at_ms);
            let position = place_near_open_windows(
                &state.windows,
                None,
                size.unwrap_or_default(),
                state.viewport,
            );
            let z_index = state.current_max_z() + 1;
            state.windows.push(WindowRecord {
                id: window_id,
                title,
                is_open: true,
                z_index,
                position,
                size,
                last_position: None,
                is_deleted: false,
                content: WindowContent::Note {
                    body: String::new(),
                },
            });
        }
        DesktopAction::EmptyTrash => {
            if state.trash.is_some() {
                return Err(ReducerError::TrashInProgress);
            }
            let mut sequence = TrashSequence::for_windows(&state.windows);
            if let Some(delay) = sequence.advance(&mut state.windows) {
                state.trash = Some(sequence);
                effects.push(RuntimeEffect::ScheduleTrashStep(delay));
            }
        }
        DesktopAction::AdvanceTrash => {
            let Some(mut sequence) = state.trash.take() else {
                return Ok(effects);
            };
            if sequence.cancelled {
                return Ok(effects);
            }
            if let Some(delay) = sequence.advance(&mut state.windows) {
                state.trash = Some(sequence);
                effects.push(RuntimeEffect::ScheduleTrashStep(delay));
            }
        }
        DesktopAction::CancelEmptyTrash => {
            if let Some(sequence) = state.trash.as_mut() {
                sequence.cancelled = true;
            }
        }
        DesktopAction::SetViewport { viewport } => {
            if state.viewport != viewport {
                state.viewport = viewport;
                relayout_visible_windows(state);
            }
        }
        DesktopAction::SetSkin { skin } => {
            if state.theme.skin != skin {
                state.theme.skin = skin;
                effects.push(RuntimeEffect::PersistSkin);
            }
        }
        DesktopAction::SetLanguage { language } => {
            if state.language != language {
                state.language = language;
                effects.push(RuntimeEffect::PersistLanguage);
            }
        }
        DesktopAction::ToggleLanguage => {
            state.language = state.language.other();
            effects.push(RuntimeEffect::PersistLanguage);
        }
        DesktopAction::HydratePreferences { skin, language } => {
            if let Some(skin) = skin {
                state.theme.skin = skin;
            }
            if let Some(language) = language {
                state.language = language;
            }
        }
        DesktopAction::SetNoteText { window_id, text } => {
            if let Some(WindowRecord {
                content: WindowContent::Note { body },
                ..
            }) = state.window_mut(&window_id)
            {
                *body = text;
            }
        }
        DesktopAction::CopyText { text } => {
            if !text.trim().is_empty() {
                effects.push(RuntimeEffect::CopyToClipboard(text));
            }
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    Ok(effects)
}

/// `note-<ms>`, bumped past any id already in the registry.
fn next_note_id(state: &DesktopState, created_at_ms: u64) -> WindowId {
    let mut stamp = created_at_ms;
    loop {
        let candidate = WindowId(format!("note-{stamp}"));
        if state.window(&candidate).is_none() {
            return candidate;
        }
        stamp = stamp.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;
    use crate::model::{TRASH_CLOSE_STEP, TRASH_DELETE_STEP, WINDOW_MARGIN};

    fn seeded() -> DesktopState {
        DesktopConfig::builtin()
            .initial_state(Viewport::new(1200, 800))
            .expect("builtin config")
    }

    fn id(raw: &str) -> WindowId {
        WindowId::new(raw)
    }

    fn window<'a>(state: &'a DesktopState, raw: &str) -> &'a WindowRecord {
        state.window(&id(raw)).expect("window")
    }

    fn run(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("reduce")
    }

    #[test]
    fn toggle_closes_then_reopens_with_a_raised_z_index() {
        let mut state = seeded();
        run(
            &mut state,
            DesktopAction::ToggleWindow {
                window_id: id("hero"),
            },
        );
        assert!(!window(&state, "hero").is_open);
        assert_eq!(window(&state, "hero").z_index, 1);

        run(
            &mut state,
            DesktopAction::ToggleWindow {
                window_id: id("hero"),
            },
        );
        assert!(window(&state, "hero").is_open);
        assert_eq!(window(&state, "hero").z_index, 6);
        assert_eq!(state.top_window_id(), Some(&id("hero")));
    }

    #[test]
    fn reopen_restores_position_captured_at_close() {
        let mut state = seeded();
        let moved = WindowPosition::new(333, 222);
        run(
            &mut state,
            DesktopAction::UpdatePosition {
                window_id: id("contact"),
                position: moved,
            },
        );
        run(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("contact"),
            },
        );
        assert_eq!(window(&state, "contact").last_position, Some(moved));

        run(
            &mut state,
            DesktopAction::ToggleWindow {
                window_id: id("contact"),
            },
        );
        assert_eq!(window(&state, "contact").position, moved);
    }

    #[test]
    fn close_is_idempotent_and_keeps_z_index() {
        let mut state = seeded();
        for _ in 0..2 {
            run(
                &mut state,
                DesktopAction::CloseWindow {
                    window_id: id("manifesto"),
                },
            );
        }
        let manifesto = window(&state, "manifesto");
        assert!(!manifesto.is_open);
        assert_eq!(manifesto.z_index, 2);
        assert_eq!(manifesto.last_position, Some(manifesto.position));
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut state = seeded();
        let before = state.clone();
        for action in [
            DesktopAction::ToggleWindow {
                window_id: id("missing"),
            },
            DesktopAction::CloseWindow {
                window_id: id("missing"),
            },
            DesktopAction::FocusWindow {
                window_id: id("missing"),
            },
            DesktopAction::UpdatePosition {
                window_id: id("missing"),
                position: WindowPosition::new(1, 1),
            },
            DesktopAction::SetNoteText {
                window_id: id("missing"),
                text: "hi".to_string(),
            },
        ] {
            assert_eq!(run(&mut state, action), Vec::new());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn focus_raises_closed_windows_too() {
        let mut state = seeded();
        run(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("hero"),
            },
        );
        run(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("hero"),
            },
        );
        assert_eq!(window(&state, "hero").z_index, 6);
    }

    #[test]
    fn create_places_note_at_origin_when_nothing_is_open() {
        let mut state = seeded();
        for window in &mut state.windows {
            window.is_open = false;
        }
        run(
            &mut state,
            DesktopAction::CreateWindow {
                title: "Untitled.txt".to_string(),
                size: None,
                created_at_ms: 1_700_000_000_000,
            },
        );
        let note = state.windows.last().expect("note");
        assert_eq!(note.id, id("note-1700000000000"));
        assert_eq!(note.position, WindowPosition::new(WINDOW_MARGIN, WINDOW_MARGIN));
        assert!(note.is_open);
        assert_eq!(note.z_index, 6);
        assert_eq!(note.last_position, None);
        assert!(note.content.is_note());
    }

    #[test]
    fn create_bumps_colliding_timestamps() {
        let mut state = DesktopState::default();
        for _ in 0..3 {
            run(
                &mut state,
                DesktopAction::CreateWindow {
                    title: "Untitled.txt".to_string(),
                    size: None,
                    created_at_ms: 42,
                },
            );
        }
        let ids: Vec<&str> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["note-42", "note-43", "note-44"]);
        assert_eq!(state.windows[1].position, WindowPosition::new(20, 280));
    }

    #[test]
    fn empty_trash_runs_to_completion_and_rejects_reentry() {
        let mut state = seeded();
        let effects = run(&mut state, DesktopAction::EmptyTrash);
        assert_eq!(effects, vec![RuntimeEffect::ScheduleTrashStep(TRASH_CLOSE_STEP)]);
        assert!(!window(&state, "hero").is_open);
        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::EmptyTrash),
            Err(ReducerError::TrashInProgress)
        );

        let mut delays = Vec::new();
        loop {
            let effects = run(&mut state, DesktopAction::AdvanceTrash);
            match effects.as_slice() {
                [RuntimeEffect::ScheduleTrashStep(delay)] => delays.push(*delay),
                [] => break,
                other => panic!("unexpected effects {other:?}"),
            }
        }
        assert_eq!(delays.len(), 9);
        assert_eq!(delays[..4], [TRASH_CLOSE_STEP; 4]);
        assert_eq!(delays[4..], [TRASH_DELETE_STEP; 5]);
        assert!(state.trash.is_none());
        assert!(state.windows.iter().all(|w| !w.is_open && w.is_deleted));
        assert_eq!(state.visible_windows().count(), 0);
    }

    #[test]
    fn cancelled_trash_stops_at_next_step() {
        let mut state = seeded();
        run(&mut state, DesktopAction::EmptyTrash);
        run(&mut state, DesktopAction::CancelEmptyTrash);
        assert_eq!(run(&mut state, DesktopAction::AdvanceTrash), Vec::new());
        assert!(state.trash.is_none());
        assert!(!window(&state, "hero").is_open);
        assert!(window(&state, "manifesto").is_open);
        assert!(state.windows.iter().all(|w| !w.is_deleted));
    }

    #[test]
    fn deleted_windows_ignore_toggle_and_focus() {
        let mut state = seeded();
        state.windows[0].is_deleted = true;
        state.windows[0].is_open = false;
        run(
            &mut state,
            DesktopAction::ToggleWindow {
                window_id: id("hero"),
            },
        );
        run(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("hero"),
            },
        );
        assert!(!window(&state, "hero").is_open);
        assert_eq!(window(&state, "hero").z_index, 1);
    }

    #[test]
    fn preferences_persist_only_on_change() {
        let mut state = seeded();
        assert_eq!(
            run(
                &mut state,
                DesktopAction::SetSkin {
                    skin: DesktopSkin::ClassicMac
                }
            ),
            Vec::new()
        );
        assert_eq!(
            run(
                &mut state,
                DesktopAction::SetSkin {
                    skin: DesktopSkin::Terminal
                }
            ),
            vec![RuntimeEffect::PersistSkin]
        );
        assert_eq!(
            run(&mut state, DesktopAction::ToggleLanguage),
            vec![RuntimeEffect::PersistLanguage]
        );
        assert_eq!(state.language, Language::En);
        assert_eq!(
            run(
                &mut state,
                DesktopAction::HydratePreferences {
                    skin: Some(DesktopSkin::Linux),
                    language: None,
                }
            ),
            Vec::new()
        );
        assert_eq!(state.theme.skin, DesktopSkin::Linux);
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn viewport_change_relays_out_visible_windows() {
        let mut state = seeded();
        run(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("contact"),
            },
        );
        let closed_before = window(&state, "contact").position;
        run(
            &mut state,
            DesktopAction::SetViewport {
                viewport: Viewport::new(1920, 1080),
            },
        );
        assert_eq!(window(&state, "hero").position, WindowPosition::new(130, 20));
        assert_eq!(window(&state, "contact").position, closed_before);
    }

    #[test]
    fn note_text_and_copy_effects() {
        let mut state = DesktopState::default();
        run(
            &mut state,
            DesktopAction::CreateWindow {
                title: "Untitled.txt".to_string(),
                size: None,
                created_at_ms: 7,
            },
        );
        run(
            &mut state,
            DesktopAction::SetNoteText {
                window_id: id("note-7"),
                text: "a game".to_string(),
            },
        );
        assert_eq!(
            state.windows[0].content,
            WindowContent::Note {
                body: "a game".to_string()
            }
        );
        assert_eq!(
            run(
                &mut state,
                DesktopAction::CopyText {
                    text: "  ".to_string()
                }
            ),
            Vec::new()
        );
        assert_eq!(
            run(
                &mut state,
                DesktopAction::CopyText {
                    text: "a game".to_string()
                }
            ),
            vec![RuntimeEffect::CopyToClipboard("a game".to_string())]
        );
    }
}
