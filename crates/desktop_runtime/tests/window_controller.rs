use desktop_runtime::layout::compute_initial_position;
use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopConfig, DesktopState, RuntimeEffect, SeedWindow,
    Viewport, WindowContent, WindowId, WindowPosition, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use pretty_assertions::assert_eq;

fn landing(viewport: Viewport) -> DesktopState {
    DesktopConfig::builtin()
        .initial_state(viewport)
        .expect("builtin config")
}

fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    reduce_desktop(state, action).expect("reducer accepts action")
}

fn id(raw: &str) -> WindowId {
    WindowId::new(raw)
}

fn window<'a>(state: &'a DesktopState, raw: &str) -> &'a desktop_runtime::WindowRecord {
    state.window(&id(raw)).expect("window exists")
}

#[test]
fn toggling_twice_reopens_in_place_on_top() {
    let mut state = landing(Viewport::new(1200, 800));
    let before = window(&state, "manifesto").clone();

    dispatch(
        &mut state,
        DesktopAction::ToggleWindow {
            window_id: id("manifesto"),
        },
    );
    assert!(!window(&state, "manifesto").is_open);

    dispatch(
        &mut state,
        DesktopAction::ToggleWindow {
            window_id: id("manifesto"),
        },
    );
    let after = window(&state, "manifesto");
    assert!(after.is_open);
    assert_eq!(after.position, before.position);
    assert_eq!(after.z_index, state.current_max_z());
    assert_eq!(state.top_window_id(), Some(&id("manifesto")));
}

#[test]
fn dragged_window_reopens_where_it_was_closed() {
    let mut state = landing(Viewport::new(1200, 800));
    let dragged = WindowPosition::new(333, 444);

    dispatch(
        &mut state,
        DesktopAction::UpdatePosition {
            window_id: id("contact"),
            position: dragged,
        },
    );
    dispatch(
        &mut state,
        DesktopAction::CloseWindow {
            window_id: id("contact"),
        },
    );
    dispatch(
        &mut state,
        DesktopAction::ToggleWindow {
            window_id: id("contact"),
        },
    );

    assert_eq!(window(&state, "contact").position, dragged);
}

#[test]
fn focus_raises_to_a_strict_maximum() {
    let seeds = ["a", "b", "c"]
        .into_iter()
        .zip(1..)
        .map(|(raw, z_index)| SeedWindow {
            id: raw.to_string(),
            title: raw.to_uppercase(),
            is_open: true,
            z_index,
            size: None,
            content: WindowContent::Hero,
        })
        .collect();
    let config = DesktopConfig {
        windows: seeds,
        ..DesktopConfig::builtin()
    };
    let mut state = config
        .initial_state(Viewport::new(1200, 800))
        .expect("valid seeds");

    dispatch(
        &mut state,
        DesktopAction::FocusWindow {
            window_id: id("a"),
        },
    );

    let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
    assert_eq!(z, vec![4, 2, 3]);

    let effects = dispatch(
        &mut state,
        DesktopAction::FocusWindow {
            window_id: id("a"),
        },
    );
    assert!(effects.is_empty());
    let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
    assert_eq!(z, vec![5, 2, 3]);
}

#[test]
fn emptying_the_trash_leaves_nothing_visible() {
    let mut state = landing(Viewport::new(1200, 800));
    let total = state.windows.len();

    let mut effects = dispatch(&mut state, DesktopAction::EmptyTrash);
    let mut steps = 1;
    while effects
        .iter()
        .any(|effect| matches!(effect, RuntimeEffect::ScheduleTrashStep(_)))
    {
        effects = dispatch(&mut state, DesktopAction::AdvanceTrash);
        steps += 1;
    }

    assert_eq!(steps, total * 2 + 1);
    assert!(state.trash.is_none());
    assert_eq!(state.visible_windows().count(), 0);
    assert!(state.windows.iter().all(|w| w.is_deleted && !w.is_open));

    dispatch(
        &mut state,
        DesktopAction::ToggleWindow {
            window_id: id("hero"),
        },
    );
    assert!(!window(&state, "hero").is_open);
}

#[test]
fn five_windows_wrap_into_centered_rows() {
    let state = landing(Viewport::new(1200, 800));
    let positions: Vec<WindowPosition> = state.windows.iter().map(|w| w.position).collect();

    assert_eq!(
        positions,
        vec![
            WindowPosition::new(190, 20),
            WindowPosition::new(610, 20),
            WindowPosition::new(190, 280),
            WindowPosition::new(610, 280),
            WindowPosition::new(400, 540),
        ]
    );
}

#[test]
fn new_note_starts_at_the_margin_when_nothing_is_open() {
    let mut state = landing(Viewport::new(1200, 800));
    for raw in ["hero", "manifesto", "vibe-friends", "vibe-cafe", "contact"] {
        dispatch(&mut state, DesktopAction::CloseWindow { window_id: id(raw) });
    }

    dispatch(
        &mut state,
        DesktopAction::CreateWindow {
            title: "Untitled.txt".to_string(),
            size: None,
            created_at_ms: 1_000,
        },
    );

    let note = window(&state, "note-1000");
    assert_eq!(note.title, "Untitled.txt");
    assert_eq!(note.position, WindowPosition::new(20, 20));
    assert!(note.is_open && note.content.is_note());
    assert_eq!(state.top_window_id(), Some(&id("note-1000")));
}

#[test]
fn grid_layout_never_overlaps() {
    for viewport in [
        Viewport::new(1920, 1080),
        Viewport::new(1200, 800),
        Viewport::new(800, 600),
        Viewport::new(360, 640),
    ] {
        for total in 1..=9 {
            let rects: Vec<WindowPosition> = (0..total)
                .map(|index| compute_initial_position(index, total, viewport))
                .collect();
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    let apart_x = a.x + WINDOW_WIDTH <= b.x || b.x + WINDOW_WIDTH <= a.x;
                    let apart_y = a.y + WINDOW_HEIGHT <= b.y || b.y + WINDOW_HEIGHT <= a.y;
                    assert!(
                        apart_x || apart_y,
                        "{a:?} overlaps {b:?} for {total} windows in {viewport:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn language_and_skin_changes_request_persistence() {
    let mut state = landing(Viewport::new(1200, 800));
    let effects = dispatch(&mut state, DesktopAction::ToggleLanguage);
    assert_eq!(effects, vec![RuntimeEffect::PersistLanguage]);

    let effects = dispatch(
        &mut state,
        DesktopAction::SetSkin {
            skin: desktop_runtime::DesktopSkin::Terminal,
        },
    );
    assert_eq!(effects, vec![RuntimeEffect::PersistSkin]);
    assert_eq!(state.theme.skin.chrome().close_label, "close");
}
