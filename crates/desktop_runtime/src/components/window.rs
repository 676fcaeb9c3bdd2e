use super::*;
use crate::{
    interaction::{DragSession, ResizeSession},
    layout::mobile_slot,
    model::{WindowPosition, WindowSize},
};
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{note::NoteEditor, panels::WindowPanel};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameGeometry {
    position: WindowPosition,
    size: WindowSize,
    z_index: u32,
}

impl FrameGeometry {
    fn style(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.position.x, self.position.y, self.size.width, self.size.height, self.z_index
        )
    }
}

/// One draggable, resizable window.
///
/// Drag and resize sessions are local to the view. The frame follows the pointer without touching
/// the registry; the final position is reported once when the pointer is released.
#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let record = {
        let window_id = window_id.clone();
        create_memo(move |_| state.with(|desktop| desktop.window(&window_id).cloned()))
    };
    let focused = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.top_window_id() == Some(&window_id)))
    };
    let mobile_order = {
        let window_id = window_id.clone();
        create_memo(move |_| {
            state.with(|desktop| {
                if !desktop.viewport.is_mobile() {
                    return None;
                }
                desktop
                    .visible_windows()
                    .position(|window| window.id == window_id)
            })
        })
    };
    let skin = Signal::derive(move || state.with(|desktop| desktop.theme.skin));
    let language = Signal::derive(move || state.with(|desktop| desktop.language));

    let drag = create_rw_signal(None::<DragSession>);
    let resize = create_rw_signal(None::<ResizeSession>);
    let local_position = create_rw_signal(None::<WindowPosition>);
    let local_size = create_rw_signal(None::<WindowSize>);

    let geometry = create_memo(move |_| {
        let window = record.get()?;
        if let Some(order) = mobile_order.get() {
            let (position, size) = mobile_slot(order, state.with(|desktop| desktop.viewport));
            return Some(FrameGeometry {
                position,
                size,
                z_index: window.z_index,
            });
        }
        Some(FrameGeometry {
            position: local_position.get().unwrap_or(window.position),
            size: local_size
                .get()
                .or(window.size)
                .unwrap_or_else(|| window.effective_size()),
            z_index: window.z_index,
        })
    });

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.clone(),
            });
        })
    };
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || mobile_order.get_untracked().is_some() {
            return;
        }
        let Some(frame) = geometry.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        drag.set(Some(DragSession {
            pointer_id: ev.pointer_id(),
            pointer_start: pointer_from_pointer_event(&ev),
            origin: frame.position,
        }));
    });
    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || mobile_order.get_untracked().is_some() {
            return;
        }
        let Some(frame) = geometry.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        resize.set(Some(ResizeSession {
            pointer_id: ev.pointer_id(),
            pointer_start: pointer_from_pointer_event(&ev),
            size_start: frame.size,
        }));
    });
    let track_pointer = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        if let Some(session) = drag.get_untracked() {
            if session.pointer_id == ev.pointer_id() {
                local_position.set(Some(session.position_at(pointer)));
            }
        }
        if let Some(session) = resize.get_untracked() {
            if session.pointer_id == ev.pointer_id() {
                local_size.set(Some(session.size_at(pointer)));
            }
        }
    });
    let end_pointer = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::PointerEvent| {
            if let Some(session) = drag.get_untracked() {
                if session.pointer_id == ev.pointer_id() {
                    drag.set(None);
                    if let Some(position) = local_position.get_untracked() {
                        runtime.dispatch_action(DesktopAction::UpdatePosition {
                            window_id: window_id.clone(),
                            position,
                        });
                        local_position.set(None);
                    }
                }
            }
            if resize
                .get_untracked()
                .is_some_and(|session| session.pointer_id == ev.pointer_id())
            {
                resize.set(None);
            }
        })
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            });
        })
    };

    let content = record
        .get_untracked()
        .map(|window| window.content)
        .unwrap_or(WindowContent::Hero);
    let body = match content {
        WindowContent::Note { .. } => view! { <NoteEditor window_id=window_id.clone() /> }.into_view(),
        panel => view! { <WindowPanel content=panel /> }.into_view(),
    };

    view! {
        <WindowFrame
            style=Signal::derive(move || geometry.get().map(FrameGeometry::style).unwrap_or_default())
            aria_label=Signal::derive(move || record.get().map(|window| window.title).unwrap_or_default())
            focused=focused
            dragging=Signal::derive(move || drag.get().is_some() || resize.get().is_some())
            chrome=Signal::derive(move || skin.get().chrome().frame_token.to_string())
            on_pointerdown=focus
            on_pointermove=track_pointer
            on_pointerend=end_pointer
        >
            {move || {
                let chrome = skin.get().chrome();
                let title = record.get().map(|window| window.title).unwrap_or_default();
                let close_label = translate(language.get(), TextKey::WindowClose);
                let controls = view! {
                    <WindowControls>
                        <WindowControlButton
                            layout_class=chrome.close_class
                            aria_label=close_label.to_string()
                            ui_slot="close"
                            on_click=close
                        >
                            {chrome.close_label}
                        </WindowControlButton>
                        <Show when=move || chrome.traffic_lights fallback=|| ()>
                            <span data-ui-slot="traffic-light-minimize" aria-hidden="true"></span>
                            <span data-ui-slot="traffic-light-zoom" aria-hidden="true"></span>
                        </Show>
                    </WindowControls>
                };
                let title = view! { <WindowTitle align=chrome.title_align>{title}</WindowTitle> };
                if chrome.traffic_lights {
                    view! {
                        <WindowTitleBar layout_class=chrome.titlebar_class on_pointerdown=begin_move>
                            {controls}
                            {title}
                        </WindowTitleBar>
                    }
                } else {
                    view! {
                        <WindowTitleBar layout_class=chrome.titlebar_class on_pointerdown=begin_move>
                            {title}
                            {controls}
                        </WindowTitleBar>
                    }
                }
            }}
            <WindowBody>{body}</WindowBody>
            <Show when=move || mobile_order.get().is_none() fallback=|| ()>
                <ResizeHandle
                    aria_label=translate(language.get_untracked(), TextKey::WindowResize)
                    on_pointerdown=begin_resize
                />
            </Show>
        </WindowFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_style_lists_geometry_in_pixels() {
        let frame = FrameGeometry {
            position: WindowPosition::new(20, 40),
            size: WindowSize::new(400, 240),
            z_index: 3,
        };
        assert_eq!(
            frame.style(),
            "left:20px;top:40px;width:400px;height:240px;z-index:3;"
        );
    }
}
