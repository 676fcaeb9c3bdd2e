//! Desktop UI composition: menu bar, icon launcher, and the window stack.

mod launcher;
mod menu_bar;
mod note;
mod panels;
mod window;

use leptos::*;
use site_content::{translate, Language, TextKey};
use system_ui::{DesktopRoot, DesktopWindowLayer};

use self::{launcher::IconLauncher, menu_bar::DesktopMenuBar, window::DesktopWindow};
use crate::{
    interaction::PointerPosition,
    model::{WindowContent, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Left button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn text(language: Signal<Language>, key: TextKey) -> impl Fn() -> &'static str + Copy {
    move || translate(language.get(), key)
}

#[component]
/// Renders the desktop: menu bar, icon launcher, and every visible window.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: runtime.host.get_value().viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let skin = Signal::derive(move || state.with(|desktop| desktop.theme.skin));
    let mobile = Signal::derive(move || state.with(|desktop| desktop.viewport.is_mobile()));
    let visible_ids = move || {
        state.with(|desktop| {
            desktop
                .visible_windows()
                .map(|window| window.id.clone())
                .collect::<Vec<WindowId>>()
        })
    };

    view! {
        <DesktopRoot skin=Signal::derive(move || skin.get().id().to_string()) mobile=mobile>
            <DesktopMenuBar />
            <div data-ui-slot="desktop-surface">
                <IconLauncher />
                <DesktopWindowLayer>
                    <For each=visible_ids key=|window_id| window_id.0.clone() let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </div>
        </DesktopRoot>
    }
}
