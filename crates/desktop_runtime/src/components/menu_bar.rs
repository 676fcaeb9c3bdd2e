use std::time::Duration;

use super::*;
use crate::model::DesktopSkin;
use platform_host::next_unique_timestamp_ms;
use system_ui::{Button, ButtonSize, ButtonVariant, MenuBar, MenuItem, MenuSeparator, MenuSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenMenu {
    File,
    View,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let secs = platform_host::unix_time_ms_now() / 1000;
            Self {
                hour: ((secs / 3600) % 24) as u32,
                minute: ((secs / 60) % 60) as u32,
            }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Top menu bar: brand mark, File/View/Trash menus, language toggle, and a clock.
#[component]
pub(super) fn DesktopMenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let language = Signal::derive(move || state.with(|desktop| desktop.language));
    let skin = Signal::derive(move || state.with(|desktop| desktop.theme.skin));
    let trash_running = Signal::derive(move || state.with(|desktop| desktop.trash_running()));
    let open_menu = create_rw_signal(None::<OpenMenu>);
    let clock = create_rw_signal(ClockReading::now());

    match set_interval_with_handle(move || clock.set(ClockReading::now()), Duration::from_secs(1))
    {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("menu bar clock timer failed: {err:?}"),
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if open_menu.get_untracked().is_some() {
            open_menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let toggle_menu = move |menu: OpenMenu| {
        Callback::new(move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            open_menu.update(|open| {
                *open = if *open == Some(menu) { None } else { Some(menu) };
            });
        })
    };
    let new_note = Callback::new(move |_| {
        open_menu.set(None);
        runtime.dispatch_action(DesktopAction::CreateWindow {
            title: translate(language.get_untracked(), TextKey::NoteTitle).to_string(),
            size: None,
            created_at_ms: next_unique_timestamp_ms(),
        });
    });
    let empty_trash = Callback::new(move |_| {
        open_menu.set(None);
        runtime.dispatch_action(DesktopAction::EmptyTrash);
    });
    let toggle_language = Callback::new(move |_| {
        open_menu.set(None);
        runtime.dispatch_action(DesktopAction::ToggleLanguage);
    });
    let select_skin = move |choice: DesktopSkin| {
        Callback::new(move |_| {
            open_menu.set(None);
            runtime.dispatch_action(DesktopAction::SetSkin { skin: choice });
        })
    };

    view! {
        <MenuBar aria_label="VibeCafé">
            <span data-ui-slot="brand-mark" aria-hidden="true">
                {move || skin.get().chrome().brand_mark}
            </span>
            <div data-ui-slot="menu" on:mousedown=|ev| ev.stop_propagation()>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_expanded=Signal::derive(move || open_menu.get() == Some(OpenMenu::File))
                    on_click=toggle_menu(OpenMenu::File)
                >
                    {text(language, TextKey::MenuFile)}
                </Button>
                <Show when=move || open_menu.get() == Some(OpenMenu::File) fallback=|| ()>
                    <MenuSurface>
                        <MenuItem on_click=new_note>{text(language, TextKey::MenuNewNote)}</MenuItem>
                        <MenuSeparator />
                        <MenuItem on_click=toggle_language>
                            {text(language, TextKey::MenuLanguage)}
                        </MenuItem>
                    </MenuSurface>
                </Show>
            </div>
            <div data-ui-slot="menu" on:mousedown=|ev| ev.stop_propagation()>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_expanded=Signal::derive(move || open_menu.get() == Some(OpenMenu::View))
                    on_click=toggle_menu(OpenMenu::View)
                >
                    {text(language, TextKey::MenuView)}
                </Button>
                <Show when=move || open_menu.get() == Some(OpenMenu::View) fallback=|| ()>
                    <MenuSurface>
                        {DesktopSkin::ALL
                            .into_iter()
                            .map(|choice| {
                                view! {
                                    <MenuItem
                                        checked=Signal::derive(move || skin.get() == choice)
                                        on_click=select_skin(choice)
                                    >
                                        {choice.label()}
                                    </MenuItem>
                                }
                            })
                            .collect_view()}
                    </MenuSurface>
                </Show>
            </div>
            <div data-ui-slot="menu" on:mousedown=|ev| ev.stop_propagation()>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_expanded=Signal::derive(move || open_menu.get() == Some(OpenMenu::Trash))
                    on_click=toggle_menu(OpenMenu::Trash)
                >
                    {text(language, TextKey::MenuTrash)}
                </Button>
                <Show when=move || open_menu.get() == Some(OpenMenu::Trash) fallback=|| ()>
                    <MenuSurface>
                        <MenuItem disabled=trash_running on_click=empty_trash>
                            {text(language, TextKey::MenuEmptyTrash)}
                        </MenuItem>
                    </MenuSurface>
                </Show>
            </div>
            <span data-ui-slot="menu-spacer"></span>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                aria_label=Signal::derive(move || translate(language.get(), TextKey::MenuLanguage).to_string())
                on_click=toggle_language
            >
                {move || language.get().toggle_label()}
            </Button>
            <span data-ui-slot="clock" aria-live="off">{move || clock.get().label()}</span>
        </MenuBar>
    }
}
