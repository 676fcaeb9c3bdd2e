use super::*;
use system_ui::{DesktopIconButton, DesktopIconGrid};

fn icon_glyph(icon_id: &str) -> &'static str {
    match icon_id {
        "hero" => "☕",
        "document" => "📄",
        "people" => "👥",
        "cafe" => "🏠",
        "mail" => "✉",
        "note" => "📝",
        _ => "▫",
    }
}

/// Desktop icons, one per non-deleted window, plus the trash can.
///
/// Clicking an icon toggles its window. Deleted windows lose their icon.
#[component]
pub(super) fn IconLauncher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let language = Signal::derive(move || state.with(|desktop| desktop.language));
    let chrome = Signal::derive(move || state.with(|desktop| desktop.theme.skin.chrome()));
    let trash_running = Signal::derive(move || state.with(|desktop| desktop.trash_running()));

    let icons = move || {
        state.with(|desktop| {
            desktop
                .windows
                .iter()
                .filter(|window| !window.is_deleted)
                .map(|window| {
                    (
                        window.id.clone(),
                        window.title.clone(),
                        window.content.icon_id(),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <DesktopIconGrid>
            <For each=icons key=|(window_id, title, _)| (window_id.0.clone(), title.clone()) let:icon>
                {{
                    let (window_id, title, icon_id) = icon;
                    let open = {
                        let window_id = window_id.clone();
                        Signal::derive(move || {
                            state.with(|desktop| {
                                desktop.window(&window_id).is_some_and(|window| window.is_open)
                            })
                        })
                    };
                    view! {
                        <DesktopIconButton
                            title=title.clone()
                            aria_label=title.clone()
                            active=open
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleWindow {
                                    window_id: window_id.clone(),
                                });
                            })
                        >
                            <Show when=move || chrome.get().icon_box fallback=|| ()>
                                <span data-ui-slot="icon-glyph" aria-hidden="true">
                                    {icon_glyph(icon_id)}
                                </span>
                            </Show>
                            <span
                                data-ui-slot="icon-label"
                                data-ui-selected=move || {
                                    if open.get() { chrome.get().selected_token } else { "false" }
                                }
                            >
                                {title.clone()}
                            </span>
                        </DesktopIconButton>
                    }
                }}
            </For>
            <DesktopIconButton
                layout_class="desktop-trash-icon"
                aria_label=translate(language.get_untracked(), TextKey::TrashIcon).to_string()
                disabled=trash_running
                on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::EmptyTrash))
            >
                <Show when=move || chrome.get().icon_box fallback=|| ()>
                    <span data-ui-slot="icon-glyph" aria-hidden="true">"🗑"</span>
                </Show>
                <span data-ui-slot="icon-label">{text(language, TextKey::TrashIcon)}</span>
            </DesktopIconButton>
        </DesktopIconGrid>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_content_icon_has_a_glyph() {
        for icon_id in ["hero", "document", "people", "cafe", "mail", "note"] {
            assert_ne!(icon_glyph(icon_id), "▫", "{icon_id}");
        }
        assert_eq!(icon_glyph("unknown"), "▫");
    }
}
