use super::*;
use platform_host_web::current_page_url;
use site_content::note_share_url;
use system_ui::{Button, ButtonSize, ButtonVariant, Cluster, LayoutGap, Stack, TextArea};

/// Editable note body with copy and share actions once it has text.
#[component]
pub(super) fn NoteEditor(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let language = Signal::derive(move || state.with(|desktop| desktop.language));
    let body = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            state.with(|desktop| match desktop.window(&window_id).map(|w| &w.content) {
                Some(WindowContent::Note { body }) => body.clone(),
                _ => String::new(),
            })
        })
    };
    let has_text = Signal::derive(move || body.with(|text| !text.trim().is_empty()));

    let on_input = Callback::new(move |ev: web_sys::Event| {
        runtime.dispatch_action(DesktopAction::SetNoteText {
            window_id: window_id.clone(),
            text: event_target_value(&ev),
        });
    });
    let copy = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CopyText {
            text: body.get_untracked(),
        });
    });
    let share = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::OpenExternalUrl {
            url: note_share_url(&body.get_untracked(), &current_page_url()),
        });
    });

    view! {
        <Stack gap=LayoutGap::Sm>
            <TextArea
                rows=8
                value=body
                placeholder=Signal::derive(move || translate(language.get(), TextKey::NotePlaceholder).to_string())
                aria_label=Signal::derive(move || translate(language.get(), TextKey::NoteTitle).to_string())
                on_input=on_input
            />
            <Show when=move || has_text.get() fallback=|| ()>
                <Cluster gap=LayoutGap::Sm>
                    <Button size=ButtonSize::Sm on_click=copy>
                        {text(language, TextKey::NoteCopy)}
                    </Button>
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Sm on_click=share>
                        {text(language, TextKey::NoteShare)}
                    </Button>
                </Cluster>
            </Show>
        </Stack>
    }
}
