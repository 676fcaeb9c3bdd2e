use super::*;

#[component]
/// Drop-down surface under a menu bar title.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry. `checked` marks the active choice in radio-style groups (skins).
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="menuitem"
            disabled=disabled
            selected=checked
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Full-viewport modal overlay.
///
/// Clicking the backdrop (not the content) and pressing Escape both call `on_close`.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-modal-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="modal"
            data-ui-slot=ui_slot
            tabindex="-1"
            on:click=move |_| {
                if let Some(on_close) = on_close.as_ref() {
                    on_close.call(());
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
            }
        >
            <div
                class="ui-modal-content"
                role="dialog"
                aria-modal="true"
                aria-label=move || aria_label.get()
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
