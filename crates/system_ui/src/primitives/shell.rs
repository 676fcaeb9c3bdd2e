use super::*;

#[component]
/// Root desktop surface. `skin` feeds the `data-ui-skin` token the stylesheets key on.
pub fn DesktopRoot(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] skin: MaybeSignal<String>,
    #[prop(optional, into)] mobile: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-skin=move || skin.get()
            data-ui-mobile=move || bool_token(mobile.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Retro menu bar pinned to the top of the desktop.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Desktop icon column.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=title
            aria-label=aria_label
            aria-pressed=move || bool_token(active.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional, into)] chrome: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    /// Called on pointer up, pointer cancel, and lost pointer capture.
    #[prop(optional)]
    on_pointerend: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let end = move |ev: web_sys::PointerEvent| {
        if let Some(on_pointerend) = on_pointerend.as_ref() {
            on_pointerend.call(ev);
        }
    };
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-dragging=move || bool_token(dragging.get())
            data-ui-chrome=move || chrome.get()
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=end
            on:pointercancel=end
            on:lostpointercapture=end
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive. Acts as the drag handle.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] align: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
            data-ui-align=align.unwrap_or("start")
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar control button.
///
/// Pointer-down is stopped here so pressing a control never starts a drag.
pub fn WindowControlButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label
            ui_slot=ui_slot.unwrap_or("window-control")
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
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
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom-right resize grip.
pub fn ResizeHandle(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resize-handle", layout_class)
            role="separator"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot="bottom-right"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}
