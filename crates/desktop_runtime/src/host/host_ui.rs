use std::time::Duration;

use leptos::{logging, set_timeout_with_handle, spawn_local};

use crate::{
    host::DesktopHostContext,
    model::{Viewport, DEFAULT_VIEWPORT},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn schedule_trash_step(runtime: DesktopRuntimeContext, delay: Duration) {
    match set_timeout_with_handle(
        move || {
            runtime.trash_timer.set_value(None);
            runtime.dispatch_action(DesktopAction::AdvanceTrash);
        },
        delay,
    ) {
        Ok(handle) => runtime.trash_timer.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("trash step timer failed: {err:?}");
            runtime.dispatch_action(DesktopAction::CancelEmptyTrash);
            runtime.dispatch_action(DesktopAction::AdvanceTrash);
        }
    }
}

pub(super) fn copy_text(host: DesktopHostContext, text: String) {
    spawn_local(async move {
        if let Err(err) = host.clipboard_service().write_text(&text).await {
            logging::warn!("copy to clipboard failed: {err}");
        }
    });
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn set_document_language(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        if let Err(err) = root.set_attribute("lang", code) {
            logging::warn!("set document language failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = code;
}

pub(crate) fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: i32| {
                value
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback)
            };
            return Viewport::new(
                read(window.inner_width(), DEFAULT_VIEWPORT.width),
                read(window.inner_height(), DEFAULT_VIEWPORT.height),
            );
        }
    }
    DEFAULT_VIEWPORT
}
