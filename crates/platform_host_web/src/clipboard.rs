//! `navigator.clipboard.writeText` adapter.

use platform_host::{ClipboardFuture, ClipboardService};

#[derive(Debug, Clone, Copy, Default)]
/// Async Clipboard API adapter.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move { write_text(text).await })
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_text(text: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let navigator = window.navigator();
    // Looked up dynamically: older web-sys releases gate `Navigator::clipboard` behind
    // `web_sys_unstable_apis`.
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| "clipboard unavailable".to_string())?;
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("clipboard.writeText lookup failed: {e:?}"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "clipboard.writeText is not callable".to_string())?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("clipboard.writeText failed: {e:?}"))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write rejected: {e:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_text(_text: &str) -> Result<(), String> {
    Err("clipboard unavailable".to_string())
}
