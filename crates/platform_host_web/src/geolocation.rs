//! `navigator.geolocation.getCurrentPosition` adapter.

use platform_host::{GeoPoint, GeolocationFuture, GeolocationService};

#[derive(Debug, Clone, Copy, Default)]
/// One-shot browser geolocation lookup.
pub struct WebGeolocationService;

impl GeolocationService for WebGeolocationService {
    fn current_position(&self) -> GeolocationFuture<'_, Result<GeoPoint, String>> {
        Box::pin(current_position())
    }
}

#[cfg(target_arch = "wasm32")]
async fn current_position() -> Result<GeoPoint, String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|e| format!("geolocation unavailable: {e:?}"))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("geolocation request denied: {e:?}"))?;

    let coords = js_sys::Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|e| format!("position has no coords: {e:?}"))?;
    let read = |field: &str| {
        js_sys::Reflect::get(&coords, &JsValue::from_str(field))
            .ok()
            .and_then(|value| value.as_f64())
            .ok_or_else(|| format!("position coords missing `{field}`"))
    };
    Ok(GeoPoint {
        lat: read("latitude")?,
        lng: read("longitude")?,
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn current_position() -> Result<GeoPoint, String> {
    Err("geolocation unavailable".to_string())
}
