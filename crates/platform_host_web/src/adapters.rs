use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{WebClipboardService, WebExternalUrlService, WebGeolocationService, WebPrefsStore};

/// Builds the host-service bundle for the active build target.
///
/// Browser builds get the web adapters; native builds (tests, tooling) get the headless bundle.
pub fn build_host_services() -> HostServices {
    if cfg!(target_arch = "wasm32") {
        HostServices {
            prefs: Rc::new(WebPrefsStore),
            external_urls: Rc::new(WebExternalUrlService),
            clipboard: Rc::new(WebClipboardService),
            geolocation: Rc::new(WebGeolocationService),
            host_strategy: HostStrategy::Browser,
        }
    } else {
        HostServices::headless()
    }
}
