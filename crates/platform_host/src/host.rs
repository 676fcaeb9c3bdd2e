//! Host service bundle injected into the desktop runtime and the content pages.

use std::rc::Rc;

use crate::{
    ClipboardService, ExternalUrlService, GeolocationService, NoopClipboardService,
    NoopExternalUrlService, NoopPrefsStore, PrefsStore, UnavailableGeolocationService,
};

/// Which family of adapters backs a [`HostServices`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser APIs (`localStorage`, `window.open`, `navigator.*`).
    Browser,
    /// No-op adapters for native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host services.
///
/// Adapter selection happens in the entry layer; everything downstream only sees trait objects.
#[derive(Clone)]
pub struct HostServices {
    /// Visitor preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// External link opener.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Clipboard writer.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Visitor location lookup.
    pub geolocation: Rc<dyn GeolocationService>,
    /// Strategy tag for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            external_urls: Rc::new(NoopExternalUrlService),
            clipboard: Rc::new(NoopClipboardService),
            geolocation: Rc::new(UnavailableGeolocationService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}
