//! Host-side execution of reducer effects and browser environment queries.
//!
//! The reducer stays pure; everything that touches storage, timers, the clipboard, or the
//! document goes through [`DesktopHostContext`].

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{
    ClipboardService, ExternalUrlService, GeolocationService, HostServices, HostStrategy,
    PrefsStore,
};

use crate::{
    model::Viewport,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl DesktopHostContext {
    /// Wraps the injected host services.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured external URL opener.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the configured clipboard writer.
    pub fn clipboard_service(&self) -> Rc<dyn ClipboardService> {
        self.services.clipboard.clone()
    }

    /// Returns the configured location lookup.
    pub fn geolocation_service(&self) -> Rc<dyn GeolocationService> {
        self.services.geolocation.clone()
    }

    /// Returns the selected host strategy.
    pub fn host_strategy(&self) -> HostStrategy {
        self.services.host_strategy
    }

    /// Installs preference hydration for the desktop provider.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTrashStep(delay) => host_ui::schedule_trash_step(runtime, delay),
            RuntimeEffect::PersistSkin => persistence_effects::persist_skin(self.clone(), runtime),
            RuntimeEffect::PersistLanguage => {
                persistence_effects::persist_language(self.clone(), runtime)
            }
            RuntimeEffect::CopyToClipboard(text) => host_ui::copy_text(self.clone(), text),
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
        }
    }

    /// Opens a URL outside the desktop.
    pub fn open_external_url(&self, url: &str) {
        host_ui::open_external_url(self.clone(), url);
    }

    /// Returns the current browser viewport.
    pub fn viewport(&self) -> Viewport {
        host_ui::current_viewport()
    }
}
