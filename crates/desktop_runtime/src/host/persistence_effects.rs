use leptos::{logging, spawn_local, SignalGetUntracked};
use platform_host_web::write_language_cookie;

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

use super::host_ui;

pub(super) fn persist_skin(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let skin = runtime.state.get_untracked().theme.skin;
    spawn_local(async move {
        if let Err(err) = persistence::persist_skin(host.prefs_store().as_ref(), skin).await {
            logging::warn!("persist skin failed: {err}");
        }
    });
}

pub(super) fn persist_language(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let language = runtime.state.get_untracked().language;
    host_ui::set_document_language(language.code());
    if let Err(err) = write_language_cookie(language.code()) {
        logging::warn!("language cookie write failed: {err}");
    }
    spawn_local(async move {
        if let Err(err) = persistence::persist_language(host.prefs_store().as_ref(), language).await
        {
            logging::warn!("persist language failed: {err}");
        }
    });
}
