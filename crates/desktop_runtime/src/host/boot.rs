use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host_web::language_cookie;
use site_content::Language;

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let skin = persistence::load_skin(prefs.as_ref()).await;
            let language = match persistence::load_language(prefs.as_ref()).await {
                Some(language) => Some(language),
                None => language_cookie().as_deref().and_then(Language::from_code),
            };

            logging::log!(
                "desktop boot on {} host (skin: {:?}, language: {:?})",
                host.host_strategy().as_str(),
                skin,
                language
            );
            dispatch.call(DesktopAction::SetViewport {
                viewport: host.viewport(),
            });
            if let Some(language) = language {
                super::host_ui::set_document_language(language.code());
            }
            dispatch.call(DesktopAction::HydratePreferences { skin, language });
        });
    });
}
