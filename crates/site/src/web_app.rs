use desktop_runtime::{use_desktop_runtime, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

use crate::pages::{HacksPage, PlacesPage};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <DesktopProvider host_services=build_host_services()>
            <SiteHead />
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=DesktopEntry />
                        <Route path="/hacks" view=HacksPage />
                        <Route path="/places" view=PlacesPage />
                    </Routes>
                </main>
            </Router>
        </DesktopProvider>
    }
}

#[component]
fn SiteHead() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Html lang=move || runtime.state.with(|desktop| desktop.language.code()) />
        <Title text="VibeCafé - Keep the Vibe" />
        <Meta
            name="description"
            content="VibeCafé gathers vibe coders, product builders, and creators around a retro desktop."
        />
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! { <DesktopShell /> }
}
