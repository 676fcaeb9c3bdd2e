//! Content pages served next to the desktop.

mod hacks;
mod places;

use desktop_runtime::{use_desktop_runtime, DesktopAction};
use leptos::*;
use leptos_router::A;
use site_content::{translate, Language, TextKey};
use system_ui::{Button, ButtonSize, ButtonVariant, Cluster, Heading, LayoutJustify, Text, TextTone};

pub use hacks::HacksPage;
pub use places::PlacesPage;

fn page_language() -> Signal<Language> {
    let runtime = use_desktop_runtime();
    Signal::derive(move || runtime.state.with(|desktop| desktop.language))
}

fn text(language: Signal<Language>, key: TextKey) -> impl Fn() -> &'static str + Copy {
    move || translate(language.get(), key)
}

/// Back link, title block, and language toggle shared by the content pages.
#[component]
fn PageHeader(title: TextKey, #[prop(optional)] subtitle: Option<TextKey>, children: Children) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = page_language();

    view! {
        <header data-ui-slot="page-header">
            <Cluster justify=LayoutJustify::Between>
                <A href="/">{text(language, TextKey::BackHome)}</A>
                <Cluster>
                    {children()}
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleLanguage))
                    >
                        {move || language.get().toggle_label()}
                    </Button>
                </Cluster>
            </Cluster>
            <Heading level=1>{text(language, title)}</Heading>
            {subtitle.map(|subtitle| view! {
                <Text tone=TextTone::Secondary>{text(language, subtitle)}</Text>
            })}
        </header>
    }
}
