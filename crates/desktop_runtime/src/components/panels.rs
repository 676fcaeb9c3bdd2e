use super::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Card, Grid, Heading, LayoutGap, Stack, Text, TextRole,
    TextTone,
};

const CONTACT_MAILTO: &str = "mailto:contact@vibecafe.com";

/// Translated body for the fixed landing windows.
#[component]
pub(super) fn WindowPanel(content: WindowContent) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = Signal::derive(move || runtime.state.with(|desktop| desktop.language));

    match content {
        WindowContent::Hero => view! {
            <Stack gap=LayoutGap::Sm layout_class="panel-hero">
                <Heading level=1>{text(language, TextKey::HeroTitle)}</Heading>
                <Text role=TextRole::Title tone=TextTone::Secondary>
                    {text(language, TextKey::HeroSubtitle)}
                </Text>
            </Stack>
        }
        .into_view(),
        WindowContent::Manifesto => view! {
            <Stack gap=LayoutGap::Sm>
                <Heading level=2>{text(language, TextKey::ManifestoTitle)}</Heading>
                <p>{text(language, TextKey::ManifestoText1)}</p>
                <p>{text(language, TextKey::ManifestoText2)}</p>
            </Stack>
        }
        .into_view(),
        WindowContent::Friends => view! {
            <Stack gap=LayoutGap::Sm>
                <Heading level=2>{text(language, TextKey::FriendsTitle)}</Heading>
                <Text>{text(language, TextKey::FriendsDescription)}</Text>
                <Grid gap=LayoutGap::Sm>
                    <FriendCard
                        language=language
                        title=TextKey::FriendsCodersTitle
                        description=TextKey::FriendsCodersDescription
                    />
                    <FriendCard
                        language=language
                        title=TextKey::FriendsProductsTitle
                        description=TextKey::FriendsProductsDescription
                    />
                    <FriendCard
                        language=language
                        title=TextKey::FriendsCreatorsTitle
                        description=TextKey::FriendsCreatorsDescription
                    />
                </Grid>
            </Stack>
        }
        .into_view(),
        WindowContent::Cafe => view! {
            <Stack gap=LayoutGap::Sm>
                <Heading level=2>{text(language, TextKey::CafeTitle)}</Heading>
                <Text>{text(language, TextKey::CafeDescription)}</Text>
                <Text tone=TextTone::Secondary>{text(language, TextKey::CafeDetails)}</Text>
                <Text role=TextRole::Caption tone=TextTone::Accent>
                    {text(language, TextKey::CafeComingSoon)}
                </Text>
            </Stack>
        }
        .into_view(),
        WindowContent::Contact => view! {
            <Stack gap=LayoutGap::Sm>
                <Heading level=2>{text(language, TextKey::ContactTitle)}</Heading>
                <Text>{text(language, TextKey::ContactDescription)}</Text>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Md
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::OpenExternalUrl {
                            url: CONTACT_MAILTO.to_string(),
                        });
                    })
                >
                    {text(language, TextKey::ContactButton)}
                </Button>
            </Stack>
        }
        .into_view(),
        WindowContent::Note { .. } => ().into_view(),
    }
}

#[component]
fn FriendCard(language: Signal<Language>, title: TextKey, description: TextKey) -> impl IntoView {
    view! {
        <Card ui_slot="friend-card">
            <Text role=TextRole::Label>{text(language, title)}</Text>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{text(language, description)}</Text>
        </Card>
    }
}
