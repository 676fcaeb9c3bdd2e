use desktop_runtime::{use_desktop_runtime, DesktopAction};
use leptos::*;
use site_content::{
    load_projects, next_index, previous_index, shuffle_with, Project, TextKey, APPLY_FORM_URL,
};
use system_ui::{
    Button, ButtonSize, ButtonVariant, Card, Cluster, Grid, Heading, LayoutGap, LayoutJustify,
    Modal, Stack, Text, TextRole, TextTone,
};

use super::{page_language, text, PageHeader};

/// Bundled projects in a fresh random order.
fn shuffled_projects() -> Vec<Project> {
    let mut projects = match load_projects() {
        Ok(projects) => projects,
        Err(err) => {
            logging::warn!("project wall unavailable: {err}");
            return Vec::new();
        }
    };
    #[cfg(target_arch = "wasm32")]
    shuffle_with(&mut projects, js_sys::Math::random);
    #[cfg(not(target_arch = "wasm32"))]
    shuffle_with(&mut projects, || 0.999_999);
    projects
}

#[component]
pub fn HacksPage() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = page_language();
    let projects = store_value(shuffled_projects());
    let count = projects.with_value(Vec::len);
    let active = create_rw_signal(None::<usize>);
    let enlarged = create_rw_signal(None::<String>);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if enlarged.get_untracked().is_some() {
            enlarged.set(None);
        } else if active.get_untracked().is_some() {
            active.set(None);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let active_project =
        move || active.get().and_then(|index| projects.with_value(|all| all.get(index).cloned()));
    let step = move |forward: bool| {
        active.update(|current| {
            if let Some(index) = current {
                *index = if forward {
                    next_index(*index, count)
                } else {
                    previous_index(*index, count)
                };
            }
        });
    };

    view! {
        <section data-ui-slot="hacks-page">
            <PageHeader title=TextKey::HacksTitle>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::OpenExternalUrl {
                            url: APPLY_FORM_URL.to_string(),
                        });
                    })
                >
                    {text(language, TextKey::HacksApplyButton)}
                </Button>
            </PageHeader>

            <img
                data-ui-slot="hacks-poster"
                src=move || format!("/images/vibe-hacks/{}.png", language.get().code())
                alt="Vibe Hacks"
            />

            <Grid gap=LayoutGap::Lg>
                {projects
                    .get_value()
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <Card
                                ui_slot="project-card"
                                on_click=Callback::new(move |_| active.set(Some(index)))
                            >
                                {project.cover().map(|src| view! { <img src=src.to_string() alt=project.title.clone() /> })}
                                <Heading level=2>{project.title.clone()}</Heading>
                                <TeamLine team_name=project.team_name.clone() />
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>

            {move || {
                active_project().map(|project| {
                    let links = project.has_links();
                    let Project {
                        title,
                        description_html,
                        team_name,
                        image_urls,
                        github_url,
                        xhs_url,
                        ..
                    } = project;
                    let strip = image_urls
                        .into_iter()
                        .map(|src| {
                            let enlarge = src.clone();
                            view! {
                                <img
                                    src=src
                                    alt=title.clone()
                                    on:click=move |_| enlarged.set(Some(enlarge.clone()))
                                />
                            }
                        })
                        .collect_view();
                    let github = github_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    });
                    let xhs = xhs_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer">"小红书"</a>
                    });
                    view! {
                        <Modal
                            aria_label=title.clone()
                            ui_slot="project-detail"
                            on_close=Callback::new(move |_| active.set(None))
                        >
                            <Cluster justify=LayoutJustify::Between>
                                <Cluster gap=LayoutGap::Sm>
                                    <Button
                                        size=ButtonSize::Sm
                                        aria_label=Signal::derive(move || text(language, TextKey::ProjectPrevious)().to_string())
                                        on_click=Callback::new(move |_| step(false))
                                    >
                                        "‹"
                                    </Button>
                                    <Button
                                        size=ButtonSize::Sm
                                        aria_label=Signal::derive(move || text(language, TextKey::ProjectNext)().to_string())
                                        on_click=Callback::new(move |_| step(true))
                                    >
                                        "›"
                                    </Button>
                                </Cluster>
                                <Button
                                    variant=ButtonVariant::Quiet
                                    size=ButtonSize::Sm
                                    aria_label=Signal::derive(move || text(language, TextKey::ProjectClose)().to_string())
                                    on_click=Callback::new(move |_| active.set(None))
                                >
                                    "✕"
                                </Button>
                            </Cluster>
                            <Stack gap=LayoutGap::Md>
                                <div data-ui-slot="image-strip">{strip}</div>
                                <Heading level=3>{title}</Heading>
                                <TeamLine team_name=team_name />
                                <div data-ui-slot="project-description" inner_html=description_html></div>
                                {links.then(|| view! {
                                    <Cluster gap=LayoutGap::Md>{github}{xhs}</Cluster>
                                })}
                            </Stack>
                        </Modal>
                    }
                })
            }}

            {move || {
                enlarged.get().map(|src| {
                    view! {
                        <Modal
                            aria_label=Signal::derive(move || text(language, TextKey::ImageClose)().to_string())
                            ui_slot="lightbox"
                            on_close=Callback::new(move |_| enlarged.set(None))
                        >
                            <img src=src alt="" on:click=move |_| enlarged.set(None) />
                        </Modal>
                    }
                })
            }}
        </section>
    }
}

#[component]
fn TeamLine(team_name: String) -> impl IntoView {
    let language = page_language();
    (!team_name.is_empty()).then(|| {
        view! {
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {move || format!("{}: {}", text(language, TextKey::HacksTeam)(), team_name)}
            </Text>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_shuffle_keeps_every_project() {
        let mut ids: Vec<String> = shuffled_projects().into_iter().map(|p| p.id).collect();
        let mut expected: Vec<String> = load_projects()
            .expect("bundled projects")
            .into_iter()
            .map(|p| p.id)
            .collect();
        ids.sort();
        expected.sort();
        assert_eq!(ids, expected);
    }
}
