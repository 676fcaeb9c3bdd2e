use desktop_runtime::{use_desktop_runtime, DesktopAction};
use leptos::*;
use platform_host::GeoPoint;
use platform_host_web::current_page_url;
use site_content::{
    cost_label, distance_label, haversine_km, link_share_url, load_places, places_result_count,
    search_places, sort_places, translate, MapFrame, Place, PlaceSort, TextKey,
    CONTRIBUTE_PLACE_URL,
};
use system_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, Grid, LayoutGap,
    SegmentedControl, SegmentedControlOption, Stack, Text, TextField, TextRole, TextTone,
};

use super::{page_language, text, PageHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PlacesView {
    #[default]
    Map,
    List,
}

/// Places narrowed by `query`, then ordered by `order`.
fn visible_places(
    places: &[Place],
    query: &str,
    order: PlaceSort,
    origin: Option<GeoPoint>,
) -> Vec<Place> {
    let mut matches = search_places(places, query);
    sort_places(&mut matches, order, origin);
    matches
}

#[component]
pub fn PlacesPage() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = page_language();

    let places = store_value(match load_places() {
        Ok(places) => places,
        Err(err) => {
            logging::warn!("places listing unavailable: {err}");
            Vec::new()
        }
    });
    let query = create_rw_signal(String::new());
    let mode = create_rw_signal(PlacesView::default());
    let order = create_rw_signal(PlaceSort::default());
    let user_location = create_rw_signal(None::<GeoPoint>);
    let locate_failed = create_rw_signal(false);
    let share_open = create_rw_signal(false);

    let visible = create_memo(move |_| {
        let (order, origin) = (order.get(), user_location.get());
        query.with(|query| {
            places.with_value(|places| visible_places(places, query, order, origin))
        })
    });
    let frame = create_memo(move |_| MapFrame::fit(&visible.get(), user_location.get()));

    let locate = move |report_failure: bool| {
        let geolocation = runtime.host.get_value().geolocation_service();
        spawn_local(async move {
            match geolocation.current_position().await {
                Ok(point) => {
                    user_location.set(Some(point));
                    locate_failed.set(false);
                }
                Err(err) => {
                    logging::warn!("geolocation lookup failed: {err}");
                    if report_failure {
                        locate_failed.set(true);
                    }
                }
            }
        });
    };
    create_effect(move |_| locate(false));

    let open = move |url: String| runtime.dispatch_action(DesktopAction::OpenExternalUrl { url });

    view! {
        <section data-ui-slot="places-page">
            <PageHeader title=TextKey::PlacesTitle subtitle=TextKey::PlacesSubtitle>
                <div data-ui-slot="share-menu">
                    <Button
                        size=ButtonSize::Sm
                        aria_expanded=share_open
                        on_click=Callback::new(move |_| share_open.update(|open| *open = !*open))
                    >
                        {text(language, TextKey::PlacesShare)}
                    </Button>
                    <Show when=move || share_open.get() fallback=|| ()>
                        <Stack gap=LayoutGap::None layout_class="ui-menu-surface">
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| {
                                    share_open.set(false);
                                    runtime.dispatch_action(DesktopAction::CopyText {
                                        text: current_page_url(),
                                    });
                                })
                            >
                                {text(language, TextKey::PlacesCopyLink)}
                            </Button>
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| {
                                    share_open.set(false);
                                    open(link_share_url(&current_page_url()));
                                })
                            >
                                "𝕏"
                            </Button>
                        </Stack>
                    </Show>
                </div>
                <Button
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| open(CONTRIBUTE_PLACE_URL.to_string()))
                >
                    {text(language, TextKey::PlacesContribute)}
                </Button>
            </PageHeader>

            <Cluster gap=LayoutGap::Sm>
                <TextField
                    input_type="search"
                    value=query
                    placeholder=Signal::derive(move || translate(language.get(), TextKey::PlacesSearchPlaceholder).to_string())
                    aria_label=Signal::derive(move || translate(language.get(), TextKey::PlacesSearchPlaceholder).to_string())
                    on_input=Callback::new(move |ev: web_sys::Event| query.set(event_target_value(&ev)))
                />
                <SegmentedControl>
                    <SegmentedControlOption
                        selected=Signal::derive(move || mode.get() == PlacesView::Map)
                        on_click=Callback::new(move |_| mode.set(PlacesView::Map))
                    >
                        {text(language, TextKey::PlacesViewMap)}
                    </SegmentedControlOption>
                    <SegmentedControlOption
                        selected=Signal::derive(move || mode.get() == PlacesView::List)
                        on_click=Callback::new(move |_| mode.set(PlacesView::List))
                    >
                        {text(language, TextKey::PlacesViewList)}
                    </SegmentedControlOption>
                </SegmentedControl>
                <SegmentedControl>
                    <SegmentedControlOption
                        selected=Signal::derive(move || order.get() == PlaceSort::Distance)
                        disabled=Signal::derive(move || user_location.get().is_none())
                        on_click=Callback::new(move |_| order.set(PlaceSort::Distance))
                    >
                        {text(language, TextKey::PlacesSortDistance)}
                    </SegmentedControlOption>
                    <SegmentedControlOption
                        selected=Signal::derive(move || order.get() == PlaceSort::Name)
                        on_click=Callback::new(move |_| order.set(PlaceSort::Name))
                    >
                        {text(language, TextKey::PlacesSortName)}
                    </SegmentedControlOption>
                </SegmentedControl>
                <Button size=ButtonSize::Sm on_click=Callback::new(move |_| locate(true))>
                    {text(language, TextKey::PlacesLocate)}
                </Button>
            </Cluster>

            <Show when=move || locate_failed.get() fallback=|| ()>
                <Text role=TextRole::Caption tone=TextTone::Warning>
                    {text(language, TextKey::PlacesLocateFailed)}
                </Text>
            </Show>
            <Show when=move || !query.with(|query| query.trim().is_empty()) fallback=|| ()>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || places_result_count(language.get(), visible.with(Vec::len))}
                </Text>
            </Show>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! { <EmptyState>{text(language, TextKey::PlacesEmpty)}</EmptyState> }
            >
                <Show
                    when=move || mode.get() == PlacesView::Map
                    fallback=move || view! { <PlaceList places=visible user_location=user_location.into() /> }
                >
                    <div data-ui-slot="places-map">
                        <iframe
                            title=move || translate(language.get(), TextKey::PlacesViewMap)
                            src=move || frame.get().embed_url()
                            loading="lazy"
                        ></iframe>
                        <PlaceList places=visible user_location=user_location.into() />
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn PlaceList(places: Memo<Vec<Place>>, user_location: Signal<Option<GeoPoint>>) -> impl IntoView {
    view! {
        <Grid gap=LayoutGap::Md>
            <For each=move || places.get() key=|place| place.id.clone() let:place>
                <PlaceCard place=place user_location=user_location />
            </For>
        </Grid>
    }
}

#[component]
fn PlaceCard(place: Place, user_location: Signal<Option<GeoPoint>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = page_language();
    let coordinates = place.coordinates();
    let distance = move || {
        user_location
            .get()
            .zip(coordinates)
            .map(|(origin, point)| distance_label(haversine_km(origin, point)))
    };
    let cost = place.cost_per_person;
    let link = place.link.clone();

    view! {
        <Card ui_slot="place-card">
            {place.image_path().map(|src| view! { <img src=src alt=place.title.clone() loading="lazy" /> })}
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Title>{place.title.clone()}</Text>
                {place.description.clone().map(|description| view! { <Text>{description}</Text> })}
                <Text role=TextRole::Caption tone=TextTone::Secondary>{place.address_text.clone()}</Text>
                <Cluster gap=LayoutGap::Sm>
                    {move || distance().map(|label| view! { <Badge>{label}</Badge> })}
                    {move || cost.map(|cost| view! { <Badge>{cost_label(language.get(), cost)}</Badge> })}
                    {place.opening_hours.clone().map(|hours| view! { <Badge>{hours}</Badge> })}
                </Cluster>
                {link.map(|url| {
                    view! {
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Quiet
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenExternalUrl { url: url.clone() });
                            })
                        >
                            {text(language, TextKey::PlacesOpenLink)}
                        </Button>
                    }
                })}
            </Stack>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn place(id: &str, title: &str, coords: Option<(f64, f64)>) -> Place {
        Place {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            address_text: "Haidian".to_string(),
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lng)| lng),
            cost_per_person: None,
            opening_hours: None,
            link: None,
            image: None,
        }
    }

    #[test]
    fn visible_places_filters_before_sorting() {
        let places = vec![
            place("far", "Far Loft", Some((40.5, 116.4))),
            place("lib", "Library", Some((39.95, 116.4))),
            place("near", "Near Loft", Some((39.91, 116.4))),
        ];
        let origin = GeoPoint {
            lat: 39.9,
            lng: 116.4,
        };

        let ids: Vec<String> = visible_places(&places, "loft", PlaceSort::Distance, Some(origin))
            .into_iter()
            .map(|place| place.id)
            .collect();
        assert_eq!(ids, vec!["near".to_string(), "far".to_string()]);
    }
}
