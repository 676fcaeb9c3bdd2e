//! Places directory: bundled listing, search, distance sort, and map framing.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use platform_host::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::i18n::{translate, Language, TextKey};
use crate::ContentError;

const PLACES_JSON: &str = include_str!("../data/places.json");

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Map center used when there is nothing to frame (Beijing).
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint {
    lat: 39.9042,
    lng: 116.4074,
};
/// Issue form for suggesting a new place.
pub const CONTRIBUTE_PLACE_URL: &str =
    "https://github.com/vibe-cafe/vibe-places-data/issues/new?template=new-place.yml";
/// Zoom used with [`DEFAULT_MAP_CENTER`].
pub const DEFAULT_MAP_ZOOM: u8 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry in the places directory.
pub struct Place {
    /// Stable listing id.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Street address as displayed.
    pub address_text: String,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Typical spend per person in yuan.
    #[serde(default)]
    pub cost_per_person: Option<u32>,
    /// Opening hours as displayed.
    #[serde(default)]
    pub opening_hours: Option<String>,
    /// External link.
    #[serde(default)]
    pub link: Option<String>,
    /// Image file name under `/images/places/`.
    #[serde(default)]
    pub image: Option<String>,
}

impl Place {
    /// Coordinates, when both latitude and longitude are present.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }

    /// Public path of the listing image.
    pub fn image_path(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(|image| format!("/images/places/{image}"))
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
            || self.address_text.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Sort order for the list view.
pub enum PlaceSort {
    /// Nearest first, when the user location is known.
    #[default]
    Distance,
    /// Alphabetical by title.
    Name,
}

/// Decodes a places document.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] when the document does not match the [`Place`] schema.
pub fn parse_places(json: &str) -> Result<Vec<Place>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        document: "places.json",
        source,
    })
}

/// Loads the bundled places listing, ordered by title.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] when the bundled document is malformed.
pub fn load_places() -> Result<Vec<Place>, ContentError> {
    let mut places = parse_places(PLACES_JSON)?;
    sort_places(&mut places, PlaceSort::Name, None);
    Ok(places)
}

/// Case-insensitive substring search over title, description, and address.
///
/// A blank query returns every place.
pub fn search_places(places: &[Place], query: &str) -> Vec<Place> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return places.to_vec();
    }
    places
        .iter()
        .filter(|place| place.matches(&needle))
        .cloned()
        .collect()
}

fn title_collator() -> Option<Collator> {
    Collator::try_new(&locale!("zh").into(), CollatorOptions::new()).ok()
}

/// Compares two titles in Chinese (pinyin) collation order, Latin before Han.
///
/// Falls back to code-point order when no collation data is available.
pub fn compare_titles(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Sorts `places` in place. The sort is stable.
///
/// Name sort follows [`compare_titles`]. Distance sort needs `origin`; without it the input order is kept. Places without coordinates
/// go after every place that has them.
pub fn sort_places(places: &mut [Place], order: PlaceSort, origin: Option<GeoPoint>) {
    match (order, origin) {
        (PlaceSort::Name, _) => {
            let collator = title_collator();
            places.sort_by(|a, b| compare_titles(collator.as_ref(), &a.title, &b.title));
        }
        (PlaceSort::Distance, Some(origin)) => places.sort_by(|a, b| {
            let da = a.coordinates().map(|point| haversine_km(origin, point));
            let db = b.coordinates().map(|point| haversine_km(origin, point));
            match (da, db) {
                (Some(da), Some(db)) => da.total_cmp(&db),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        (PlaceSort::Distance, None) => {}
    }
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Formats a distance: meters below one kilometer, one decimal kilometer otherwise.
pub fn distance_label(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1}km")
    }
}

/// Formats a per-person cost. Zero reads as free.
pub fn cost_label(language: Language, cost: u32) -> String {
    if cost == 0 {
        translate(language, TextKey::PlacesFree).to_string()
    } else {
        format!("¥{cost}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Center and zoom for the map view.
pub struct MapFrame {
    /// Map center.
    pub center: GeoPoint,
    /// Slippy-map zoom level.
    pub zoom: u8,
}

impl MapFrame {
    /// Frames every located place plus the user position.
    ///
    /// The center is the mean of all points. One point zooms to 15, up to three to 14, more to
    /// 13. With no points the frame falls back to [`DEFAULT_MAP_CENTER`].
    pub fn fit(places: &[Place], user: Option<GeoPoint>) -> Self {
        let points: Vec<GeoPoint> = places
            .iter()
            .filter_map(Place::coordinates)
            .chain(user)
            .collect();
        if points.is_empty() {
            return Self {
                center: DEFAULT_MAP_CENTER,
                zoom: DEFAULT_MAP_ZOOM,
            };
        }

        let count = points.len() as f64;
        let lat = points.iter().map(|point| point.lat).sum::<f64>() / count;
        let lng = points.iter().map(|point| point.lng).sum::<f64>() / count;
        let zoom = match points.len() {
            1 => 15,
            2..=3 => 14,
            _ => 13,
        };
        Self {
            center: GeoPoint { lat, lng },
            zoom,
        }
    }

    /// OpenStreetMap embed URL showing this frame with a marker at the center.
    pub fn embed_url(&self) -> String {
        let span_lng = 360.0 / f64::from(1u32 << self.zoom.min(19));
        let span_lat = span_lng / 2.0;
        let GeoPoint { lat, lng } = self.center;
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.5}%2C{:.5}%2C{:.5}%2C{:.5}&layer=mapnik&marker={lat:.5}%2C{lng:.5}",
            lng - span_lng,
            lat - span_lat,
            lng + span_lng,
            lat + span_lat,
        )
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
            address_text: format!("{title} street"),
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lng)| lng),
            cost_per_person: None,
            opening_hours: None,
            link: None,
            image: None,
        }
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|place| place.id.as_str()).collect()
    }

    #[test]
    fn bundled_places_parse_and_are_sorted_by_title() {
        let places = load_places().expect("bundled places");
        assert!(!places.is_empty());
        let collator = title_collator();
        assert!(places.windows(2).all(|pair| {
            compare_titles(collator.as_ref(), &pair[0].title, &pair[1].title) != Ordering::Greater
        }));
    }

    #[test]
    fn name_sort_uses_pinyin_order_and_ignores_case() {
        let mut places = vec![
            place("sh", "上海咖啡", None),
            place("zebra", "Zebra Lab", None),
            place("bj", "北京咖啡", None),
            place("apple", "apple house", None),
        ];
        sort_places(&mut places, PlaceSort::Name, None);
        assert_eq!(ids(&places), vec!["apple", "zebra", "bj", "sh"]);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let mut cafe = place("a", "Moonlight Cafe", None);
        cafe.description = Some("Quiet LOFT with wifi".to_string());
        let places = vec![cafe, place("b", "Library", None)];

        assert_eq!(ids(&search_places(&places, "  loft ")), vec!["a"]);
        assert_eq!(ids(&search_places(&places, "LIBRARY")), vec!["b"]);
        assert_eq!(ids(&search_places(&places, "street")), vec!["a", "b"]);
        assert_eq!(ids(&search_places(&places, "   ")), vec!["a", "b"]);
        assert!(search_places(&places, "nowhere").is_empty());
    }

    #[test]
    fn distance_sort_puts_unlocated_places_last() {
        let origin = GeoPoint {
            lat: 39.9,
            lng: 116.4,
        };
        let mut places = vec![
            place("nowhere", "A", None),
            place("far", "B", Some((40.5, 116.4))),
            place("near", "C", Some((39.91, 116.4))),
        ];
        sort_places(&mut places, PlaceSort::Distance, Some(origin));
        assert_eq!(ids(&places), vec!["near", "far", "nowhere"]);
    }

    #[test]
    fn distance_sort_without_origin_keeps_input_order() {
        let mut places = vec![
            place("b", "B", Some((1.0, 1.0))),
            place("a", "A", Some((0.0, 0.0))),
        ];
        sort_places(&mut places, PlaceSort::Distance, None);
        assert_eq!(ids(&places), vec!["b", "a"]);
        sort_places(&mut places, PlaceSort::Name, None);
        assert_eq!(ids(&places), vec!["a", "b"]);
    }

    #[test]
    fn haversine_matches_known_distance() {
        let beijing = DEFAULT_MAP_CENTER;
        let shanghai = GeoPoint {
            lat: 31.2304,
            lng: 121.4737,
        };
        let km = haversine_km(beijing, shanghai);
        assert!((km - 1067.0).abs() < 5.0, "got {km}");
        assert_eq!(haversine_km(beijing, beijing), 0.0);
    }

    #[test]
    fn labels_switch_units_and_mark_free_entry() {
        assert_eq!(distance_label(0.4567), "457m");
        assert_eq!(distance_label(12.34), "12.3km");
        assert_eq!(cost_label(Language::Zh, 0), "免费");
        assert_eq!(cost_label(Language::En, 0), "Free");
        assert_eq!(cost_label(Language::En, 45), "¥45");
    }

    #[test]
    fn map_frame_defaults_to_beijing_and_zooms_by_point_count() {
        assert_eq!(
            MapFrame::fit(&[], None),
            MapFrame {
                center: DEFAULT_MAP_CENTER,
                zoom: 12
            }
        );

        let one = [place("a", "A", Some((10.0, 20.0)))];
        assert_eq!(MapFrame::fit(&one, None).zoom, 15);

        let user = GeoPoint {
            lat: 20.0,
            lng: 40.0,
        };
        let frame = MapFrame::fit(&one, Some(user));
        assert_eq!(frame.zoom, 14);
        assert_eq!(frame.center, GeoPoint { lat: 15.0, lng: 30.0 });

        let many: Vec<Place> = (0..4)
            .map(|i| place(&i.to_string(), "P", Some((f64::from(i), 0.0))))
            .collect();
        assert_eq!(MapFrame::fit(&many, None).zoom, 13);
    }

    #[test]
    fn embed_url_carries_marker_at_center() {
        let url = MapFrame::fit(&[], None).embed_url();
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        assert!(url.ends_with("&marker=39.90420%2C116.40740"));
    }
}
