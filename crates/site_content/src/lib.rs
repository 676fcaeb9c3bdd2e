//! Static site content: translation tables and the JSON-backed listings behind `/places` and
//! `/hacks`.
//!
//! Everything here is pure data plus the search, sort, and framing rules the pages apply to it.
//! Browser access (geolocation, randomness, clipboard) is injected by the callers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod i18n;
pub mod places;
pub mod projects;
pub mod share;

use thiserror::Error;

pub use i18n::{places_result_count, translate, Language, TextKey};
pub use places::{
    cost_label, distance_label, haversine_km, load_places, parse_places, search_places,
    sort_places, MapFrame, Place, PlaceSort, CONTRIBUTE_PLACE_URL, DEFAULT_MAP_CENTER,
};
pub use projects::{
    load_projects, next_index, parse_projects, previous_index, shuffle_with, Project, APPLY_FORM_URL,
};
pub use share::{link_share_url, note_share_url};

#[derive(Debug, Error)]
/// Errors raised while decoding bundled content.
pub enum ContentError {
    /// A bundled JSON document did not match its listing schema.
    #[error("failed to parse {document}: {source}")]
    Parse {
        /// Name of the bundled document.
        document: &'static str,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}
