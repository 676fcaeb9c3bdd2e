//! Typed host-service contracts shared by the desktop runtime and the browser adapters.
//!
//! The runtime only ever talks to the traits in this crate. Concrete browser implementations live
//! in `platform_host_web`; the `Noop*` and `Memory*` adapters here back native builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod external_url;
pub mod geolocation;
pub mod host;
pub mod prefs;
pub mod time;

pub use clipboard::{ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use geolocation::{
    GeoPoint, GeolocationFuture, GeolocationService, StaticGeolocationService,
    UnavailableGeolocationService,
};
pub use host::{HostServices, HostStrategy};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    PrefsStoreFuture, LANGUAGE_PREF_KEY, SKIN_PREF_KEY,
};
pub use time::{next_unique_timestamp_ms, unix_time_ms_now};
