//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too, where it degrades to the headless behavior so
//! the desktop runtime can be unit tested without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-service bundle construction for the site entry point.
pub mod adapters;
pub mod clipboard;
pub mod cookie;
pub mod external_url;
pub mod geolocation;
pub mod local_prefs;

pub use adapters::build_host_services;
pub use clipboard::WebClipboardService;
pub use cookie::{language_cookie, read_cookie, write_language_cookie, LANGUAGE_COOKIE};
pub use external_url::{current_page_url, WebExternalUrlService};
pub use geolocation::WebGeolocationService;
pub use local_prefs::WebPrefsStore;
