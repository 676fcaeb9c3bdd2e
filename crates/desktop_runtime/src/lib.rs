//! Window manager and retro desktop shell for the landing page.
//!
//! The reducer in [`reducer`] is pure and unit tested natively. [`components`] renders the state
//! with Leptos and [`host`] runs the side effects the reducer asks for.

pub mod chrome;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod trash;
pub mod window_manager;

pub use chrome::WindowChrome;
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig, SeedWindow};
pub use model::*;
pub use persistence::{load_language, load_skin, persist_language, persist_skin};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use trash::{TrashPhase, TrashSequence};
