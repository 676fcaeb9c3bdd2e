//! Seed configuration for the desktop registry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use site_content::Language;
use thiserror::Error;

use crate::layout::compute_initial_position;
use crate::model::{
    DesktopSkin, DesktopState, DesktopTheme, Viewport, WindowContent, WindowId, WindowRecord,
    WindowSize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One statically configured window.
pub struct SeedWindow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub z_index: u32,
    #[serde(default)]
    pub size: Option<WindowSize>,
    pub content: WindowContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the desktop needs to boot before preferences are hydrated.
pub struct DesktopConfig {
    pub windows: Vec<SeedWindow>,
    #[serde(default)]
    pub skin: DesktopSkin,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Seed list problems caught before the registry is built.
pub enum ConfigError {
    /// Two seeds share an id.
    #[error("duplicate window id `{0}`")]
    DuplicateWindowId(String),
    /// A seed has a blank id.
    #[error("window id must not be empty")]
    EmptyWindowId,
    /// A seed asks for a non-positive size.
    #[error("window `{id}` has invalid size {width}x{height}")]
    InvalidSize {
        /// Offending seed.
        id: String,
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
}

fn seed(id: &str, title: &str, z_index: u32, content: WindowContent) -> SeedWindow {
    SeedWindow {
        id: id.to_string(),
        title: title.to_string(),
        is_open: true,
        z_index,
        size: None,
        content,
    }
}

impl DesktopConfig {
    /// The landing page panels.
    pub fn builtin() -> Self {
        Self {
            windows: vec![
                seed("hero", "VibeCafé", 1, WindowContent::Hero),
                seed("manifesto", "Manifesto.txt", 2, WindowContent::Manifesto),
                seed("vibe-friends", "VibeFriends", 3, WindowContent::Friends),
                seed("vibe-cafe", "VibeCafé Space", 4, WindowContent::Cafe),
                seed("contact", "Contact", 5, WindowContent::Contact),
            ],
            skin: DesktopSkin::default(),
            language: Language::default(),
        }
    }

    /// Checks id uniqueness and sizes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in seed order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for seed in &self.windows {
            if seed.id.trim().is_empty() {
                return Err(ConfigError::EmptyWindowId);
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(ConfigError::DuplicateWindowId(seed.id.clone()));
            }
            if let Some(size) = seed.size {
                if size.width <= 0 || size.height <= 0 {
                    return Err(ConfigError::InvalidSize {
                        id: seed.id.clone(),
                        width: size.width,
                        height: size.height,
                    });
                }
            }
        }
        Ok(())
    }

    /// Builds the registry, placing every seed with the grid layout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when [`DesktopConfig::validate`] fails.
    pub fn initial_state(&self, viewport: Viewport) -> Result<DesktopState, ConfigError> {
        self.validate()?;
        let total = self.windows.len();
        let windows = self
            .windows
            .iter()
            .enumerate()
            .map(|(index, seed)| {
                let position = compute_initial_position(index, total, viewport);
                WindowRecord {
                    id: WindowId::new(seed.id.clone()),
                    title: seed.title.clone(),
                    is_open: seed.is_open,
                    z_index: seed.z_index,
                    position,
                    size: seed.size,
                    last_position: Some(position),
                    is_deleted: false,
                    content: seed.content.clone(),
                }
            })
            .collect();

        Ok(DesktopState {
            windows,
            viewport,
            trash: None,
            theme: DesktopTheme { skin: self.skin },
            language: self.language,
        })
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowPosition;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_config_is_valid() {
        let config = DesktopConfig::builtin();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.windows.len(), 5);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut config = DesktopConfig::builtin();
        config.windows[1].id = "hero".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateWindowId("hero".to_string()))
        );
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        let mut config = DesktopConfig::builtin();
        config.windows[0].size = Some(WindowSize::new(0, 200));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { width: 0, .. })
        ));
    }

    #[test]
    fn initial_state_records_layout_as_last_position() {
        let state = DesktopConfig::builtin()
            .initial_state(Viewport::new(1200, 800))
            .expect("valid config");
        let hero = &state.windows[0];
        assert_eq!(hero.position, WindowPosition::new(190, 20));
        assert_eq!(hero.last_position, Some(hero.position));
        assert!(state.windows.iter().all(|w| w.is_open && !w.is_deleted));
        assert_eq!(state.current_max_z(), 5);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: DesktopConfig = serde_json::from_str(
            r#"{"windows":[{"id":"n","title":"Note","content":{"kind":"note"}}]}"#,
        )
        .expect("config json");
        assert_eq!(config.skin, DesktopSkin::ClassicMac);
        assert_eq!(config.language, Language::Zh);
        assert_eq!(
            config.windows[0].content,
            WindowContent::Note {
                body: String::new()
            }
        );
        assert!(!config.windows[0].is_open);
    }
}
