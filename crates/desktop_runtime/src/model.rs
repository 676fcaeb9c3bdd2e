use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use site_content::Language;

use crate::trash::TrashSequence;

/// Default window width.
pub const WINDOW_WIDTH: i32 = 400;
/// Default window height.
pub const WINDOW_HEIGHT: i32 = 240;
/// Gap between windows and between windows and the viewport edge.
pub const WINDOW_MARGIN: i32 = 20;
/// Resize never shrinks a window below this width.
pub const MIN_RESIZE_WIDTH: i32 = 300;
/// Resize never shrinks a window below this height.
pub const MIN_RESIZE_HEIGHT: i32 = 200;
/// Delay between window closes while emptying the trash.
pub const TRASH_CLOSE_STEP: Duration = Duration::from_millis(200);
/// Delay between icon deletions while emptying the trash.
pub const TRASH_DELETE_STEP: Duration = Duration::from_millis(100);
/// Viewports narrower than this render windows as a stacked column.
pub const MOBILE_BREAKPOINT: i32 = 768;
/// Viewport assumed before the browser reports one.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1200,
    height: 800,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

/// Body rendered inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowContent {
    Hero,
    Manifesto,
    Friends,
    Cafe,
    Contact,
    Note {
        #[serde(default)]
        body: String,
    },
}

impl WindowContent {
    pub fn icon_id(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Manifesto => "document",
            Self::Friends => "people",
            Self::Cafe => "cafe",
            Self::Contact => "mail",
            Self::Note { .. } => "note",
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Self::Note { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub is_open: bool,
    pub z_index: u32,
    pub position: WindowPosition,
    pub size: Option<WindowSize>,
    pub last_position: Option<WindowPosition>,
    pub is_deleted: bool,
    pub content: WindowContent,
}

impl WindowRecord {
    pub fn effective_size(&self) -> WindowSize {
        self.size.unwrap_or_default()
    }

    /// Open and not deleted.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_deleted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesktopSkin {
    #[default]
    ClassicMac,
    Windows95,
    Linux,
    Terminal,
}

impl DesktopSkin {
    pub const ALL: [Self; 4] = [Self::ClassicMac, Self::Windows95, Self::Linux, Self::Terminal];

    /// Stable id stored in prefs and exposed as `data-ui-skin`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ClassicMac => "mac",
            Self::Windows95 => "windows",
            Self::Linux => "linux",
            Self::Terminal => "terminal",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skin| skin.id() == id)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassicMac => "Classic Mac",
            Self::Windows95 => "Windows 95",
            Self::Linux => "Linux",
            Self::Terminal => "Terminal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopTheme {
    pub skin: DesktopSkin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub viewport: Viewport,
    pub trash: Option<TrashSequence>,
    pub theme: DesktopTheme,
    pub language: Language,
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    /// Highest z-index in the registry, 0 when it is empty.
    pub fn current_max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Visible window drawn on top, if any.
    pub fn top_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    pub fn trash_running(&self) -> bool {
        self.trash.is_some()
    }
}
