//! Per-skin window chrome parameters.
//!
//! Components never branch on [`DesktopSkin`] directly; they read a [`WindowChrome`] and render
//! its tokens.

use crate::model::DesktopSkin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    /// `data-ui-chrome` token on the window frame.
    pub frame_token: &'static str,
    /// Layout class added to the title bar.
    pub titlebar_class: &'static str,
    /// Layout class added to the close control.
    pub close_class: &'static str,
    /// Glyph or word shown in the close control.
    pub close_label: &'static str,
    /// Mac-style red/yellow/green buttons on the left of the title bar.
    pub traffic_lights: bool,
    /// `data-ui-align` value for the title.
    pub title_align: &'static str,
    /// Desktop icons draw a glyph box above the label. Terminal icons are text only.
    pub icon_box: bool,
    /// `data-ui-selected` token applied to an open window's icon label.
    pub selected_token: &'static str,
    /// Brand mark at the start of the menu bar.
    pub brand_mark: &'static str,
}

const CLASSIC_MAC: WindowChrome = WindowChrome {
    frame_token: "mac",
    titlebar_class: "titlebar-mac",
    close_class: "close-traffic-light",
    close_label: "×",
    traffic_lights: true,
    title_align: "center",
    icon_box: true,
    selected_token: "inverted",
    brand_mark: "🍎",
};

const WINDOWS_95: WindowChrome = WindowChrome {
    frame_token: "windows",
    titlebar_class: "titlebar-win95",
    close_class: "close-bevel",
    close_label: "×",
    traffic_lights: false,
    title_align: "start",
    icon_box: true,
    selected_token: "highlight",
    brand_mark: "⊞",
};

const LINUX: WindowChrome = WindowChrome {
    frame_token: "linux",
    titlebar_class: "titlebar-linux",
    close_class: "close-flat",
    close_label: "×",
    traffic_lights: false,
    title_align: "center",
    icon_box: true,
    selected_token: "accent",
    brand_mark: "🐧",
};

const TERMINAL: WindowChrome = WindowChrome {
    frame_token: "terminal",
    titlebar_class: "titlebar-terminal",
    close_class: "close-text",
    close_label: "close",
    traffic_lights: false,
    title_align: "start",
    icon_box: false,
    selected_token: "reverse",
    brand_mark: ">_",
};

impl DesktopSkin {
    pub const fn chrome(self) -> WindowChrome {
        match self {
            Self::ClassicMac => CLASSIC_MAC,
            Self::Windows95 => WINDOWS_95,
            Self::Linux => LINUX,
            Self::Terminal => TERMINAL,
        }
    }
}
