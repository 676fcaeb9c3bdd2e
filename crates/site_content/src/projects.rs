//! Hackathon project wall listing.

use serde::{Deserialize, Serialize};

use crate::ContentError;

const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Registration form opened by the wall's apply button.
pub const APPLY_FORM_URL: &str =
    "https://cvji2p7f0zb.feishu.cn/share/base/form/shrcny72hVeWJTsOh6q5uKOSaJf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One hackathon submission.
pub struct Project {
    /// Stable listing id.
    pub id: String,
    /// Project name.
    pub title: String,
    /// Pre-rendered description markup.
    pub description_html: String,
    /// Team display name. May be empty.
    #[serde(default)]
    pub team_name: String,
    /// Screenshots, first one is the card cover.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Source repository.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Xiaohongshu post.
    #[serde(default)]
    pub xhs_url: Option<String>,
}

impl Project {
    /// Card cover image.
    pub fn cover(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Whether the detail view has a links footer.
    pub fn has_links(&self) -> bool {
        self.github_url.is_some() || self.xhs_url.is_some()
    }
}

/// Decodes a projects document.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] when the document does not match the [`Project`] schema.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        document: "projects.json",
        source,
    })
}

/// Loads the bundled project wall in file order.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] when the bundled document is malformed.
pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    parse_projects(PROJECTS_JSON)
}

/// Fisher-Yates shuffle driven by `next_random`, which yields values in `[0, 1)`.
pub fn shuffle_with<T>(items: &mut [T], mut next_random: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((next_random() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Index after `current`, wrapping to the start.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Index before `current`, wrapping to the end.
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + len - 1) % len
}
