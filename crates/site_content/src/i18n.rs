//! Chinese/English string tables.
//!
//! Chinese is the default language. Any key without a Chinese entry falls back to English.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display language.
pub enum Language {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// Stable language code used in prefs, cookies, and `<html lang>`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Parses a language code. Region suffixes (`zh-CN`, `en_US`) are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        let base = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match base.as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// The language a toggle switches to.
    pub const fn other(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Label for the language toggle: it names the language the toggle switches to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Zh => "EN",
            Self::En => "中文",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
/// Every translated string on the site.
pub enum TextKey {
    HeroTitle,
    HeroSubtitle,
    ManifestoTitle,
    ManifestoText1,
    ManifestoText2,
    FriendsTitle,
    FriendsDescription,
    FriendsCodersTitle,
    FriendsCodersDescription,
    FriendsProductsTitle,
    FriendsProductsDescription,
    FriendsCreatorsTitle,
    FriendsCreatorsDescription,
    CafeTitle,
    CafeDescription,
    CafeDetails,
    CafeComingSoon,
    ContactTitle,
    ContactDescription,
    ContactButton,
    MenuFile,
    MenuView,
    MenuTrash,
    MenuNewNote,
    MenuEmptyTrash,
    MenuLanguage,
    TrashIcon,
    WindowClose,
    WindowResize,
    NoteTitle,
    NotePlaceholder,
    NoteCopy,
    NoteShare,
    BackHome,
    HacksTitle,
    HacksApplyButton,
    HacksTeam,
    ProjectPrevious,
    ProjectNext,
    ProjectClose,
    ImageClose,
    PlacesTitle,
    PlacesSubtitle,
    PlacesListLabel,
    PlacesSearchPlaceholder,
    PlacesViewMap,
    PlacesViewList,
    PlacesSortDistance,
    PlacesSortName,
    PlacesLocate,
    PlacesLocateFailed,
    PlacesEmpty,
    PlacesShare,
    PlacesCopyLink,
    PlacesContribute,
    PlacesOpenLink,
    PlacesFree,
    PlacesYourLocation,
}

/// Looks up `key` in `language`, falling back to English.
pub fn translate(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::Zh => chinese(key).unwrap_or_else(|| english(key)),
        Language::En => english(key),
    }
}

/// "Found N places" line shown while a search query is active.
pub fn places_result_count(language: Language, count: usize) -> String {
    match language {
        Language::Zh => format!("找到 {count} 个地点"),
        Language::En if count == 1 => "Found 1 place".to_string(),
        Language::En => format!("Found {count} places"),
    }
}

fn english(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        HeroTitle => "VibeCafé",
        HeroSubtitle => "Keep the Vibe",
        ManifestoTitle => "Vibe Manifesto",
        ManifestoText1 => "We believe in the power of creation that resonates with the soul. Every piece of code, every product, every film, and every game should carry a unique vibe that speaks to its audience.",
        ManifestoText2 => "Our mission is to gather creators who share this vision - those who don't just build, but craft experiences that leave lasting impressions.",
        FriendsTitle => "VibeFriends",
        FriendsDescription => "A growing community of passionate creators who push the boundaries of digital innovation.",
        FriendsCodersTitle => "Vibe Coders",
        FriendsCodersDescription => "Crafting elegant solutions with code",
        FriendsProductsTitle => "Vibe Products",
        FriendsProductsDescription => "Building the future of digital experiences",
        FriendsCreatorsTitle => "Vibe Creators",
        FriendsCreatorsDescription => "Bringing stories to life through various mediums",
        CafeTitle => "VibeCafé Space",
        CafeDescription => "Coming Soon: A physical space where Vibe Creators can meet, collaborate, and create together.",
        CafeDetails => "A creative hub designed for innovation and collaboration.",
        CafeComingSoon => "Stay tuned for the grand opening!",
        ContactTitle => "Contact",
        ContactDescription => "Want to join the Vibe community or learn more about what we do?",
        ContactButton => "Get in Touch",
        MenuFile => "File",
        MenuView => "View",
        MenuTrash => "Trash",
        MenuNewNote => "New Note",
        MenuEmptyTrash => "Empty Trash",
        MenuLanguage => "Language",
        TrashIcon => "Trash",
        WindowClose => "Close window",
        WindowResize => "Resize window",
        NoteTitle => "Untitled.txt",
        NotePlaceholder => "What would you like to create today to keep the vibe going?",
        NoteCopy => "Copy text",
        NoteShare => "Share to X",
        BackHome => "Back",
        HacksTitle => "Vibe Hacks",
        HacksApplyButton => "Apply Now",
        HacksTeam => "Team",
        ProjectPrevious => "Previous project",
        ProjectNext => "Next project",
        ProjectClose => "Close",
        ImageClose => "Close image",
        PlacesTitle => "Vibe Places",
        PlacesSubtitle => "Creative spaces for Vibe Friends",
        PlacesListLabel => "Places",
        PlacesSearchPlaceholder => "Search places...",
        PlacesViewMap => "Map",
        PlacesViewList => "List",
        PlacesSortDistance => "Sort by distance",
        PlacesSortName => "Sort by name",
        PlacesLocate => "Use my location",
        PlacesLocateFailed => "Could not get your location. Please check the browser permission settings.",
        PlacesEmpty => "No matching places",
        PlacesShare => "Share",
        PlacesCopyLink => "Copy link",
        PlacesContribute => "Contribute",
        PlacesOpenLink => "Open link",
        PlacesFree => "Free",
        PlacesYourLocation => "You are here",
    }
}

fn chinese(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    let text = match key {
        ManifestoTitle => "Vibe 宣言",
        ManifestoText1 => "我们相信创作的力量能够与灵魂共鸣。每一行代码、每一个产品、每一部影片和每一款游戏，都应该带有独特的共振，与受众产生共鸣。",
        ManifestoText2 => "我们的使命是聚集有着相同愿景的创作者——那些不仅仅是在创造，而是在打造能留下持久印记的体验的人。",
        FriendsDescription => "一个不断成长的创作者社区，推动数字创新的边界。",
        FriendsCodersTitle => "Vibe 工程师",
        FriendsCodersDescription => "用代码打造优雅的解决方案",
        FriendsProductsTitle => "Vibe 产品",
        FriendsProductsDescription => "构建数字体验的未来",
        FriendsCreatorsTitle => "Vibe 内容创作者",
        FriendsCreatorsDescription => "通过各种媒介让故事栩栩如生",
        CafeTitle => "VibeCafé 空间",
        CafeDescription => "即将到来：一个供Vibe创作者相遇、协作和创造的实体空间。",
        CafeDetails => "为创新和协作设计的创意中心。",
        CafeComingSoon => "敬请期待盛大开幕！",
        ContactTitle => "联系我们",
        ContactDescription => "想加入Vibe社区或了解更多关于我们的信息？",
        ContactButton => "联系我们",
        MenuFile => "文件",
        MenuView => "显示",
        MenuTrash => "废纸篓",
        MenuNewNote => "新建便签",
        MenuEmptyTrash => "清倒废纸篓",
        MenuLanguage => "语言",
        TrashIcon => "废纸篓",
        WindowClose => "关闭窗口",
        WindowResize => "调整窗口大小",
        NoteCopy => "复制文本",
        NoteShare => "分享到 X",
        BackHome => "返回",
        HacksApplyButton => "立即报名",
        HacksTeam => "团队",
        ProjectPrevious => "上一个项目",
        ProjectNext => "下一个项目",
        ProjectClose => "关闭",
        ImageClose => "关闭图片",
        PlacesSubtitle => "适合 Vibe Friends 的创作空间",
        PlacesListLabel => "地点列表",
        PlacesSearchPlaceholder => "搜索地点...",
        PlacesViewMap => "地图",
        PlacesViewList => "列表",
        PlacesSortDistance => "按距离排序",
        PlacesSortName => "按名称排序",
        PlacesLocate => "获取位置",
        PlacesLocateFailed => "无法获取位置信息，请检查浏览器权限设置",
        PlacesEmpty => "没有找到匹配的地点",
        PlacesShare => "分享",
        PlacesCopyLink => "复制链接",
        PlacesContribute => "贡献",
        PlacesOpenLink => "打开链接",
        PlacesFree => "免费",
        PlacesYourLocation => "你的位置",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chinese_is_default_and_toggle_names_the_other_language() {
        assert_eq!(Language::default(), Language::Zh);
        assert_eq!(Language::Zh.toggle_label(), "EN");
        assert_eq!(Language::En.toggle_label(), "中文");
        assert_eq!(Language::Zh.other(), Language::En);
    }

    #[test]
    fn missing_chinese_entries_fall_back_to_english() {
        assert_eq!(translate(Language::Zh, TextKey::HeroSubtitle), "Keep the Vibe");
        assert_eq!(translate(Language::Zh, TextKey::NoteTitle), "Untitled.txt");
        assert_eq!(translate(Language::Zh, TextKey::ContactTitle), "联系我们");
        assert_eq!(translate(Language::En, TextKey::ContactTitle), "Contact");
    }

    #[test]
    fn language_codes_accept_region_suffixes() {
        assert_eq!(Language::from_code("zh-CN"), Some(Language::Zh));
        assert_eq!(Language::from_code(" EN_us "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.code(), "en");
    }

    #[test]
    fn result_count_is_localized() {
        assert_eq!(places_result_count(Language::Zh, 3), "找到 3 个地点");
        assert_eq!(places_result_count(Language::En, 1), "Found 1 place");
        assert_eq!(places_result_count(Language::En, 0), "Found 0 places");
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(parsed, Language::Zh);
    }
}
