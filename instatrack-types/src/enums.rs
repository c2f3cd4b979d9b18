use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Photo,
    Video,
    Carousel,
    Reel,
}

impl ContentType {
    /// Every content type together with its sampling weight
    pub const WEIGHTED: [(ContentType, f64); 4] = [
        (ContentType::Photo, 0.4),
        (ContentType::Video, 0.2),
        (ContentType::Carousel, 0.3),
        (ContentType::Reel, 0.1),
    ];

    pub fn all() -> [ContentType; 4] {
        [
            ContentType::Photo,
            ContentType::Video,
            ContentType::Carousel,
            ContentType::Reel,
        ]
    }
}

/// Coarse time-of-day bucket a post was published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostedTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PostedTime {
    /// Bucket for an hour of day (0..24).
    ///
    /// Morning is 05-11, afternoon 12-16, evening 17-20 and night covers the rest.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => PostedTime::Morning,
            12..=16 => PostedTime::Afternoon,
            17..=20 => PostedTime::Evening,
            _ => PostedTime::Night,
        }
    }
}

/// The fixed set of dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    Overview,
    Engagement,
    Content,
    Hashtags,
    PostingPatterns,
}

impl DashboardTab {
    pub fn all() -> [DashboardTab; 5] {
        [
            DashboardTab::Overview,
            DashboardTab::Engagement,
            DashboardTab::Content,
            DashboardTab::Hashtags,
            DashboardTab::PostingPatterns,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Engagement => "Engagement Analysis",
            DashboardTab::Content => "Content Analysis",
            DashboardTab::Hashtags => "Hashtag Analysis",
            DashboardTab::PostingPatterns => "Posting Patterns",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "overview" => Some(DashboardTab::Overview),
            "engagement" => Some(DashboardTab::Engagement),
            "content" => Some(DashboardTab::Content),
            "hashtags" => Some(DashboardTab::Hashtags),
            "posting-patterns" => Some(DashboardTab::PostingPatterns),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    Default,
    Dark,
    Light,
    Solarized,
}

/// CSS colors handed to the dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_dim: String,
    pub background: String,
    pub surface: String,
    pub border: String,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Default => "Default",
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Solarized => "Solarized",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Default" => Some(ColorScheme::Default),
            "Dark" => Some(ColorScheme::Dark),
            "Light" => Some(ColorScheme::Light),
            "Solarized" => Some(ColorScheme::Solarized),
            _ => None,
        }
    }

    pub fn palette(&self) -> ThemePalette {
        let (primary, secondary, accent, text, text_dim, background, surface, border) = match self {
            // Instagram gradient colors on white
            ColorScheme::Default => (
                "#1DA1F2", "#833AB4", "#E1306C", "#262626", "#8E8E8E", "#FAFAFA", "#FFFFFF",
                "#DBDBDB",
            ),
            ColorScheme::Dark => (
                "#64C8FF", "#9696FF", "#FF64C8", "#DCDCDC", "#787878", "#121212", "#1E1E1E",
                "#3C3C3C",
            ),
            ColorScheme::Light => (
                "#0064C8", "#6432C8", "#C80064", "#1E1E1E", "#646464", "#FFFFFF", "#F5F5F5",
                "#C8C8C8",
            ),
            ColorScheme::Solarized => (
                "#268BD2", "#6C71C4", "#D33682", "#839496", "#586E75", "#002B36", "#073642",
                "#586E75",
            ),
        };

        ThemePalette {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            text: text.to_string(),
            text_dim: text_dim.to_string(),
            background: background.to_string(),
            surface: surface.to_string(),
            border: border.to_string(),
        }
    }
}
