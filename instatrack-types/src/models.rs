use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::enums::{ColorScheme, ContentType, DashboardTab, PostedTime, ThemePalette};
use crate::views::DashboardView;

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// Account-level numbers for one competitor handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    /// Percentage, e.g. `4.2` means 4.2%
    pub engagement_rate: f64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub username: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub likes: u64,
    pub comments: u64,
    /// likes + comments
    pub engagement: u64,
    pub content_type: ContentType,
    pub posted_time: PostedTime,
    pub hashtags: Vec<String>,
}

impl PostRecord {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    pub fn hashtags_count(&self) -> usize {
        self.hashtags.len()
    }
}

/// Everything produced for one handle in a single analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedProfile {
    pub profile: ProfileRecord,
    pub posts: Vec<PostRecord>,
    pub trending_hashtags: Vec<String>,
    #[serde(with = "datetime_format")]
    pub analyzed_at: DateTime<Utc>,
}

/// The in-memory tabular dataset of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub profiles: Vec<AnalyzedProfile>,
    pub post_count: usize,
    #[serde(with = "datetime_format")]
    pub generated_at: DateTime<Utc>,
}

impl Dataset {
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            profiles: Vec::new(),
            post_count: 0,
            generated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// All post records across every handle, in handle order
    pub fn posts(&self) -> impl Iterator<Item = &PostRecord> {
        self.profiles.iter().flat_map(|p| p.posts.iter())
    }

    pub fn total_posts(&self) -> usize {
        self.profiles.iter().map(|p| p.posts.len()).sum()
    }

    /// Flatten into one row per post, joined with its profile
    pub fn rows(&self) -> Vec<ExportRow> {
        self.profiles
            .iter()
            .flat_map(|analyzed| {
                analyzed
                    .posts
                    .iter()
                    .map(move |post| ExportRow::new(&analyzed.profile, post))
            })
            .collect()
    }
}

/// One flattened row of the exported dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    pub engagement_rate: f64,
    pub verified: bool,
    pub date: String,
    pub timestamp: String,
    pub hour: u32,
    pub day_of_week: String,
    pub likes: u64,
    pub comments: u64,
    pub engagement: u64,
    pub content_type: ContentType,
    pub posted_time: PostedTime,
    pub hashtags_count: usize,
    pub hashtags: String,
}

impl ExportRow {
    pub fn new(profile: &ProfileRecord, post: &PostRecord) -> Self {
        Self {
            username: profile.username.clone(),
            followers: profile.followers,
            following: profile.following,
            posts_count: profile.posts_count,
            engagement_rate: (profile.engagement_rate * 100.0).round() / 100.0,
            verified: profile.verified,
            date: post.date().format("%Y-%m-%d").to_string(),
            timestamp: post.timestamp.to_rfc3339(),
            hour: post.hour(),
            day_of_week: post.weekday().to_string(),
            likes: post.likes,
            comments: post.comments,
            engagement: post.engagement,
            content_type: post.content_type,
            posted_time: post.posted_time,
            hashtags_count: post.hashtags_count(),
            hashtags: post.hashtags.join(" "),
        }
    }
}

// Request/Response types for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub handles: Vec<String>,
    #[serde(default)]
    pub post_count: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub session_token: String,
    pub dashboard: DashboardView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub tab: DashboardTab,
    pub title: String,
}

/// Static UI options served to the dashboard page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    pub color_scheme: ColorScheme,
    pub theme: ThemePalette,
    pub sample_handles: Vec<String>,
    pub default_handles: Vec<String>,
    pub min_posts: usize,
    pub max_posts: usize,
    pub default_posts: usize,
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
