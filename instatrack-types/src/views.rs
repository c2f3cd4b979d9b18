//! Aggregated, render-ready shapes for each dashboard tab.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ContentType, PostedTime};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub has_data: bool,
    pub profile_count: usize,
    pub post_count: usize,
    pub total_posts: usize,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    pub overview: OverviewView,
    pub engagement: EngagementView,
    pub content: ContentView,
    pub hashtags: HashtagView,
    pub posting_patterns: PostingPatternsView,
}

/// A single tab, tagged with its slug
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tab", content = "view", rename_all = "kebab-case")]
pub enum TabView {
    Overview(OverviewView),
    Engagement(EngagementView),
    Content(ContentView),
    Hashtags(HashtagView),
    PostingPatterns(PostingPatternsView),
}

// Overview

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewView {
    pub summary: Vec<ProfileSummary>,
    pub scatter: Vec<FollowerEngagementPoint>,
    pub metrics: Vec<CompetitorMetrics>,
    pub insights: Option<Insights>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    pub avg_engagement: f64,
    pub engagement_rate: f64,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerEngagementPoint {
    pub username: String,
    pub followers: u64,
    pub engagement_rate: f64,
    pub posts_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorMetrics {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_engagement: f64,
    /// Computed from average likes and comments over followers
    pub engagement_rate: f64,
    pub follower_following_ratio: f64,
    pub posts_per_thousand_followers: f64,
    pub posts_per_week: f64,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub top_performers: TopPerformers,
    pub benchmarks: Benchmarks,
    pub recommendations: Recommendations,
    pub competitive_gaps: CompetitiveGaps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformers {
    pub highest_engagement: String,
    pub most_followers: String,
    pub most_active: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub avg_engagement_rate: f64,
    pub avg_followers: u64,
    pub avg_posting_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub optimal_content_type: Option<ContentType>,
    pub target_engagement_rate: f64,
    /// Posts per week
    pub recommended_posting_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveGaps {
    pub engagement_leader_advantage: f64,
    pub follower_leader_advantage: i64,
    pub activity_leader_advantage: f64,
}

// Engagement

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementView {
    pub trend: Vec<EngagementTrendPoint>,
    pub likes_vs_comments: Vec<LikesCommentsPoint>,
    pub distribution: Vec<EngagementDistribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementTrendPoint {
    pub username: String,
    pub date: NaiveDate,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikesCommentsPoint {
    pub username: String,
    pub likes: u64,
    pub comments: u64,
}

/// Five-number summary plus mean, for box plots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementDistribution {
    pub username: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

// Content

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentView {
    pub distribution: Vec<ContentCount>,
    /// Ascending by mean engagement
    pub performance: Vec<ContentPerformance>,
    pub by_competitor: Vec<ContentMix>,
    pub best_performing: Option<ContentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCount {
    pub content_type: ContentType,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPerformance {
    pub content_type: ContentType,
    pub posts: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMix {
    pub username: String,
    pub shares: Vec<ContentShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentShare {
    pub content_type: ContentType,
    pub posts: usize,
    pub percentage: f64,
}

// Hashtags

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashtagView {
    pub popular: Vec<HashtagUsage>,
    pub by_competitor: Vec<CompetitorHashtags>,
    pub top_by_frequency: Vec<HashtagCount>,
    pub top_by_engagement: Vec<HashtagEngagement>,
    pub unique_hashtags: usize,
    pub avg_hashtags_per_post: f64,
}

/// How many competitors list a tag among their trending hashtags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagUsage {
    pub hashtag: String,
    pub competitors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorHashtags {
    pub username: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagCount {
    pub hashtag: String,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagEngagement {
    pub hashtag: String,
    pub avg_engagement: f64,
}

// Posting patterns

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostingPatternsView {
    /// Descending by mean engagement
    pub time_engagement: Vec<TimeEngagement>,
    pub time_distribution: Vec<TimeCount>,
    /// Always 24 entries, one per hour
    pub hourly: Vec<HourCount>,
    pub weekly: Vec<WeeklyFrequency>,
    pub daily_distribution: Vec<DayCount>,
    pub optimal_day: Option<String>,
    pub optimal_time: Option<PostedTime>,
    pub total_posts: usize,
    pub avg_posts_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEngagement {
    pub posted_time: PostedTime,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCount {
    pub posted_time: PostedTime,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyFrequency {
    pub username: String,
    pub day: String,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub posts: usize,
}
