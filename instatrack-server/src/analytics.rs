//! Aggregations behind the dashboard tabs.
//!
//! Every function takes the whole [`Dataset`] and returns a render-ready view.
//! An empty dataset produces empty views rather than an error.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Weekday};
use instatrack_types::{
    AnalyzedProfile, Benchmarks, CompetitiveGaps, CompetitorHashtags, CompetitorMetrics,
    ContentCount, ContentMix, ContentPerformance, ContentShare, ContentType, ContentView,
    DashboardTab, DashboardView, Dataset, DayCount, EngagementDistribution, EngagementTrendPoint,
    EngagementView, FollowerEngagementPoint, HashtagCount, HashtagEngagement, HashtagUsage,
    HashtagView, HourCount, Insights, LikesCommentsPoint, OverviewView, PostRecord, PostedTime,
    PostingPatternsView, ProfileSummary, Recommendations, TabView, TimeCount, TimeEngagement,
    TopPerformers, WeeklyFrequency,
};

pub const POPULAR_HASHTAG_LIMIT: usize = 10;
pub const HASHTAG_RANKING_LIMIT: usize = 20;

static WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear-interpolated quantile over sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let position = q * (len - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let fraction = position - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}

/// Sample standard deviation; zero below two values
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

fn engagements<'a>(posts: impl IntoIterator<Item = &'a PostRecord>) -> Vec<f64> {
    posts.into_iter().map(|p| p.engagement as f64).collect()
}

/// First element with the strictly greatest key
fn first_max_by<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(current) if key(item) <= key(current) => Some(current),
        _ => Some(item),
    })
}

/// Engagement rate as a percentage of followers, rounded to 2 decimals
pub fn calculate_engagement_rate(likes: u64, comments: u64, followers: u64) -> f64 {
    if followers == 0 {
        return 0.0;
    }
    round2((likes + comments) as f64 / followers as f64 * 100.0)
}

/// Posts per week, from the average posts per day over a seven-day week
pub fn posts_per_week(posts: &[PostRecord]) -> f64 {
    let avg_posts_per_day = posts.len() as f64 / 7.0;
    round2(avg_posts_per_day * 7.0)
}

pub fn render_dashboard(dataset: &Dataset) -> DashboardView {
    DashboardView {
        has_data: !dataset.is_empty(),
        profile_count: dataset.profile_count(),
        post_count: dataset.post_count,
        total_posts: dataset.total_posts(),
        generated_at: (!dataset.is_empty()).then_some(dataset.generated_at),
        overview: overview(dataset),
        engagement: engagement(dataset),
        content: content(dataset),
        hashtags: hashtags(dataset),
        posting_patterns: posting_patterns(dataset),
    }
}

pub fn render_tab(dataset: &Dataset, tab: DashboardTab) -> TabView {
    match tab {
        DashboardTab::Overview => TabView::Overview(overview(dataset)),
        DashboardTab::Engagement => TabView::Engagement(engagement(dataset)),
        DashboardTab::Content => TabView::Content(content(dataset)),
        DashboardTab::Hashtags => TabView::Hashtags(hashtags(dataset)),
        DashboardTab::PostingPatterns => TabView::PostingPatterns(posting_patterns(dataset)),
    }
}

// Overview

pub fn overview(dataset: &Dataset) -> OverviewView {
    let summary = dataset
        .profiles
        .iter()
        .map(|analyzed| {
            let profile = &analyzed.profile;
            ProfileSummary {
                username: profile.username.clone(),
                followers: profile.followers,
                following: profile.following,
                posts_count: profile.posts_count,
                avg_engagement: round2(mean(&engagements(&analyzed.posts))),
                engagement_rate: round2(profile.engagement_rate),
                verified: profile.verified,
            }
        })
        .collect();

    let scatter = dataset
        .profiles
        .iter()
        .map(|analyzed| FollowerEngagementPoint {
            username: analyzed.profile.username.clone(),
            followers: analyzed.profile.followers,
            engagement_rate: round2(analyzed.profile.engagement_rate),
            posts_count: analyzed.profile.posts_count,
        })
        .collect();

    let metrics = competitor_metrics(dataset);
    let insights = generate_insights(dataset, &metrics);

    OverviewView {
        summary,
        scatter,
        metrics,
        insights,
    }
}

fn metrics_for(analyzed: &AnalyzedProfile) -> Option<CompetitorMetrics> {
    if analyzed.posts.is_empty() {
        return None;
    }

    let profile = &analyzed.profile;
    let likes: Vec<f64> = analyzed.posts.iter().map(|p| p.likes as f64).collect();
    let comments: Vec<f64> = analyzed.posts.iter().map(|p| p.comments as f64).collect();
    let avg_likes = mean(&likes);
    let avg_comments = mean(&comments);

    let follower_following_ratio = if profile.following > 0 {
        profile.followers as f64 / profile.following as f64
    } else {
        0.0
    };
    let posts_per_follower = if profile.followers > 0 {
        profile.posts_count as f64 / profile.followers as f64
    } else {
        0.0
    };

    Some(CompetitorMetrics {
        username: profile.username.clone(),
        followers: profile.followers,
        following: profile.following,
        posts_count: profile.posts_count,
        avg_likes: round2(avg_likes),
        avg_comments: round2(avg_comments),
        avg_engagement: round2(mean(&engagements(&analyzed.posts))),
        engagement_rate: calculate_engagement_rate(
            avg_likes as u64,
            avg_comments as u64,
            profile.followers,
        ),
        follower_following_ratio: round2(follower_following_ratio),
        posts_per_thousand_followers: round2(posts_per_follower * 1000.0),
        posts_per_week: posts_per_week(&analyzed.posts),
        verified: profile.verified,
    })
}

/// Per-handle comparison table; handles without posts are skipped
pub fn competitor_metrics(dataset: &Dataset) -> Vec<CompetitorMetrics> {
    dataset.profiles.iter().filter_map(metrics_for).collect()
}

pub fn generate_insights(dataset: &Dataset, metrics: &[CompetitorMetrics]) -> Option<Insights> {
    let top_engagement = first_max_by(metrics, |m| m.engagement_rate)?;
    let top_followers = first_max_by(metrics, |m| m.followers as f64)?;
    let most_active = first_max_by(metrics, |m| m.posts_per_week)?;

    let count = metrics.len() as f64;
    let avg_engagement_rate = metrics.iter().map(|m| m.engagement_rate).sum::<f64>() / count;
    let avg_followers = metrics.iter().map(|m| m.followers as f64).sum::<f64>() / count;
    let avg_posting_frequency = metrics.iter().map(|m| m.posts_per_week).sum::<f64>() / count;

    let optimal_content_type = content_performance(dataset.posts())
        .into_iter()
        .fold(None, |best: Option<ContentPerformance>, perf| match best {
            Some(current) if perf.mean <= current.mean => Some(current),
            _ => Some(perf),
        })
        .map(|perf| perf.content_type);

    Some(Insights {
        top_performers: TopPerformers {
            highest_engagement: top_engagement.username.clone(),
            most_followers: top_followers.username.clone(),
            most_active: most_active.username.clone(),
        },
        benchmarks: Benchmarks {
            avg_engagement_rate: round2(avg_engagement_rate),
            avg_followers: avg_followers as u64,
            avg_posting_frequency: round2(avg_posting_frequency),
        },
        recommendations: Recommendations {
            optimal_content_type,
            target_engagement_rate: round2(avg_engagement_rate * 1.2),
            recommended_posting_frequency: round_to(avg_posting_frequency * 1.1, 1),
        },
        competitive_gaps: CompetitiveGaps {
            engagement_leader_advantage: round2(top_engagement.engagement_rate - avg_engagement_rate),
            follower_leader_advantage: (top_followers.followers as f64 - avg_followers) as i64,
            activity_leader_advantage: round2(most_active.posts_per_week - avg_posting_frequency),
        },
    })
}

// Engagement

pub fn engagement(dataset: &Dataset) -> EngagementView {
    let mut trend = Vec::new();
    let mut distribution = Vec::new();

    for analyzed in &dataset.profiles {
        let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for post in &analyzed.posts {
            by_date.entry(post.date()).or_default().push(post.engagement as f64);
        }
        trend.extend(by_date.into_iter().map(|(date, values)| EngagementTrendPoint {
            username: analyzed.profile.username.clone(),
            date,
            avg_engagement: round2(mean(&values)),
        }));

        if analyzed.posts.is_empty() {
            continue;
        }
        let values = engagements(&analyzed.posts);
        let avg = mean(&values);
        let values = sorted(values);
        distribution.push(EngagementDistribution {
            username: analyzed.profile.username.clone(),
            min: values[0],
            q1: round2(quantile(&values, 0.25)),
            median: round2(quantile(&values, 0.5)),
            q3: round2(quantile(&values, 0.75)),
            max: values[values.len() - 1],
            mean: round2(avg),
        });
    }

    let likes_vs_comments = dataset
        .posts()
        .map(|post| LikesCommentsPoint {
            username: post.username.clone(),
            likes: post.likes,
            comments: post.comments,
        })
        .collect();

    EngagementView {
        trend,
        likes_vs_comments,
        distribution,
    }
}

// Content

fn content_performance<'a>(posts: impl Iterator<Item = &'a PostRecord>) -> Vec<ContentPerformance> {
    let mut grouped: BTreeMap<ContentType, Vec<f64>> = BTreeMap::new();
    for post in posts {
        grouped
            .entry(post.content_type)
            .or_default()
            .push(post.engagement as f64);
    }

    grouped
        .into_iter()
        .map(|(content_type, values)| {
            let avg = mean(&values);
            let deviation = std_dev(&values);
            let values = sorted(values);
            ContentPerformance {
                content_type,
                posts: values.len(),
                mean: round2(avg),
                median: round2(quantile(&values, 0.5)),
                std_dev: round2(deviation),
            }
        })
        .collect()
}

pub fn content(dataset: &Dataset) -> ContentView {
    let mut counts: HashMap<ContentType, usize> = HashMap::new();
    for post in dataset.posts() {
        *counts.entry(post.content_type).or_insert(0) += 1;
    }
    let mut distribution: Vec<ContentCount> = ContentType::all()
        .into_iter()
        .filter_map(|content_type| {
            counts.get(&content_type).map(|posts| ContentCount {
                content_type,
                posts: *posts,
            })
        })
        .collect();
    // Stable sort keeps the enum order between equal counts
    distribution.sort_by(|a, b| b.posts.cmp(&a.posts));

    let mut performance = content_performance(dataset.posts());
    let best_performing = performance
        .iter()
        .fold(None, |best: Option<&ContentPerformance>, perf| match best {
            Some(current) if perf.mean <= current.mean => Some(current),
            _ => Some(perf),
        })
        .map(|perf| perf.content_type);
    performance.sort_by(|a, b| a.mean.total_cmp(&b.mean));

    let by_competitor = dataset
        .profiles
        .iter()
        .filter(|analyzed| !analyzed.posts.is_empty())
        .map(|analyzed| {
            let total = analyzed.posts.len();
            let shares = ContentType::all()
                .into_iter()
                .map(|content_type| {
                    let posts = analyzed
                        .posts
                        .iter()
                        .filter(|p| p.content_type == content_type)
                        .count();
                    ContentShare {
                        content_type,
                        posts,
                        percentage: round2(posts as f64 / total as f64 * 100.0),
                    }
                })
                .collect();
            ContentMix {
                username: analyzed.profile.username.clone(),
                shares,
            }
        })
        .collect();

    ContentView {
        distribution,
        performance,
        by_competitor,
        best_performing,
    }
}

// Hashtags

/// Rank descending by count, then alphabetically
fn ranked<V: Copy + PartialOrd>(map: HashMap<String, V>, limit: usize) -> Vec<(String, V)> {
    let mut entries: Vec<(String, V)> = map.into_iter().collect();
    entries.sort_by(|(tag_a, a), (tag_b, b)| {
        b.partial_cmp(a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| tag_a.cmp(tag_b))
    });
    entries.truncate(limit);
    entries
}

pub fn hashtags(dataset: &Dataset) -> HashtagView {
    let mut competitor_counts: HashMap<String, usize> = HashMap::new();
    for analyzed in &dataset.profiles {
        for tag in &analyzed.trending_hashtags {
            *competitor_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    let popular = ranked(competitor_counts, POPULAR_HASHTAG_LIMIT)
        .into_iter()
        .map(|(hashtag, competitors)| HashtagUsage {
            hashtag,
            competitors,
        })
        .collect();

    let by_competitor = dataset
        .profiles
        .iter()
        .map(|analyzed| CompetitorHashtags {
            username: analyzed.profile.username.clone(),
            hashtags: analyzed.trending_hashtags.clone(),
        })
        .collect();

    let mut frequency: HashMap<String, usize> = HashMap::new();
    let mut engagement: HashMap<String, Vec<f64>> = HashMap::new();
    let mut tag_uses = 0usize;
    for post in dataset.posts() {
        for tag in &post.hashtags {
            tag_uses += 1;
            *frequency.entry(tag.clone()).or_insert(0) += 1;
            engagement
                .entry(tag.clone())
                .or_default()
                .push(post.engagement as f64);
        }
    }

    let unique_hashtags = frequency.len();
    let total_posts = dataset.total_posts();
    let avg_hashtags_per_post = if total_posts > 0 {
        round2(tag_uses as f64 / total_posts as f64)
    } else {
        0.0
    };

    let top_by_frequency = ranked(frequency, HASHTAG_RANKING_LIMIT)
        .into_iter()
        .map(|(hashtag, posts)| HashtagCount { hashtag, posts })
        .collect();

    let averages: HashMap<String, f64> = engagement
        .into_iter()
        .map(|(tag, values)| (tag, round2(mean(&values))))
        .collect();
    let top_by_engagement = ranked(averages, HASHTAG_RANKING_LIMIT)
        .into_iter()
        .map(|(hashtag, avg_engagement)| HashtagEngagement {
            hashtag,
            avg_engagement,
        })
        .collect();

    HashtagView {
        popular,
        by_competitor,
        top_by_frequency,
        top_by_engagement,
        unique_hashtags,
        avg_hashtags_per_post,
    }
}

// Posting patterns

pub fn posting_patterns(dataset: &Dataset) -> PostingPatternsView {
    let total_posts = dataset.total_posts();

    let mut by_time: BTreeMap<PostedTime, Vec<f64>> = BTreeMap::new();
    let mut hourly = [0usize; 24];
    let mut daily: HashMap<Weekday, usize> = HashMap::new();
    for post in dataset.posts() {
        by_time
            .entry(post.posted_time)
            .or_default()
            .push(post.engagement as f64);
        hourly[post.hour() as usize % 24] += 1;
        *daily.entry(post.weekday()).or_insert(0) += 1;
    }

    let mut time_engagement: Vec<TimeEngagement> = by_time
        .iter()
        .map(|(posted_time, values)| TimeEngagement {
            posted_time: *posted_time,
            avg_engagement: round2(mean(values)),
        })
        .collect();
    time_engagement.sort_by(|a, b| b.avg_engagement.total_cmp(&a.avg_engagement));

    let mut time_distribution: Vec<TimeCount> = by_time
        .iter()
        .map(|(posted_time, values)| TimeCount {
            posted_time: *posted_time,
            posts: values.len(),
        })
        .collect();
    time_distribution.sort_by(|a, b| b.posts.cmp(&a.posts));

    let hourly = hourly
        .iter()
        .enumerate()
        .map(|(hour, posts)| HourCount {
            hour: hour as u32,
            posts: *posts,
        })
        .collect();

    let weekly = dataset
        .profiles
        .iter()
        .flat_map(|analyzed| {
            WEEK.iter().map(move |day| WeeklyFrequency {
                username: analyzed.profile.username.clone(),
                day: day.to_string(),
                posts: analyzed.posts.iter().filter(|p| p.weekday() == *day).count(),
            })
        })
        .collect();

    let daily_distribution: Vec<DayCount> = WEEK
        .iter()
        .map(|day| DayCount {
            day: day.to_string(),
            posts: daily.get(day).copied().unwrap_or(0),
        })
        .collect();

    let optimal_day = if total_posts > 0 {
        first_max_by(&daily_distribution, |d| d.posts as f64).map(|d| d.day.clone())
    } else {
        None
    };
    let optimal_time = time_engagement.first().map(|t| t.posted_time);

    PostingPatternsView {
        time_engagement,
        time_distribution,
        hourly,
        weekly,
        daily_distribution,
        optimal_day,
        optimal_time,
        total_posts,
        avg_posts_per_day: round2(total_posts as f64 / 7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use instatrack_types::ProfileRecord;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        // 2024-06-03 is a Monday
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    fn post(
        username: &str,
        timestamp: DateTime<Utc>,
        likes: u64,
        comments: u64,
        content_type: ContentType,
        hashtags: &[&str],
    ) -> PostRecord {
        PostRecord {
            username: username.to_string(),
            timestamp,
            likes,
            comments,
            engagement: likes + comments,
            content_type,
            posted_time: PostedTime::from_hour(chrono::Timelike::hour(&timestamp)),
            hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn profile(username: &str, followers: u64, following: u64, rate: f64) -> ProfileRecord {
        ProfileRecord {
            username: username.to_string(),
            followers,
            following,
            posts_count: 100,
            engagement_rate: rate,
            avg_likes: 1_000,
            avg_comments: 100,
            verified: false,
        }
    }

    fn sample_dataset() -> Dataset {
        let alpha = AnalyzedProfile {
            profile: profile("alpha", 10_000, 500, 3.0),
            posts: vec![
                post("alpha", at(3, 9), 100, 10, ContentType::Photo, &["#art", "#food"]),
                post("alpha", at(3, 18), 300, 30, ContentType::Video, &["#art"]),
                post("alpha", at(10, 22), 200, 20, ContentType::Photo, &[]),
            ],
            trending_hashtags: vec!["#art".into(), "#food".into(), "#love".into()],
            analyzed_at: at(15, 12),
        };
        let beta = AnalyzedProfile {
            profile: profile("beta", 50_000, 0, 6.0),
            posts: vec![
                post("beta", at(4, 13), 1_000, 100, ContentType::Reel, &["#art", "#travel"]),
                post("beta", at(5, 7), 500, 50, ContentType::Photo, &["#travel"]),
                post("beta", at(5, 19), 700, 70, ContentType::Carousel, &[]),
            ],
            trending_hashtags: vec!["#art".into(), "#travel".into()],
            analyzed_at: at(15, 12),
        };

        Dataset {
            profiles: vec![alpha, beta],
            post_count: 3,
            generated_at: at(15, 12),
        }
    }

    #[test]
    fn test_calculate_engagement_rate() {
        assert_eq!(calculate_engagement_rate(900, 100, 10_000), 10.0);
        assert_eq!(calculate_engagement_rate(1, 0, 3), 33.33);
        assert_eq!(calculate_engagement_rate(500, 50, 0), 0.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.5), 2.5);
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 1.0), 4.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
    }

    #[test]
    fn test_std_dev_is_sample_deviation() {
        assert_eq!(std_dev(&[5.0]), 0.0);
        assert!((std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.138).abs() < 0.001);
    }

    #[test]
    fn test_empty_dataset_renders_no_data() {
        let dataset = Dataset::empty(at(15, 12));
        let view = render_dashboard(&dataset);

        assert!(!view.has_data);
        assert!(view.generated_at.is_none());
        assert!(view.overview.summary.is_empty());
        assert!(view.overview.insights.is_none());
        assert!(view.engagement.trend.is_empty());
        assert!(view.content.distribution.is_empty());
        assert!(view.content.best_performing.is_none());
        assert!(view.hashtags.popular.is_empty());
        assert_eq!(view.hashtags.avg_hashtags_per_post, 0.0);
        assert_eq!(view.posting_patterns.total_posts, 0);
        assert!(view.posting_patterns.optimal_day.is_none());
        assert_eq!(view.posting_patterns.hourly.len(), 24);
    }

    #[test]
    fn test_overview_summary_and_metrics() {
        let view = overview(&sample_dataset());

        assert_eq!(view.summary.len(), 2);
        assert_eq!(view.summary[0].username, "alpha");
        assert_eq!(view.summary[0].avg_engagement, 220.0);
        assert_eq!(view.scatter[1].followers, 50_000);

        let beta = &view.metrics[1];
        assert_eq!(beta.avg_likes, 733.33);
        // following is zero so the ratio falls back to zero
        assert_eq!(beta.follower_following_ratio, 0.0);
        assert_eq!(beta.posts_per_thousand_followers, 2.0);

        let alpha = &view.metrics[0];
        assert_eq!(alpha.follower_following_ratio, 20.0);
        assert_eq!(alpha.engagement_rate, calculate_engagement_rate(200, 20, 10_000));
    }

    #[test]
    fn test_insights() {
        let dataset = sample_dataset();
        let metrics = competitor_metrics(&dataset);
        let insights = generate_insights(&dataset, &metrics).unwrap();

        assert_eq!(insights.top_performers.most_followers, "beta");
        assert_eq!(insights.top_performers.highest_engagement, "alpha");
        assert_eq!(insights.benchmarks.avg_followers, 30_000);
        assert_eq!(insights.competitive_gaps.follower_leader_advantage, 20_000);
        assert_eq!(
            insights.recommendations.optimal_content_type,
            Some(ContentType::Reel)
        );
        let expected_target = round2(insights.benchmarks.avg_engagement_rate * 1.2);
        assert!((insights.recommendations.target_engagement_rate - expected_target).abs() < 0.011);
    }

    #[test]
    fn test_profiles_without_posts_are_skipped_in_metrics() {
        let mut dataset = sample_dataset();
        dataset.profiles[1].posts.clear();
        let metrics = competitor_metrics(&dataset);
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].username, "alpha");
    }

    #[test]
    fn test_engagement_trend_groups_by_date() {
        let view = engagement(&sample_dataset());

        let alpha: Vec<_> = view.trend.iter().filter(|p| p.username == "alpha").collect();
        assert_eq!(alpha.len(), 2);
        assert_eq!(alpha[0].date, at(3, 0).date_naive());
        assert_eq!(alpha[0].avg_engagement, 220.0);

        assert_eq!(view.likes_vs_comments.len(), 6);

        let beta = &view.distribution[1];
        assert_eq!(beta.min, 550.0);
        assert_eq!(beta.median, 770.0);
        assert_eq!(beta.max, 1_100.0);
    }

    #[test]
    fn test_content_view() {
        let view = content(&sample_dataset());

        assert_eq!(view.distribution[0].content_type, ContentType::Photo);
        assert_eq!(view.distribution[0].posts, 3);
        let total: usize = view.distribution.iter().map(|c| c.posts).sum();
        assert_eq!(total, 6);

        // ascending by mean engagement
        assert!(view
            .performance
            .windows(2)
            .all(|pair| pair[0].mean <= pair[1].mean));
        assert_eq!(view.best_performing, Some(ContentType::Reel));

        let alpha = &view.by_competitor[0];
        assert_eq!(alpha.shares.len(), 4);
        let photo = alpha
            .shares
            .iter()
            .find(|s| s.content_type == ContentType::Photo)
            .unwrap();
        assert_eq!(photo.percentage, 66.67);
    }

    #[test]
    fn test_hashtag_view() {
        let view = hashtags(&sample_dataset());

        assert_eq!(view.popular[0].hashtag, "#art");
        assert_eq!(view.popular[0].competitors, 2);
        assert_eq!(view.popular.len(), 4);

        assert_eq!(view.top_by_frequency[0].hashtag, "#art");
        assert_eq!(view.top_by_frequency[0].posts, 3);
        assert_eq!(view.unique_hashtags, 3);
        assert_eq!(view.avg_hashtags_per_post, 1.0);
        assert_eq!(view.top_by_engagement[0].hashtag, "#travel");
        assert_eq!(view.by_competitor[1].hashtags, vec!["#art", "#travel"]);
    }

    #[test]
    fn test_posting_patterns() {
        let view = posting_patterns(&sample_dataset());

        assert_eq!(view.total_posts, 6);
        let hourly_total: usize = view.hourly.iter().map(|h| h.posts).sum();
        assert_eq!(hourly_total, 6);
        assert_eq!(view.hourly[9].posts, 1);

        assert_eq!(view.daily_distribution.len(), 7);
        assert_eq!(view.daily_distribution[0].day, "Mon");
        assert_eq!(view.daily_distribution[0].posts, 3);
        assert_eq!(view.optimal_day.as_deref(), Some("Mon"));

        assert_eq!(view.weekly.len(), 14);
        assert_eq!(view.optimal_time, Some(PostedTime::Afternoon));
        assert!(view
            .time_engagement
            .windows(2)
            .all(|pair| pair[0].avg_engagement >= pair[1].avg_engagement));
        assert_eq!(view.avg_posts_per_day, 0.86);
    }

    #[test]
    fn test_posts_per_week_follows_daily_average() {
        let posts: Vec<PostRecord> = (0..20)
            .map(|i| post("alpha", at(3 + i % 14, 0), 1, 1, ContentType::Photo, &[]))
            .collect();
        assert_eq!(posts_per_week(&posts), 20.0);
        assert_eq!(posts_per_week(&posts[..2]), 2.0);
        assert_eq!(posts_per_week(&[]), 0.0);
    }

    #[test]
    fn test_posts_per_week_agrees_with_posting_patterns() {
        let dataset = sample_dataset();
        let metrics = competitor_metrics(&dataset);
        let weekly_total: f64 = metrics.iter().map(|m| m.posts_per_week).sum();
        let patterns = posting_patterns(&dataset);
        assert!((weekly_total - patterns.avg_posts_per_day * 7.0).abs() < 0.05);
        assert_eq!(weekly_total, dataset.total_posts() as f64);
    }

    #[test]
    fn test_render_tab_matches_dashboard() {
        let dataset = sample_dataset();
        match render_tab(&dataset, DashboardTab::Hashtags) {
            TabView::Hashtags(view) => assert_eq!(view.unique_hashtags, 3),
            other => panic!("unexpected tab: {:?}", other),
        }
    }
}
