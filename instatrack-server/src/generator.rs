//! Mock data generator.
//!
//! Produces plausible-looking but entirely synthetic profile, post and hashtag
//! records. Every handle gets its own RNG seeded from a stable hash of the
//! handle, so the same handle always yields the same numbers for a given salt.

use std::ops::Range;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use instatrack_types::{AnalyzedProfile, ContentType, Dataset, PostRecord, PostedTime, ProfileRecord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const FOLLOWERS_RANGE: Range<u64> = 10_000..1_000_000;
pub const FOLLOWING_RANGE: Range<u64> = 100..5_000;
pub const POSTS_COUNT_RANGE: Range<u64> = 50..2_000;
pub const ENGAGEMENT_RATE_RANGE: Range<f64> = 1.5..8.5;
pub const AVG_LIKES_RANGE: Range<u64> = 100..50_000;
pub const AVG_COMMENTS_RANGE: Range<u64> = 10..2_000;
pub const VERIFIED_PROBABILITY: f64 = 0.2;

pub const POST_LIKES_RANGE: Range<u64> = 50..100_000;
pub const POST_COMMENTS_RANGE: Range<u64> = 5..5_000;
/// How many days before the reference time a post may be dated
pub const POST_AGE_DAYS: Range<i64> = 1..90;
pub const MAX_POST_HASHTAGS: usize = 10;
pub const TRENDING_HASHTAGS_PER_PROFILE: usize = 10;

pub const HASHTAG_VOCABULARY: [&str; 23] = [
    "#instagram",
    "#photography",
    "#love",
    "#instagood",
    "#photooftheday",
    "#fashion",
    "#beautiful",
    "#happy",
    "#cute",
    "#followme",
    "#like4like",
    "#nature",
    "#art",
    "#food",
    "#style",
    "#amazing",
    "#beauty",
    "#fitness",
    "#travel",
    "#lifestyle",
    "#motivation",
    "#inspiration",
    "#business",
];

pub const SAMPLE_HANDLES: [&str; 5] = [
    "example_brand",
    "competitor_one",
    "competitor_two",
    "market_leader",
    "startup_rival",
];

// Separate streams so profile, post and hashtag draws don't shift each other
const PROFILE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;
const POSTS_STREAM: u64 = 0xC2B2_AE3D_27D4_EB4F;
const TRENDING_STREAM: u64 = 0x1656_67B1_9E37_79F9;

/// FNV-1a over the handle bytes. Stable across processes and releases.
fn handle_seed(handle: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    handle
        .as_bytes()
        .iter()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
}

#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    seed_salt: u64,
}

impl MockGenerator {
    pub fn new(seed_salt: u64) -> Self {
        Self { seed_salt }
    }

    fn rng_for(&self, handle: &str, stream: u64) -> StdRng {
        StdRng::seed_from_u64(handle_seed(handle) ^ self.seed_salt ^ stream)
    }

    pub fn generate_profile(&self, handle: &str) -> ProfileRecord {
        let mut rng = self.rng_for(handle, PROFILE_STREAM);

        ProfileRecord {
            username: handle.to_string(),
            followers: rng.gen_range(FOLLOWERS_RANGE),
            following: rng.gen_range(FOLLOWING_RANGE),
            posts_count: rng.gen_range(POSTS_COUNT_RANGE),
            engagement_rate: rng.gen_range(ENGAGEMENT_RATE_RANGE),
            avg_likes: rng.gen_range(AVG_LIKES_RANGE),
            avg_comments: rng.gen_range(AVG_COMMENTS_RANGE),
            verified: rng.gen_bool(VERIFIED_PROBABILITY),
        }
    }

    /// Generate `post_count` posts dated within the 90 days before `as_of`
    pub fn generate_posts(
        &self,
        handle: &str,
        post_count: usize,
        as_of: DateTime<Utc>,
    ) -> Vec<PostRecord> {
        let mut rng = self.rng_for(handle, POSTS_STREAM);
        let today = as_of.date_naive();

        (0..post_count)
            .map(|_| {
                let day = today - Duration::days(rng.gen_range(POST_AGE_DAYS));
                let hour = rng.gen_range(0..24);
                let minute = rng.gen_range(0..60);
                let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
                let timestamp = Utc.from_utc_datetime(&day.and_time(time));

                let likes = rng.gen_range(POST_LIKES_RANGE);
                let comments = rng.gen_range(POST_COMMENTS_RANGE);

                let content_type = ContentType::WEIGHTED
                    .choose_weighted(&mut rng, |(_, weight)| *weight)
                    .map(|(content_type, _)| *content_type)
                    .unwrap_or(ContentType::Photo);

                let hashtag_count = rng.gen_range(0..=MAX_POST_HASHTAGS);
                let hashtags = HASHTAG_VOCABULARY
                    .choose_multiple(&mut rng, hashtag_count)
                    .map(|tag| tag.to_string())
                    .collect();

                PostRecord {
                    username: handle.to_string(),
                    timestamp,
                    likes,
                    comments,
                    engagement: likes + comments,
                    content_type,
                    posted_time: PostedTime::from_hour(hour),
                    hashtags,
                }
            })
            .collect()
    }

    pub fn trending_hashtags(&self, handle: &str) -> Vec<String> {
        let mut rng = self.rng_for(handle, TRENDING_STREAM);
        HASHTAG_VOCABULARY
            .choose_multiple(&mut rng, TRENDING_HASHTAGS_PER_PROFILE)
            .map(|tag| tag.to_string())
            .collect()
    }

    pub fn analyze_profile(
        &self,
        handle: &str,
        post_count: usize,
        as_of: DateTime<Utc>,
    ) -> AnalyzedProfile {
        AnalyzedProfile {
            profile: self.generate_profile(handle),
            posts: self.generate_posts(handle, post_count, as_of),
            trending_hashtags: self.trending_hashtags(handle),
            analyzed_at: as_of,
        }
    }

    /// One profile and `post_count` posts for every handle, in input order
    pub fn generate_dataset(
        &self,
        handles: &[String],
        post_count: usize,
        as_of: DateTime<Utc>,
    ) -> Dataset {
        let profiles: Vec<AnalyzedProfile> = handles
            .iter()
            .map(|handle| self.analyze_profile(handle, post_count, as_of))
            .collect();

        tracing::info!(
            "Generated mock data for {} handles ({} posts each)",
            profiles.len(),
            post_count
        );

        Dataset {
            profiles,
            post_count,
            generated_at: as_of,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_profile_is_deterministic_per_handle() {
        let generator = MockGenerator::new(0);
        let first = generator.generate_profile("example_brand");
        let second = generator.generate_profile("example_brand");
        assert_eq!(first, second);
    }

    #[test]
    fn test_salt_changes_profile() {
        let a = MockGenerator::new(1).generate_profile("example_brand");
        let b = MockGenerator::new(2).generate_profile("example_brand");
        assert_ne!(
            (a.followers, a.following, a.posts_count),
            (b.followers, b.following, b.posts_count)
        );
    }

    #[test]
    fn test_profile_ranges() {
        let generator = MockGenerator::new(7);
        for handle in SAMPLE_HANDLES {
            let profile = generator.generate_profile(handle);
            assert_eq!(profile.username, handle);
            assert!(FOLLOWERS_RANGE.contains(&profile.followers));
            assert!(FOLLOWING_RANGE.contains(&profile.following));
            assert!(POSTS_COUNT_RANGE.contains(&profile.posts_count));
            assert!(ENGAGEMENT_RATE_RANGE.contains(&profile.engagement_rate));
            assert!(AVG_LIKES_RANGE.contains(&profile.avg_likes));
            assert!(AVG_COMMENTS_RANGE.contains(&profile.avg_comments));
        }
    }

    #[test]
    fn test_posts_shape() {
        let generator = MockGenerator::new(0);
        let posts = generator.generate_posts("market_leader", 40, as_of());
        assert_eq!(posts.len(), 40);

        for post in &posts {
            assert_eq!(post.username, "market_leader");
            assert_eq!(post.engagement, post.likes + post.comments);
            assert!(POST_LIKES_RANGE.contains(&post.likes));
            assert!(POST_COMMENTS_RANGE.contains(&post.comments));
            assert_eq!(post.posted_time, PostedTime::from_hour(post.hour()));

            let age = as_of().date_naive() - post.date();
            assert!(age.num_days() >= 1 && age.num_days() < 90);

            assert!(post.hashtags.len() <= MAX_POST_HASHTAGS);
            let unique: HashSet<_> = post.hashtags.iter().collect();
            assert_eq!(unique.len(), post.hashtags.len());
            assert!(post
                .hashtags
                .iter()
                .all(|tag| HASHTAG_VOCABULARY.contains(&tag.as_str())));
        }
    }

    #[test]
    fn test_zero_posts() {
        let generator = MockGenerator::new(0);
        assert!(generator.generate_posts("startup_rival", 0, as_of()).is_empty());
    }

    #[test]
    fn test_trending_hashtags_are_distinct() {
        let generator = MockGenerator::new(0);
        let tags = generator.trending_hashtags("competitor_one");
        assert_eq!(tags.len(), TRENDING_HASHTAGS_PER_PROFILE);
        let unique: HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_dataset_counts() {
        let generator = MockGenerator::new(0);
        let handles: Vec<String> = SAMPLE_HANDLES[..3].iter().map(|h| h.to_string()).collect();
        let dataset = generator.generate_dataset(&handles, 20, as_of());

        assert_eq!(dataset.profile_count(), 3);
        assert_eq!(dataset.total_posts(), 60);
        assert_eq!(dataset.post_count, 20);
        assert_eq!(dataset.generated_at, as_of());
    }

    #[test]
    fn test_empty_handles_give_empty_dataset() {
        let generator = MockGenerator::new(0);
        let dataset = generator.generate_dataset(&[], 20, as_of());
        assert!(dataset.is_empty());
        assert_eq!(dataset.total_posts(), 0);
    }

    #[test]
    fn test_handle_seed_is_stable() {
        assert_eq!(handle_seed(""), 0xcbf2_9ce4_8422_2325);
        assert_ne!(handle_seed("a"), handle_seed("b"));
    }
}
