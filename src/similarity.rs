//! "Similar posts" ranking.
//!
//! Additive scoring against a reference post:
//!
//! | Signal | Points |
//! |--------|--------|
//! | same category | 10 |
//! | each shared tag | 3 |
//! | published less than 30 days apart | 2 |
//! | published less than 7 days apart | 1 more |
//!
//! Candidates are ordered by descending score with a stable sort, so equal
//! scores keep their corpus order, and the reference post never ranks.

use serde::{Deserialize, Serialize};

use crate::models::post::{Post, PostSummary};

pub const CATEGORY_POINTS: u32 = 10;
pub const SHARED_TAG_POINTS: u32 = 3;
pub const WITHIN_MONTH_POINTS: u32 = 2;
pub const WITHIN_WEEK_POINTS: u32 = 1;

/// How many related posts a post page shows.
pub const MAX_SIMILAR_POSTS: usize = 3;

/// A candidate together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub score: u32,
}

/// Owned form of [`ScoredPost`] for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSummary {
    #[serde(flatten)]
    pub post: PostSummary,
    pub score: u32,
}

impl From<ScoredPost<'_>> for ScoredSummary {
    fn from(scored: ScoredPost<'_>) -> Self {
        Self {
            post: scored.post.summary(),
            score: scored.score,
        }
    }
}

/// Relevance of `candidate` to `reference`.
pub fn score(reference: &Post, candidate: &Post) -> u32 {
    let mut total = 0;

    if candidate.category == reference.category {
        total += CATEGORY_POINTS;
    }

    let shared = candidate
        .tags
        .iter()
        .enumerate()
        .filter(|(i, tag)| !candidate.tags[..*i].contains(*tag))
        .filter(|(_, tag)| reference.has_tag(tag))
        .count() as u32;
    total += shared * SHARED_TAG_POINTS;

    let days_apart = (candidate.published - reference.published).num_days().abs();
    if days_apart < 30 {
        total += WITHIN_MONTH_POINTS;
    }
    if days_apart < 7 {
        total += WITHIN_WEEK_POINTS;
    }

    total
}

/// Score every post in `corpus` except the reference and keep the best `limit`.
pub fn rank_similar<'a>(reference: &Post, corpus: &'a [Post], limit: usize) -> Vec<ScoredPost<'a>> {
    let mut scored: Vec<ScoredPost<'a>> = corpus
        .iter()
        .filter(|post| post.id != reference.id)
        .map(|post| ScoredPost {
            post,
            score: score(reference, post),
        })
        .collect();

    // `sort_by` is stable: ties keep corpus order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// The related posts shown under an article.
pub fn similar_posts<'a>(reference: &Post, corpus: &'a [Post]) -> Vec<&'a Post> {
    rank_similar(reference, corpus, MAX_SIMILAR_POSTS)
        .into_iter()
        .map(|scored| scored.post)
        .collect()
}
