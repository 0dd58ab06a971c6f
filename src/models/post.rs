use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The author block shown under a post's title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
}

/// A blog post held by the content repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable numeric identifier. Also what the similarity ranking uses to
    /// recognise the reference post inside a corpus.
    pub id: u32,
    /// URL-safe identifier used for routing (`/blog/{slug}`).
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw Markdown body.
    pub content: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    /// Distinct tags, in the order they were first declared.
    pub tags: Vec<String>,
    pub published: NaiveDate,
    pub read_time_minutes: u32,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub author: Author,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            published: self.published,
            read_time_minutes: self.read_time_minutes,
            views: self.views,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A post as submitted for ingestion, before the repository assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub published: NaiveDate,
    pub read_time_minutes: u32,
    /// `None` keeps the author of the post being replaced.
    pub author: Option<Author>,
}

impl PostDraft {
    /// Complete the draft with the fields the repository owns.
    pub fn into_post(self, id: u32, views: u64, previous_author: Option<Author>) -> Post {
        Post {
            id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image,
            category: self.category,
            tags: self.tags,
            published: self.published,
            read_time_minutes: self.read_time_minutes,
            views,
            author: self.author.or(previous_author).unwrap_or_default(),
        }
    }
}

/// A post without its body, for cards and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub published: NaiveDate,
    pub read_time_minutes: u32,
    pub views: u64,
}

impl PostSummary {
    /// Human readable read-time label, e.g. `8 min read`.
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time_minutes)
    }

    /// Date formatted the way cards display it, e.g. `January 8, 2024`.
    pub fn published_label(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}

/// The request payload for the post ingest API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIngestRequest {
    /// Service authentication token.
    pub service_token: String,
    /// Explicit slug. Derived from the title when absent.
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Raw Markdown content.
    pub content: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: NaiveDate,
    /// Estimated from the word count when absent.
    #[serde(default)]
    pub read_time_minutes: Option<u32>,
    #[serde(default)]
    pub author: Option<Author>,
}

/// The response from a successful ingest operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIngestResponse {
    pub message: String,
    pub slug: String,
    pub id: u32,
}

/// Body of `DELETE /api/v1/posts/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDeleteRequest {
    pub service_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDeleteResponse {
    pub message: String,
    pub slug: String,
}
