use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::post::{Author, Post};
use crate::rendering::slug::slugify;

const DELIMITER: &str = "---";

/// Metadata block at the top of a post's Markdown file.
#[derive(Debug, Clone, Deserialize)]
pub struct PostFrontMatter {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: NaiveDate,
    #[serde(default)]
    pub read_time_minutes: Option<u32>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub author: Author,
}

/// Split `---\n<yaml>\n---\n<body>` into its YAML and body parts.
///
/// Returns `None` when the text does not open with a delimiter line or the
/// block is never closed.
pub fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse a Markdown post with front matter. `source` names the file in errors.
pub fn parse_post(source: &str, raw: &str) -> Result<Post, AppError> {
    let (yaml, body) = split_front_matter(raw)
        .ok_or_else(|| AppError::BadRequest(format!("{}: missing front matter", source)))?;

    let meta: PostFrontMatter = serde_yaml::from_str(yaml)
        .map_err(|e| AppError::BadRequest(format!("{}: invalid front matter: {}", source, e)))?;

    let slug = meta.slug.unwrap_or_else(|| slugify(&meta.title));
    if slug.is_empty() || slugify(&slug) != slug {
        return Err(AppError::BadRequest(format!(
            "{}: slug '{}' is not URL-safe",
            source, slug
        )));
    }
    let content = body.trim_start_matches(['\r', '\n']).to_string();
    let read_time_minutes = meta
        .read_time_minutes
        .unwrap_or_else(|| estimate_read_time(&content));

    Ok(Post {
        id: meta.id,
        slug,
        title: meta.title,
        excerpt: meta.excerpt,
        content,
        image: meta.image,
        category: meta.category,
        tags: normalize_tags(meta.tags),
        published: meta.published,
        read_time_minutes,
        views: meta.views,
        author: meta.author,
    })
}

/// Words per minute used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Minutes needed to read `markdown`, rounded up, never less than one.
pub fn estimate_read_time(markdown: &str) -> u32 {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Trim tags, drop blanks and repeats, keep first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
