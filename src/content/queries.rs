use serde::{Deserialize, Serialize};

use crate::content::repository::ContentRepository;
use crate::error::AppError;
use crate::filter::{self, Categories, PostQuery};
use crate::models::post::{Author, Post, PostSummary};
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::rendering::markdown::render_markdown;
use crate::rendering::share::{share_links, ShareLink};
use crate::rendering::toc::{extract_toc, TocEntry};
use crate::similarity::{rank_similar, ScoredSummary, MAX_SIMILAR_POSTS};

/// A post rendered for reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub post: PostSummary,
    pub author: Author,
    /// Sanitized HTML body.
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Everything the `/blog/:slug` page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub detail: PostDetail,
    pub similar: Vec<PostSummary>,
    pub share: Vec<ShareLink>,
}

fn render_detail(post: &Post) -> PostDetail {
    PostDetail {
        post: post.summary(),
        author: post.author.clone(),
        html: render_markdown(&post.content),
        toc: extract_toc(&post.content),
    }
}

/// Blog index: filtered summaries, newest first.
pub async fn list_post_summaries(
    repo: &dyn ContentRepository,
    query: &PostQuery,
) -> Result<Vec<PostSummary>, AppError> {
    let posts = repo.list_posts().await?;
    Ok(filter::filter_posts(&posts, query)
        .into_iter()
        .map(Post::summary)
        .collect())
}

/// Rendered post without side effects. `None` for an unknown slug.
pub async fn post_detail(
    repo: &dyn ContentRepository,
    slug: &str,
) -> Result<Option<PostDetail>, AppError> {
    Ok(repo
        .find_post_by_slug(slug)
        .await?
        .as_ref()
        .map(render_detail))
}

/// Ranked related posts for `slug`. `None` for an unknown slug.
pub async fn similar_for(
    repo: &dyn ContentRepository,
    slug: &str,
) -> Result<Option<Vec<ScoredSummary>>, AppError> {
    let posts = repo.list_posts().await?;
    let Some(reference) = posts.iter().find(|p| p.slug == slug) else {
        return Ok(None);
    };

    Ok(Some(
        rank_similar(reference, &posts, MAX_SIMILAR_POSTS)
            .into_iter()
            .map(ScoredSummary::from)
            .collect(),
    ))
}

/// Build the full post page and count the visit.
pub async fn post_page(
    repo: &dyn ContentRepository,
    slug: &str,
    site_url: &str,
) -> Result<Option<PostPage>, AppError> {
    let Some(views) = repo.record_view(slug).await? else {
        tracing::debug!("Post '{}' not found", slug);
        return Ok(None);
    };

    let posts = repo.list_posts().await?;
    let Some(post) = posts.iter().find(|p| p.slug == slug) else {
        // Deleted between the two calls.
        return Ok(None);
    };

    let mut detail = render_detail(post);
    detail.post.views = views;

    let similar = rank_similar(post, &posts, MAX_SIMILAR_POSTS)
        .into_iter()
        .map(|scored| scored.post.summary())
        .collect();
    let share = share_links(site_url, &detail.post);

    Ok(Some(PostPage {
        detail,
        similar,
        share,
    }))
}

/// Projects, optionally restricted to a category.
pub async fn list_projects(
    repo: &dyn ContentRepository,
    category: Option<&str>,
) -> Result<Vec<Project>, AppError> {
    match category {
        Some(category) => repo.list_projects_by_category(category).await,
        None => repo.list_projects().await,
    }
}

/// Category lists for the blog and projects filters.
pub async fn categories(repo: &dyn ContentRepository) -> Result<Categories, AppError> {
    let posts = repo.list_posts().await?;
    let projects = repo.list_projects().await?;
    Ok(Categories {
        posts: filter::categories(posts.iter().map(|p| p.category.as_str())),
        projects: filter::categories(projects.iter().map(|p| p.category.as_str())),
    })
}

pub async fn profile(repo: &dyn ContentRepository) -> Result<Profile, AppError> {
    Ok(Profile {
        skills: repo.list_skills().await?,
        testimonials: repo.list_testimonials().await?,
    })
}
