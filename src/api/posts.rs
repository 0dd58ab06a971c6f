use crate::content::front_matter::{estimate_read_time, normalize_tags};
use crate::content::repository::ContentRepository;
use crate::error::AppError;
use crate::models::post::{PostDeleteResponse, PostDraft, PostIngestRequest, PostIngestResponse};
use crate::rendering::slug::slugify;

fn check_token(given: &str, expected: &str) -> Result<(), AppError> {
    if given != expected {
        return Err(AppError::Auth("Invalid service token".into()));
    }
    Ok(())
}

/// Core ingestion logic, separated from the HTTP layer for testability.
///
/// Creates the post or replaces the one with the same slug. A replaced post
/// keeps its id, view count and (unless given) author.
pub async fn process_post_ingest(
    repo: &dyn ContentRepository,
    request: PostIngestRequest,
    expected_token: &str,
) -> Result<PostIngestResponse, AppError> {
    check_token(&request.service_token, expected_token)?;

    if request.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title cannot be empty".into()));
    }
    if request.category.trim().is_empty() {
        return Err(AppError::BadRequest("Category cannot be empty".into()));
    }

    let slug = match request.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(&request.title),
    };
    if slug.is_empty() {
        return Err(AppError::BadRequest("Slug cannot be empty".into()));
    }
    if slugify(&slug) != slug {
        return Err(AppError::BadRequest(format!(
            "Slug '{}' is not URL-safe, expected lowercase letters, digits and dashes",
            slug
        )));
    }

    let read_time_minutes = request
        .read_time_minutes
        .filter(|m| *m > 0)
        .unwrap_or_else(|| estimate_read_time(&request.content));

    let draft = PostDraft {
        slug: slug.clone(),
        title: request.title.trim().to_string(),
        excerpt: request.excerpt,
        content: request.content,
        image: request.image,
        category: request.category.trim().to_string(),
        tags: normalize_tags(request.tags),
        published: request.published,
        read_time_minutes,
        author: request.author,
    };

    let (id, replaced) = repo.ingest_post(draft).await?;
    tracing::info!(slug = %slug, id, replaced, "Post ingested");

    Ok(PostIngestResponse {
        message: "Post ingested successfully".to_string(),
        slug,
        id,
    })
}

/// Remove a post after checking the service token.
pub async fn process_post_delete(
    repo: &dyn ContentRepository,
    slug: &str,
    service_token: &str,
    expected_token: &str,
) -> Result<PostDeleteResponse, AppError> {
    check_token(service_token, expected_token)?;

    if !repo.delete_post(slug).await? {
        return Err(AppError::NotFound(format!("Post '{}' not found", slug)));
    }
    tracing::info!(slug = %slug, "Post deleted");

    Ok(PostDeleteResponse {
        message: "Post deleted successfully".to_string(),
        slug: slug.to_string(),
    })
}

#[cfg(feature = "ssr")]
mod handlers {
    use axum::extract::{Path, Query, State};
    use axum::Json;

    use super::*;
    use crate::app::AppState;
    use crate::content::queries::{self, PostDetail};
    use crate::filter::PostQuery;
    use crate::models::post::{PostDeleteRequest, PostSummary};
    use crate::similarity::ScoredSummary;

    /// `GET /api/v1/posts`
    pub async fn list_posts_handler(
        State(state): State<AppState>,
        Query(query): Query<PostQuery>,
    ) -> Result<Json<Vec<PostSummary>>, AppError> {
        let posts = queries::list_post_summaries(state.content_repo.as_ref(), &query).await?;
        Ok(Json(posts))
    }

    /// `GET /api/v1/posts/{slug}`
    pub async fn get_post_handler(
        State(state): State<AppState>,
        Path(slug): Path<String>,
    ) -> Result<Json<PostDetail>, AppError> {
        queries::post_detail(state.content_repo.as_ref(), &slug)
            .await?
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }

    /// `GET /api/v1/posts/{slug}/similar`
    pub async fn similar_posts_handler(
        State(state): State<AppState>,
        Path(slug): Path<String>,
    ) -> Result<Json<Vec<ScoredSummary>>, AppError> {
        queries::similar_for(state.content_repo.as_ref(), &slug)
            .await?
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }

    /// `POST /api/v1/posts`
    pub async fn ingest_post_handler(
        State(state): State<AppState>,
        Json(request): Json<PostIngestRequest>,
    ) -> Result<Json<PostIngestResponse>, AppError> {
        let response =
            process_post_ingest(state.content_repo.as_ref(), request, &state.service_token)
                .await?;
        Ok(Json(response))
    }

    /// `DELETE /api/v1/posts/{slug}`
    pub async fn delete_post_handler(
        State(state): State<AppState>,
        Path(slug): Path<String>,
        Json(request): Json<PostDeleteRequest>,
    ) -> Result<Json<PostDeleteResponse>, AppError> {
        let response = process_post_delete(
            state.content_repo.as_ref(),
            &slug,
            &request.service_token,
            &state.service_token,
        )
        .await?;
        Ok(Json(response))
    }
}

#[cfg(feature = "ssr")]
pub use handlers::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::InMemoryContentRepository;
    use crate::content::seed::seeded_repository;
    use crate::models::post::Author;
    use crate::similarity::{rank_similar, similar_posts};
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::sync::Arc;

    const TOKEN: &str = "secret";

    fn request(title: &str) -> PostIngestRequest {
        PostIngestRequest {
            service_token: TOKEN.to_string(),
            slug: None,
            title: title.to_string(),
            excerpt: "Short".to_string(),
            content: "## Intro\n\nSome words here.".to_string(),
            image: String::new(),
            category: "Rust".to_string(),
            tags: vec!["Rust".into(), " Rust ".into(), "Axum".into(), "".into()],
            published: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            read_time_minutes: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn test_ingest_creates_post() {
        let repo = InMemoryContentRepository::default();
        let resp = process_post_ingest(&repo, request("Hello Axum World"), TOKEN)
            .await
            .unwrap();

        assert_eq!(resp.slug, "hello-axum-world");
        assert_eq!(resp.id, 1);

        let post = repo.find_post_by_slug("hello-axum-world").await.unwrap().unwrap();
        assert_eq!(post.tags, vec!["Rust", "Axum"]);
        assert_eq!(post.read_time_minutes, 1);
        assert_eq!(post.views, 0);
    }

    #[tokio::test]
    async fn test_ingest_rejects_bad_token() {
        let repo = InMemoryContentRepository::default();
        let result = process_post_ingest(&repo, request("Hello"), "other").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_rejects_empty_fields() {
        let repo = InMemoryContentRepository::default();

        let mut req = request("Hello");
        req.category = "  ".into();
        let result = process_post_ingest(&repo, req, TOKEN).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = process_post_ingest(&repo, request("   "), TOKEN).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // A title with nothing slug-worthy in it
        let result = process_post_ingest(&repo, request("!!!"), TOKEN).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_ingest_rejects_unsafe_slug() {
        let repo = InMemoryContentRepository::default();
        let mut req = request("Hello");
        req.slug = Some("Not A Slug/../x".into());
        let result = process_post_ingest(&repo, req, TOKEN).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_ingest_replaces_and_keeps_id_and_views() {
        let repo = seeded_repository().unwrap();
        let slug = "mastering-css-grid-flexbox-layouts";
        let before = repo.find_post_by_slug(slug).await.unwrap().unwrap();

        let mut req = request("Mastering CSS Grid, Revised");
        req.slug = Some(slug.to_string());
        req.read_time_minutes = Some(9);
        let resp = process_post_ingest(&repo, req, TOKEN).await.unwrap();

        assert_eq!(resp.id, before.id);
        let after = repo.find_post_by_slug(slug).await.unwrap().unwrap();
        assert_eq!(after.title, "Mastering CSS Grid, Revised");
        assert_eq!(after.views, before.views);
        assert_eq!(after.author, before.author);
        assert_eq!(after.read_time_minutes, 9);
        assert_eq!(repo.list_posts().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_ingest_assigns_next_id() {
        let repo = seeded_repository().unwrap();
        let mut req = request("Brand New");
        req.author = Some(Author {
            name: "Sam".into(),
            ..Author::default()
        });
        let resp = process_post_ingest(&repo, req, TOKEN).await.unwrap();
        assert_eq!(resp.id, 5);

        let posts = repo.list_posts().await.unwrap();
        // Newest first: 2024-02-01 beats every seeded post.
        assert_eq!(posts[0].slug, "brand-new");
        assert_eq!(posts[0].author.name, "Sam");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_ingest_assigns_distinct_ids() {
        let repo = Arc::new(seeded_repository().unwrap());
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let mut req = request(&format!("Concurrent Post {}", i));
                    req.tags = vec!["CSS".into()];
                    process_post_ingest(repo.as_ref(), req, TOKEN).await.unwrap().id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts.len(), 68);
        let distinct: HashSet<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(distinct.len(), posts.len());

        // Only the reference itself drops out of its recommendations.
        for post in &posts {
            let similar = rank_similar(post, &posts, usize::MAX);
            assert!(similar.iter().all(|s| s.post.id != post.id));
            assert_eq!(similar.len(), posts.len() - 1);
            assert_eq!(similar_posts(post, &posts).len(), 3);
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = seeded_repository().unwrap();
        let slug = "future-web-development-trends-2024";

        let result = process_post_delete(&repo, slug, "wrong", TOKEN).await;
        assert!(matches!(result, Err(AppError::Auth(_))));

        let resp = process_post_delete(&repo, slug, TOKEN, TOKEN).await.unwrap();
        assert_eq!(resp.slug, slug);
        assert!(repo.find_post_by_slug(slug).await.unwrap().is_none());

        let again = process_post_delete(&repo, slug, TOKEN, TOKEN).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }
}
