use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::error::AppError;
use crate::filter;
use crate::models::post::{Post, PostDraft};
use crate::models::profile::{Skill, Testimonial};
use crate::models::project::Project;

/// Repository trait for site content.
///
/// Pages, server functions and API handlers only ever talk to this trait, so
/// the in-memory store can be swapped for a real database without touching
/// them. It also lets tests run against a pre-seeded instance.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, AppError>;

    /// Find a post by its slug.
    async fn find_post_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;

    /// Create a new post or replace the one with the same slug.
    ///
    /// A replaced post keeps its id and view count; a new one gets the next
    /// free id. Returns `(id, replaced)`.
    async fn ingest_post(&self, draft: PostDraft) -> Result<(u32, bool), AppError>;

    /// Remove a post. Returns `false` when no post had that slug.
    async fn delete_post(&self, slug: &str) -> Result<bool, AppError>;

    /// Bump the view counter and return the new value.
    ///
    /// Counts live in memory only and reset on restart.
    async fn record_view(&self, slug: &str) -> Result<Option<u64>, AppError>;

    /// All projects, in catalogue order.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Projects of one category; `"All"` returns every project.
    async fn list_projects_by_category(&self, category: &str) -> Result<Vec<Project>, AppError>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
}

/// Process-local implementation backed by `RwLock`ed vectors.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    posts: RwLock<Vec<Post>>,
    projects: RwLock<Vec<Project>>,
    testimonials: Vec<Testimonial>,
    skills: Vec<Skill>,
}

impl InMemoryContentRepository {
    pub fn new(
        mut posts: Vec<Post>,
        projects: Vec<Project>,
        testimonials: Vec<Testimonial>,
        skills: Vec<Skill>,
    ) -> Self {
        filter::sort_newest_first(&mut posts);
        Self {
            posts: RwLock::new(posts),
            projects: RwLock::new(projects),
            testimonials,
            skills,
        }
    }

    fn posts(&self) -> Result<RwLockReadGuard<'_, Vec<Post>>, AppError> {
        self.posts
            .read()
            .map_err(|_| AppError::Internal("post store lock poisoned".into()))
    }

    fn posts_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<Post>>, AppError> {
        self.posts
            .write()
            .map_err(|_| AppError::Internal("post store lock poisoned".into()))
    }

    fn projects(&self) -> Result<RwLockReadGuard<'_, Vec<Project>>, AppError> {
        self.projects
            .read()
            .map_err(|_| AppError::Internal("project store lock poisoned".into()))
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts()?.clone())
    }

    async fn find_post_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        Ok(self.posts()?.iter().find(|p| p.slug == slug).cloned())
    }

    async fn ingest_post(&self, draft: PostDraft) -> Result<(u32, bool), AppError> {
        // Id lookup, view carry-over and insert share one write guard.
        let mut posts = self.posts_mut()?;
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let outcome = match posts.iter_mut().find(|p| p.slug == draft.slug) {
            Some(existing) => {
                let id = existing.id;
                let author = std::mem::take(&mut existing.author);
                *existing = draft.into_post(id, existing.views, Some(author));
                (id, true)
            }
            None => {
                posts.push(draft.into_post(next_id, 0, None));
                (next_id, false)
            }
        };

        filter::sort_newest_first(&mut posts);
        Ok(outcome)
    }

    async fn delete_post(&self, slug: &str) -> Result<bool, AppError> {
        let mut posts = self.posts_mut()?;
        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        Ok(posts.len() != before)
    }

    async fn record_view(&self, slug: &str) -> Result<Option<u64>, AppError> {
        let mut posts = self.posts_mut()?;
        Ok(posts.iter_mut().find(|p| p.slug == slug).map(|p| {
            p.views += 1;
            p.views
        }))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects()?.clone())
    }

    async fn list_projects_by_category(&self, category: &str) -> Result<Vec<Project>, AppError> {
        let projects = self.projects()?;
        Ok(filter::filter_projects(&projects, Some(category))
            .into_iter()
            .cloned()
            .collect())
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        Ok(self.testimonials.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.clone())
    }
}
