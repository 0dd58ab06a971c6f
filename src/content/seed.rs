use serde::Deserialize;

use crate::content::front_matter::parse_post;
use crate::content::repository::InMemoryContentRepository;
use crate::error::AppError;
use crate::models::post::Post;
use crate::models::profile::{Skill, Testimonial};
use crate::models::project::Project;

/// Posts compiled into the binary: `(file name, raw markdown)`.
const POSTS: &[(&str, &str)] = &[
    (
        "nextjs-14.md",
        include_str!("../../content_data/posts/nextjs-14.md"),
    ),
    (
        "css-grid-flexbox.md",
        include_str!("../../content_data/posts/css-grid-flexbox.md"),
    ),
    (
        "react-performance.md",
        include_str!("../../content_data/posts/react-performance.md"),
    ),
    (
        "web-trends-2024.md",
        include_str!("../../content_data/posts/web-trends-2024.md"),
    ),
];

const PROJECTS: &str = include_str!("../../content_data/projects.yaml");
const PROFILE: &str = include_str!("../../content_data/profile.yaml");

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct ProfileFile {
    skills: Vec<Skill>,
    testimonials: Vec<Testimonial>,
}

/// Parse the embedded posts.
pub fn seed_posts() -> Result<Vec<Post>, AppError> {
    let posts = POSTS
        .iter()
        .map(|(name, raw)| parse_post(name, raw))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, post) in posts.iter().enumerate() {
        if posts[..i].iter().any(|p| p.id == post.id || p.slug == post.slug) {
            return Err(AppError::BadRequest(format!(
                "duplicate post id or slug: {} ({})",
                post.slug, post.id
            )));
        }
    }

    Ok(posts)
}

/// Parse the embedded project catalogue.
pub fn seed_projects() -> Result<Vec<Project>, AppError> {
    let file: ProjectsFile = serde_yaml::from_str(PROJECTS)
        .map_err(|e| AppError::BadRequest(format!("projects.yaml: {}", e)))?;
    Ok(file.projects)
}

fn seed_profile() -> Result<ProfileFile, AppError> {
    let profile: ProfileFile = serde_yaml::from_str(PROFILE)
        .map_err(|e| AppError::BadRequest(format!("profile.yaml: {}", e)))?;

    if let Some(t) = profile.testimonials.iter().find(|t| !(1..=5).contains(&t.rating)) {
        return Err(AppError::BadRequest(format!(
            "profile.yaml: testimonial {} has rating {}, expected 1-5",
            t.id, t.rating
        )));
    }
    if let Some(s) = profile.skills.iter().find(|s| s.level > 100) {
        return Err(AppError::BadRequest(format!(
            "profile.yaml: skill {} has level {}, expected 0-100",
            s.name, s.level
        )));
    }

    Ok(profile)
}

/// Build a repository holding all the built-in content.
pub fn seeded_repository() -> Result<InMemoryContentRepository, AppError> {
    let posts = seed_posts()?;
    let projects = seed_projects()?;
    let profile = seed_profile()?;

    tracing::info!(
        posts = posts.len(),
        projects = projects.len(),
        testimonials = profile.testimonials.len(),
        skills = profile.skills.len(),
        "Seeded content repository"
    );

    Ok(InMemoryContentRepository::new(
        posts,
        projects,
        profile.testimonials,
        profile.skills,
    ))
}
