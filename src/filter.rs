use serde::{Deserialize, Serialize};

use crate::models::post::Post;
use crate::models::project::Project;

/// The catch-all entry at the head of every category list.
pub const ALL_CATEGORIES: &str = "All";

/// Criteria for the blog index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostQuery {
    /// `None` or `"All"` means no restriction.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring matched against title, excerpt and category.
    #[serde(default)]
    pub q: Option<String>,
}

/// Category lists for both listing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub posts: Vec<String>,
    pub projects: Vec<String>,
}

fn is_restricting(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
}

/// Newest first; posts published the same day fall back to id order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published.cmp(&a.published).then(a.id.cmp(&b.id)));
}

/// Apply a [`PostQuery`] to an already sorted slice of posts.
pub fn filter_posts<'a>(posts: &'a [Post], query: &PostQuery) -> Vec<&'a Post> {
    let category = is_restricting(query.category.as_deref());
    let needle = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    posts
        .iter()
        .filter(|post| category.is_none_or(|c| post.category == c))
        .filter(|post| match &needle {
            Some(needle) => {
                post.title.to_lowercase().contains(needle)
                    || post.excerpt.to_lowercase().contains(needle)
                    || post.category.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect()
}

/// Projects in the given category, or all of them for `None`/`"All"`.
pub fn filter_projects<'a>(projects: &'a [Project], category: Option<&str>) -> Vec<&'a Project> {
    let category = is_restricting(category);
    projects
        .iter()
        .filter(|project| category.is_none_or(|c| project.category == c))
        .collect()
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for category in items {
        if !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::Author;
    use crate::models::project::ProjectLinks;
    use chrono::NaiveDate;

    fn post(id: u32, title: &str, category: &str, date: (i32, u32, u32)) -> Post {
        Post {
            id,
            slug: format!("post-{}", id),
            title: title.to_string(),
            excerpt: format!("About {}", title),
            content: String::new(),
            image: String::new(),
            category: category.to_string(),
            tags: vec![],
            published: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            read_time_minutes: 3,
            views: 0,
            author: Author::default(),
        }
    }

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            slug: format!("project-{}", id),
            title: format!("Project {}", id),
            description: String::new(),
            image: String::new(),
            category: category.to_string(),
            technologies: vec![],
            links: ProjectLinks::default(),
            featured: false,
        }
    }

    fn corpus() -> Vec<Post> {
        let mut posts = vec![
            post(1, "Next.js 14 Apps", "Next.js", (2024, 1, 15)),
            post(2, "CSS Grid and Flexbox", "CSS", (2024, 1, 8)),
            post(3, "React Performance", "React", (2024, 1, 1)),
            post(4, "Web Trends", "Trends", (2023, 12, 25)),
        ];
        sort_newest_first(&mut posts);
        posts
    }

    fn ids(posts: &[&Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_query_returns_everything() {
        let posts = corpus();
        assert_eq!(ids(&filter_posts(&posts, &PostQuery::default())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_all_category_is_no_restriction() {
        let posts = corpus();
        let query = PostQuery {
            category: Some("All".to_string()),
            q: None,
        };
        assert_eq!(filter_posts(&posts, &query).len(), 4);
    }

    #[test]
    fn test_category_exact_match() {
        let posts = corpus();
        let query = PostQuery {
            category: Some("CSS".to_string()),
            q: None,
        };
        assert_eq!(ids(&filter_posts(&posts, &query)), vec![2]);

        let query = PostQuery {
            category: Some("css".to_string()),
            q: None,
        };
        assert!(filter_posts(&posts, &query).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let posts = corpus();
        let query = PostQuery {
            category: None,
            q: Some("  REACT ".to_string()),
        };
        assert_eq!(ids(&filter_posts(&posts, &query)), vec![3]);
    }

    #[test]
    fn test_search_matches_category_and_excerpt() {
        let posts = corpus();
        let query = PostQuery {
            category: None,
            q: Some("trends".to_string()),
        };
        assert_eq!(ids(&filter_posts(&posts, &query)), vec![4]);

        let query = PostQuery {
            category: None,
            q: Some("about css".to_string()),
        };
        assert_eq!(ids(&filter_posts(&posts, &query)), vec![2]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let posts = corpus();
        let query = PostQuery {
            category: Some("CSS".to_string()),
            q: Some("react".to_string()),
        };
        assert!(filter_posts(&posts, &query).is_empty());
    }

    #[test]
    fn test_sort_newest_first_ties_by_id() {
        let mut posts = vec![
            post(7, "b", "X", (2024, 1, 1)),
            post(5, "a", "X", (2024, 1, 1)),
            post(6, "c", "X", (2024, 2, 1)),
        ];
        sort_newest_first(&mut posts);
        let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 5, 7]);
    }

    #[test]
    fn test_filter_projects() {
        let projects = vec![project(1, "Web App"), project(2, "Mobile"), project(3, "Web App")];
        let web: Vec<u32> = filter_projects(&projects, Some("Web App")).iter().map(|p| p.id).collect();
        assert_eq!(web, vec![1, 3]);
        assert_eq!(filter_projects(&projects, Some("All")).len(), 3);
        assert_eq!(filter_projects(&projects, None).len(), 3);
        assert!(filter_projects(&projects, Some("Desktop")).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let cats = categories(["CSS", "React", "CSS", "Trends"]);
        assert_eq!(cats, vec!["All", "CSS", "React", "Trends"]);
        assert_eq!(categories(std::iter::empty()), vec!["All"]);
    }
}
