use serde::{Deserialize, Serialize};

/// External links shown on a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    /// Technology tags, e.g. `React`, `Tailwind CSS`.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    /// Featured projects are the ones shown on the home page.
    #[serde(default)]
    pub featured: bool,
}
