use serde::{Deserialize, Serialize};

/// A client quote shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub image: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub quote: String,
}

/// A skill bar on the about section. `level` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Everything the about/testimonials sections need in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub skills: Vec<Skill>,
    pub testimonials: Vec<Testimonial>,
}
