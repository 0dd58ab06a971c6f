use std::collections::{HashMap, HashSet};

/// Anchor for headings with nothing slug-worthy in them, e.g. `## 🚀`.
pub const FALLBACK_HEADING_ID: &str = "section";

/// Turn free text into a URL-safe slug.
///
/// Lower-cases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and strips leading/trailing dashes.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Hands out heading anchors for one document.
///
/// Repeated headings get `-1`, `-2`, ... appended, skipping any suffix an
/// earlier heading already took, so every anchor stays unique. The renderer
/// and the table of contents both go through this type, which keeps their ids
/// in lockstep.
#[derive(Debug, Default)]
pub struct HeadingIds {
    issued: HashSet<String>,
    suffixes: HashMap<String, usize>,
}

impl HeadingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the anchor id for a heading with the given text.
    pub fn next_id(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = FALLBACK_HEADING_ID.to_string();
        }

        let id = if self.issued.contains(&base) {
            let n = self.suffixes.entry(base.clone()).or_insert(0);
            loop {
                *n += 1;
                let candidate = format!("{}-{}", base, n);
                if !self.issued.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            base
        };

        self.issued.insert(id.clone());
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(
            slugify("Building Responsive Web Applications with Next.js 14"),
            "building-responsive-web-applications-with-next-js-14"
        );
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
        assert_eq!(slugify("CSS Grid vs. Flexbox"), "css-grid-vs-flexbox");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café & Crème"), "caf-cr-me");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_heading_ids_deduplicate() {
        let mut ids = HeadingIds::new();
        assert_eq!(ids.next_id("Conclusion"), "conclusion");
        assert_eq!(ids.next_id("Setup"), "setup");
        assert_eq!(ids.next_id("Conclusion"), "conclusion-1");
        assert_eq!(ids.next_id("conclusion!"), "conclusion-2");
    }

    #[test]
    fn test_heading_ids_skip_taken_suffixes() {
        let mut ids = HeadingIds::new();
        assert_eq!(ids.next_id("Example"), "example");
        assert_eq!(ids.next_id("Example"), "example-1");
        assert_eq!(ids.next_id("Example 1"), "example-1-1");

        let mut ids = HeadingIds::new();
        assert_eq!(ids.next_id("Example 1"), "example-1");
        assert_eq!(ids.next_id("Example"), "example");
        assert_eq!(ids.next_id("Example"), "example-2");
    }

    #[test]
    fn test_heading_ids_fallback() {
        let mut ids = HeadingIds::new();
        assert_eq!(ids.next_id("🚀"), "section");
        assert_eq!(ids.next_id("!!!"), "section-1");
        assert_eq!(ids.next_id("Section"), "section-2");
    }
}
