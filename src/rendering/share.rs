use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::models::post::PostSummary;

/// A "share this post" target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub network: String,
    pub url: String,
}

/// Canonical public URL of a post.
pub fn post_url(site_url: &str, slug: &str) -> String {
    format!("{}/blog/{}", site_url.trim_end_matches('/'), slug)
}

/// Build Twitter, Facebook and LinkedIn share URLs for a post.
pub fn share_links(site_url: &str, post: &PostSummary) -> Vec<ShareLink> {
    let page = post_url(site_url, &post.slug);
    let page = encode(&page);
    let text = format!("{} - {}", post.title, post.excerpt);
    let text = encode(&text);

    vec![
        ShareLink {
            network: "Twitter".to_string(),
            url: format!("https://twitter.com/intent/tweet?text={}&url={}", text, page),
        },
        ShareLink {
            network: "Facebook".to_string(),
            url: format!("https://www.facebook.com/sharer/sharer.php?u={}", page),
        },
        ShareLink {
            network: "LinkedIn".to_string(),
            url: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                page
            ),
        },
    ]
}
