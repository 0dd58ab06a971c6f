use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::rendering::markdown::parser_options;
use crate::rendering::slug::HeadingIds;

/// One entry of a post's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id, identical to the `id` the renderer puts on the heading.
    pub id: String,
    /// Heading text with inline markup stripped.
    pub text: String,
    /// 2 or 3.
    pub level: u8,
}

/// Extract the level-2 and level-3 headings of a Markdown document.
///
/// Ids are allocated for every heading level so that duplicate suffixes
/// match what [`render_markdown`](crate::rendering::markdown::render_markdown)
/// emits, but only `##` and `###` headings end up in the list.
pub fn extract_toc(markdown: &str) -> Vec<TocEntry> {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut ids = HeadingIds::new();
    let mut entries = Vec::new();
    let mut current: Option<(HeadingLevel, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_string();
                    let id = ids.next_id(&text);
                    let level = match level {
                        HeadingLevel::H2 => 2,
                        HeadingLevel::H3 => 3,
                        _ => continue,
                    };
                    entries.push(TocEntry { id, text, level });
                }
            }
            _ => {}
        }
    }

    entries
}
