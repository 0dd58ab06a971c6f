use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::rendering::slug::HeadingIds;

/// Parser options shared by the renderer and the table-of-contents scan.
///
/// GitHub Flavored Markdown features: tables, footnotes, strikethrough,
/// task lists, and smart punctuation.
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
}

/// Render a raw Markdown string to sanitized HTML.
///
/// Every heading gets an `id` anchor built from its text, so links from the
/// table of contents land on it.
pub fn render_markdown(raw: &str) -> String {
    let events = with_heading_ids(Parser::new_ext(raw, parser_options()).collect());

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    // Task-list items render as disabled checkboxes; no other input survives.
    ammonia::Builder::default()
        .add_generic_attributes(&["id"])
        .add_tags(&["input"])
        .add_tag_attributes("input", &["checked"])
        .set_tag_attribute_value("input", "type", "checkbox")
        .set_tag_attribute_value("input", "disabled", "")
        .clean(&html_output)
        .to_string()
}

fn with_heading_ids(mut events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut ids = HeadingIds::new();

    for start in 0..events.len() {
        if !matches!(events[start], Event::Start(Tag::Heading { .. })) {
            continue;
        }

        let mut text = String::new();
        for event in &events[start + 1..] {
            match event {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }

        let anchor = ids.next_id(text.trim());
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(CowStr::from(anchor));
        }
    }

    events
}
