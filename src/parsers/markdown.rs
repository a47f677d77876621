// Markdown rendering for recommendation text fields

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

/// Line prefixes that would open a block construct when rendering inline text
static BLOCK_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#{1,6}(?:\s|$)|>|[-+*](?:\s|$)|```|~~~|[=\-*_][=\-*_\s]*$)")
        .expect("block opener pattern is valid")
});

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,9})[.)](?:\s|$)").expect("ordered marker pattern is valid"));

fn block_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown as block HTML.
///
/// GitHub-flavored tables, strikethrough and task lists are enabled, and a
/// single newline becomes `<br />`.
pub fn render_block(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(markdown, block_options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output.trim_end().to_string()
}

/// Render markdown as inline HTML with no wrapping block element.
///
/// Emphasis, code spans, links and strikethrough are rendered; text that
/// would open a list, heading, quote or code block stays literal.
pub fn render_inline(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let escaped = markdown
        .lines()
        .map(escape_block_opener)
        .collect::<Vec<_>>()
        .join("\n");

    let mut events: Vec<Event> = Vec::new();
    for event in Parser::new_ext(&escaped, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(tag) if !is_inline_tag(&tag) => {}
            Event::End(tag_end) if !is_inline_tag_end(&tag_end) => {
                // Keep text from adjacent blocks apart
                events.push(Event::Text(CowStr::Borrowed(" ")));
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(markdown.len() + 16);
    html::push_html(&mut output, events.into_iter());
    output.trim().to_string()
}

fn escape_block_opener(line: &str) -> String {
    let line = line.trim_start();
    // Digits cannot be backslash-escaped, so escape the delimiter instead
    if let Some(digits) = ORDERED_MARKER.captures(line).and_then(|cap| cap.get(1)) {
        let (number, rest) = line.split_at(digits.end());
        return format!("{}\\{}", number, rest);
    }
    if BLOCK_OPENER.is_match(line) {
        format!("\\{}", line)
    } else {
        line.to_string()
    }
}

fn is_inline_tag(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn is_inline_tag_end(tag_end: &TagEnd) -> bool {
    matches!(
        tag_end,
        TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}
