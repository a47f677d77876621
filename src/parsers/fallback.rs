// Line-oriented fallback for responses without fenced blocks

use super::markdown::{render_block, render_inline};
use crate::models::{defaults, Recommendation};
use crate::utils::{generate_id, join_spaced};
use regex::Regex;
use std::sync::LazyLock;

/// "1. Title", "2) Title", "3 Title", "- Title", "* Title", "• Title"
static ITEM_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)]?|[-*•])\s+(.+)$").expect("item start pattern is valid")
});

#[derive(Debug)]
struct PendingItem {
    title: String,
    description: Vec<String>,
    steps: Vec<String>,
}

impl PendingItem {
    fn new(title: String) -> Self {
        Self {
            title,
            description: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn finish(self, id_prefix: &str) -> Recommendation {
        let steps = if self.steps.is_empty() {
            vec![render_inline(&self.title)]
        } else {
            self.steps
        };
        let description = join_spaced(self.description.iter().map(String::as_str));

        Recommendation::new(generate_id(id_prefix), self.title, steps)
            .with_description(description)
    }
}

/// Best-effort extraction from numbered or bulleted lines.
///
/// A numbered/bulleted line starts a new recommendation titled by the rest of
/// the line. Following lines that start with `-` or `*` (no space) become
/// steps; other non-heading lines extend the description. Text before the
/// first item is ignored.
pub fn parse_lines(content: &str, id_prefix: &str) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let mut current: Option<PendingItem> = None;

    for line in content.lines() {
        let line = line.trim();

        if let Some(title) = ITEM_START
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
        {
            if let Some(done) = current.take() {
                recommendations.push(done.finish(id_prefix));
            }
            current = Some(PendingItem::new(title));
            continue;
        }

        let Some(item) = current.as_mut() else {
            continue;
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('-') || line.starts_with('*') {
            let step = render_inline(line[1..].trim());
            if !step.is_empty() {
                item.steps.push(step);
            }
        } else {
            item.description.push(render_inline(line));
        }
    }

    if let Some(done) = current.take() {
        recommendations.push(done.finish(id_prefix));
    }

    recommendations
}

/// The record returned when nothing else could be extracted
pub fn default_recommendation(content: &str, id_prefix: &str) -> Recommendation {
    let steps = defaults::GENERAL_STEPS
        .iter()
        .map(|step| step.to_string())
        .collect();

    Recommendation::new(
        generate_id(id_prefix),
        defaults::GENERAL_TITLE.to_string(),
        steps,
    )
    .with_description(render_block(content))
}
