// Candidate parsing and validation for fenced recommendation blocks

use crate::error::SkipReason;
use serde_json::{Map, Value};

/// An untyped, parsed-but-untrusted recommendation object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationCandidate {
    fields: Map<String, Value>,
}

impl RecommendationCandidate {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up the first present, non-null value among `keys`
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| !value.is_null())
    }

    /// Read a text field. Numbers and booleans are stringified; blank text
    /// counts as absent.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        self.get(keys)
            .and_then(scalar_text)
            .filter(|text| !text.trim().is_empty())
    }

    /// Read a list field. A lone string is treated as a one-item list.
    pub fn list(&self, keys: &[&str]) -> Vec<String> {
        match self.get(keys) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(scalar_text)
                .filter(|item| !item.trim().is_empty())
                .collect(),
            Some(value) => scalar_text(value)
                .filter(|item| !item.trim().is_empty())
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse the inner text of one fenced block.
///
/// Strict JSON is tried first. If that fails and the only thing around the
/// first bracket-balanced `{...}` region is plain prose, that region is parsed
/// instead. Text carrying JSON punctuation outside the object (a trailing
/// comma, a stray `]`) means the block itself is broken, so it is rejected.
pub fn parse_candidate(block: &str) -> Result<RecommendationCandidate, SkipReason> {
    let value = match serde_json::from_str::<Value>(block) {
        Ok(value) => value,
        Err(strict_err) => recover_object(block)
            .ok_or_else(|| SkipReason::InvalidJson(strict_err.to_string()))?,
    };

    match value {
        Value::Object(fields) => Ok(RecommendationCandidate::from_map(fields)),
        _ => Err(SkipReason::NotAnObject),
    }
}

fn recover_object(block: &str) -> Option<Value> {
    let start = block.find('{')?;
    let object = find_balanced_object(block)?;
    let before = &block[..start];
    let after = &block[start + object.len()..];

    let is_prose = |text: &str| !text.contains([',', '[', ']', '}', ':']);
    if !is_prose(before) || !is_prose(after) {
        return None;
    }
    serde_json::from_str(object).ok()
}

/// Locate the first `{...}` region whose braces balance, ignoring braces
/// inside string literals
pub fn find_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

// ============================================================================
// Validation
// ============================================================================

/// A candidate that passed validation, with its required fields extracted
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCandidate {
    pub title: String,
    pub steps: Vec<String>,
    pub candidate: RecommendationCandidate,
}

/// Outcome of checking a candidate
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(ValidatedCandidate),
    Rejected(SkipReason),
}

impl Validation {
    pub fn into_result(self) -> Result<ValidatedCandidate, SkipReason> {
        match self {
            Validation::Valid(valid) => Ok(valid),
            Validation::Rejected(reason) => Err(reason),
        }
    }
}

/// A candidate is usable when `title` is non-blank text and `steps` is a
/// non-empty array with at least one text entry
pub fn validate_candidate(candidate: RecommendationCandidate) -> Validation {
    let title = match candidate.get(&["title"]) {
        Some(Value::String(title)) => title.trim().to_string(),
        _ => return Validation::Rejected(SkipReason::MissingTitle),
    };
    if title.is_empty() {
        return Validation::Rejected(SkipReason::EmptyTitle);
    }

    let raw_steps = match candidate.get(&["steps"]) {
        Some(Value::Array(steps)) => steps,
        _ => return Validation::Rejected(SkipReason::MissingSteps),
    };
    if raw_steps.is_empty() {
        return Validation::Rejected(SkipReason::EmptySteps);
    }

    let steps = candidate.list(&["steps"]);
    if steps.is_empty() {
        return Validation::Rejected(SkipReason::NoUsableSteps);
    }

    Validation::Valid(ValidatedCandidate {
        title,
        steps,
        candidate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(json: &str) -> RecommendationCandidate {
        parse_candidate(json).unwrap()
    }

    #[test]
    fn test_parse_candidate_object() {
        let c = candidate(r#"{"title": "Reset router", "steps": ["Unplug", "Wait"]}"#);
        assert_eq!(c.text(&["title"]), Some("Reset router".to_string()));
        assert_eq!(c.list(&["steps"]), vec!["Unplug", "Wait"]);
    }

    #[test]
    fn test_parse_candidate_invalid_json() {
        let err = parse_candidate(r#"{"title": "Broken", "steps": ["#).unwrap_err();
        assert!(matches!(err, SkipReason::InvalidJson(_)));
    }

    #[test]
    fn test_parse_candidate_not_object() {
        assert_eq!(parse_candidate(r#"["a", "b"]"#), Err(SkipReason::NotAnObject));
        assert_eq!(parse_candidate("42"), Err(SkipReason::NotAnObject));
    }

    #[test]
    fn test_parse_candidate_recovers_object_with_commentary() {
        let block = "Here it is\n{\"title\": \"Patch {server}\", \"steps\": [\"Apply\"]}\nDone.";
        let c = candidate(block);
        assert_eq!(c.text(&["title"]), Some("Patch {server}".to_string()));
    }

    #[test]
    fn test_parse_candidate_rejects_trailing_comma() {
        let err = parse_candidate(r#"{"title": "T", "steps": ["a"]},"#).unwrap_err();
        assert!(matches!(err, SkipReason::InvalidJson(_)));
    }

    #[test]
    fn test_parse_candidate_rejects_extra_bracket() {
        let err = parse_candidate(r#"{"title": "T", "steps": ["a"]}]"#).unwrap_err();
        assert!(matches!(err, SkipReason::InvalidJson(_)));
        let err = parse_candidate(r#"[{"title": "T", "steps": ["a"]}"#).unwrap_err();
        assert!(matches!(err, SkipReason::InvalidJson(_)));
    }

    #[test]
    fn test_parse_candidate_rejects_second_object() {
        let block = r#"{"title": "A", "steps": ["a"]} {"title": "B", "steps": ["b"]}"#;
        assert!(matches!(
            parse_candidate(block),
            Err(SkipReason::InvalidJson(_))
        ));
    }

    #[test]
    fn test_find_balanced_object_respects_strings() {
        let text = r#"x {"a": "}", "b": {"c": "\"{"}} tail"#;
        assert_eq!(
            find_balanced_object(text),
            Some(r#"{"a": "}", "b": {"c": "\"{"}}"#)
        );
    }

    #[test]
    fn test_find_balanced_object_unbalanced() {
        assert_eq!(find_balanced_object(r#"{"a": {"b": 1}"#), None);
        assert_eq!(find_balanced_object("no braces"), None);
    }

    #[test]
    fn test_aliases_and_scalar_coercion() {
        let c = candidate(
            r#"{"estimatedTime": "2 hours", "cost_estimate": 150, "risks": "Downtime", "follow_up": "  "}"#,
        );
        assert_eq!(
            c.text(&["estimated_time", "estimatedTime"]),
            Some("2 hours".to_string())
        );
        assert_eq!(c.text(&["cost_estimate"]), Some("150".to_string()));
        assert_eq!(c.list(&["risks"]), vec!["Downtime"]);
        assert_eq!(c.text(&["follow_up"]), None);
    }

    #[test]
    fn test_null_falls_through_to_alias() {
        let c = candidate(r#"{"follow_up": null, "followUp": "Call back"}"#);
        assert_eq!(
            c.text(&["follow_up", "followUp"]),
            Some("Call back".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_minimal() {
        let valid = validate_candidate(candidate(r#"{"title": " VPN ", "steps": ["Reconnect"]}"#))
            .into_result()
            .unwrap();
        assert_eq!(valid.title, "VPN");
        assert_eq!(valid.steps, vec!["Reconnect"]);
    }

    #[test]
    fn test_validate_rejections() {
        let reject = |json: &str| match validate_candidate(candidate(json)) {
            Validation::Rejected(reason) => reason,
            Validation::Valid(v) => panic!("expected rejection, got {:?}", v.title),
        };

        assert_eq!(reject(r#"{"title": "X"}"#), SkipReason::MissingSteps);
        assert_eq!(reject(r#"{"steps": ["a"]}"#), SkipReason::MissingTitle);
        assert_eq!(reject(r#"{"title": "", "steps": ["a"]}"#), SkipReason::EmptyTitle);
        assert_eq!(reject(r#"{"title": "   ", "steps": ["a"]}"#), SkipReason::EmptyTitle);
        assert_eq!(reject(r#"{"title": 7, "steps": ["a"]}"#), SkipReason::MissingTitle);
        assert_eq!(reject(r#"{"title": "X", "steps": []}"#), SkipReason::EmptySteps);
        assert_eq!(reject(r#"{"title": "X", "steps": "do it"}"#), SkipReason::MissingSteps);
        assert_eq!(
            reject(r#"{"title": "X", "steps": [null, {"a": 1}]}"#),
            SkipReason::NoUsableSteps
        );
    }
}
