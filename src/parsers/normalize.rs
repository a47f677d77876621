// Normalization - defaults and rendered text for validated candidates

use super::candidate::ValidatedCandidate;
use super::markdown::{render_block, render_inline};
use crate::models::{defaults, Priority, Recommendation, Urgency};

/// Turn a validated candidate into a complete `Recommendation`
pub fn normalize_candidate(valid: ValidatedCandidate, id: String) -> Recommendation {
    let ValidatedCandidate {
        title,
        steps,
        candidate,
    } = valid;

    let text_or = |keys: &[&str], default: &str| {
        candidate
            .text(keys)
            .unwrap_or_else(|| default.to_string())
    };

    let priority = candidate
        .text(&["priority"])
        .map(|p| Priority::parse(&p))
        .unwrap_or_default();
    let urgency = candidate
        .text(&["urgency"])
        .map(|u| Urgency::parse(&u))
        .unwrap_or_default();

    let description = text_or(&["description"], defaults::DESCRIPTION);
    let expected_outcome = text_or(
        &["expected_outcome", "expectedOutcome"],
        defaults::EXPECTED_OUTCOME,
    );

    let steps = steps.iter().map(|step| render_inline(step)).collect();

    Recommendation::new(id, title, steps)
        .with_priority(priority)
        .with_urgency(urgency)
        .with_category(text_or(&["category"], defaults::CATEGORY))
        .with_description(render_block(&description))
        .with_prerequisites(candidate.list(&["prerequisites"]))
        .with_estimated_time(text_or(
            &["estimated_time", "estimatedTime"],
            defaults::ESTIMATED_TIME,
        ))
        .with_expected_outcome(render_inline(&expected_outcome))
        .with_risks(candidate.list(&["risks"]))
        .with_cost_estimate(text_or(
            &["cost_estimate", "costEstimate"],
            defaults::COST_ESTIMATE,
        ))
        .with_follow_up(text_or(&["follow_up", "followUp"], defaults::FOLLOW_UP))
        .with_alternative_solutions(
            candidate.list(&["alternative_solutions", "alternativeSolutions"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::candidate::{parse_candidate, validate_candidate};

    fn normalize(json: &str) -> Recommendation {
        let valid = validate_candidate(parse_candidate(json).unwrap())
            .into_result()
            .unwrap();
        normalize_candidate(valid, "rec-test".to_string())
    }

    #[test]
    fn test_minimal_candidate_gets_all_defaults() {
        let rec = normalize(r#"{"title": "Clear cache", "steps": ["Open browser settings"]}"#);

        assert_eq!(rec.id, "rec-test");
        assert_eq!(rec.title, "Clear cache");
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.category, "General");
        assert_eq!(rec.urgency, Urgency::ThisWeek);
        assert_eq!(rec.description, "");
        assert_eq!(rec.steps, vec!["Open browser settings"]);
        assert!(rec.prerequisites.is_empty());
        assert_eq!(rec.estimated_time, "Not specified");
        assert_eq!(rec.expected_outcome, "Improved system functionality");
        assert!(rec.risks.is_empty());
        assert_eq!(rec.cost_estimate, "Not specified");
        assert_eq!(rec.follow_up, "Monitor system performance");
        assert!(rec.alternative_solutions.is_empty());
    }

    #[test]
    fn test_full_candidate_keeps_values() {
        let rec = normalize(
            r#"{
                "title": "Replace failing disk",
                "priority": "Critical",
                "category": "Hardware",
                "urgency": "Immediate (0-4 hours)",
                "description": "SMART reports **reallocated sectors**",
                "steps": ["Back up `/home`", "Swap the drive"],
                "prerequisites": ["Spare SSD"],
                "estimated_time": "2 hours",
                "expected_outcome": "No more *I/O errors*",
                "risks": ["Data loss"],
                "cost_estimate": "$120",
                "follow_up": "Check SMART weekly",
                "alternative_solutions": ["Clone to external disk"]
            }"#,
        );

        assert_eq!(rec.priority, Priority::Critical);
        assert_eq!(rec.urgency, Urgency::Immediate);
        assert_eq!(rec.category, "Hardware");
        assert_eq!(
            rec.description,
            "<p>SMART reports <strong>reallocated sectors</strong></p>"
        );
        assert_eq!(
            rec.steps,
            vec!["Back up <code>/home</code>", "Swap the drive"]
        );
        assert_eq!(rec.prerequisites, vec!["Spare SSD"]);
        assert_eq!(rec.estimated_time, "2 hours");
        assert_eq!(rec.expected_outcome, "No more <em>I/O errors</em>");
        assert_eq!(rec.risks, vec!["Data loss"]);
        assert_eq!(rec.cost_estimate, "$120");
        assert_eq!(rec.follow_up, "Check SMART weekly");
        assert_eq!(rec.alternative_solutions, vec!["Clone to external disk"]);
    }

    #[test]
    fn test_camel_case_keys() {
        let rec = normalize(
            r#"{"title": "T", "steps": ["s"], "estimatedTime": "5 min", "followUp": "Ping user", "alternativeSolutions": ["Reboot"]}"#,
        );
        assert_eq!(rec.estimated_time, "5 min");
        assert_eq!(rec.follow_up, "Ping user");
        assert_eq!(rec.alternative_solutions, vec!["Reboot"]);
    }

    #[test]
    fn test_blank_and_null_fields_default() {
        let rec = normalize(
            r#"{"title": "T", "steps": ["s"], "priority": "", "category": null, "expected_outcome": " "}"#,
        );
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.category, "General");
        assert_eq!(rec.expected_outcome, "Improved system functionality");
    }

    #[test]
    fn test_unknown_priority_preserved() {
        let rec = normalize(r#"{"title": "T", "steps": ["s"], "priority": "P2"}"#);
        assert_eq!(rec.priority, Priority::Unknown("P2".to_string()));
        assert_eq!(rec.priority.rank(), 0);
    }

    #[test]
    fn test_description_bold_is_rendered() {
        let rec = normalize(r#"{"title": "T", "steps": ["s"], "description": "**bold**"}"#);
        assert!(!rec.description.contains("**"));
        assert!(rec.description.contains("<strong>bold</strong>"));
    }
}
