// Recommendation models - canonical record shape shared with exporters and storage

use serde::{Deserialize, Serialize};

/// Default values substituted for fields the model left out.
pub mod defaults {
    pub const PRIORITY: &str = "Medium";
    pub const CATEGORY: &str = "General";
    pub const URGENCY: &str = "This Week (1-7 days)";
    pub const DESCRIPTION: &str = "";
    pub const ESTIMATED_TIME: &str = "Not specified";
    pub const EXPECTED_OUTCOME: &str = "Improved system functionality";
    pub const COST_ESTIMATE: &str = "Not specified";
    pub const FOLLOW_UP: &str = "Monitor system performance";

    pub const GENERAL_TITLE: &str = "General IT Support Recommendation";
    pub const GENERAL_STEPS: [&str; 2] = [
        "Review the provided recommendations",
        "Implement suggested solutions",
    ];
}

// ============================================================================
// Priority / Urgency
// ============================================================================

/// Recommendation priority. Only the exact labels (surrounding whitespace
/// aside) are recognized; anything else is kept verbatim in `Unknown` and
/// ranks lowest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Critical" => Priority::Critical,
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unknown(raw) => raw,
        }
    }

    /// Sort ordinal, higher sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown(_) => 0,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::parse(&value)
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

/// How soon a recommendation should be acted on.
///
/// Only the full labels with their window ("Same Day (4-24 hours)") are
/// recognized. A bare "same day" stays `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Immediate,
    SameDay,
    ThisWeek,
    ThisMonth,
    Unknown(String),
}

impl Urgency {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Immediate (0-4 hours)" => Urgency::Immediate,
            "Same Day (4-24 hours)" => Urgency::SameDay,
            "This Week (1-7 days)" => Urgency::ThisWeek,
            "This Month (1-30 days)" => Urgency::ThisMonth,
            _ => Urgency::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Immediate => "Immediate (0-4 hours)",
            Urgency::SameDay => "Same Day (4-24 hours)",
            Urgency::ThisWeek => "This Week (1-7 days)",
            Urgency::ThisMonth => "This Month (1-30 days)",
            Urgency::Unknown(raw) => raw,
        }
    }

    /// Sort ordinal, higher sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::Immediate => 4,
            Urgency::SameDay => 3,
            Urgency::ThisWeek => 2,
            Urgency::ThisMonth => 1,
            Urgency::Unknown(_) => 0,
        }
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::ThisWeek
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        Urgency::parse(&value)
    }
}

impl From<Urgency> for String {
    fn from(value: Urgency) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Recommendation
// ============================================================================

/// A normalized recommendation.
///
/// `description`, every `steps` entry and `expected_outcome` hold rendered
/// HTML, not markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub urgency: Urgency,
    pub description: String,
    pub steps: Vec<String>,
    pub prerequisites: Vec<String>,
    pub estimated_time: String,
    pub expected_outcome: String,
    pub risks: Vec<String>,
    pub cost_estimate: String,
    pub follow_up: String,
    pub alternative_solutions: Vec<String>,
}

impl Recommendation {
    /// Create a record with every optional field at its default
    pub fn new(id: String, title: String, steps: Vec<String>) -> Self {
        Self {
            id,
            title,
            priority: Priority::default(),
            category: defaults::CATEGORY.to_string(),
            urgency: Urgency::default(),
            description: defaults::DESCRIPTION.to_string(),
            steps,
            prerequisites: Vec::new(),
            estimated_time: defaults::ESTIMATED_TIME.to_string(),
            expected_outcome: defaults::EXPECTED_OUTCOME.to_string(),
            risks: Vec::new(),
            cost_estimate: defaults::COST_ESTIMATE.to_string(),
            follow_up: defaults::FOLLOW_UP.to_string(),
            alternative_solutions: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn with_estimated_time(mut self, estimated_time: String) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    pub fn with_expected_outcome(mut self, expected_outcome: String) -> Self {
        self.expected_outcome = expected_outcome;
        self
    }

    pub fn with_risks(mut self, risks: Vec<String>) -> Self {
        self.risks = risks;
        self
    }

    pub fn with_cost_estimate(mut self, cost_estimate: String) -> Self {
        self.cost_estimate = cost_estimate;
        self
    }

    pub fn with_follow_up(mut self, follow_up: String) -> Self {
        self.follow_up = follow_up;
        self
    }

    pub fn with_alternative_solutions(mut self, alternatives: Vec<String>) -> Self {
        self.alternative_solutions = alternatives;
        self
    }
}

// ============================================================================
// Counts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl PriorityCounts {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.unknown
    }
}

/// Tally recommendations by priority
pub fn count_by_priority(recommendations: &[Recommendation]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for rec in recommendations {
        match rec.priority {
            Priority::Critical => counts.critical += 1,
            Priority::High => counts.high += 1,
            Priority::Medium => counts.medium += 1,
            Priority::Low => counts.low += 1,
            Priority::Unknown(_) => counts.unknown += 1,
        }
    }
    counts
}
