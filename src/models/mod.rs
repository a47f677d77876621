// Data models for normalized recommendations

pub mod recommendation;

pub use recommendation::{
    count_by_priority, defaults, Priority, PriorityCounts, Recommendation, Urgency,
};
