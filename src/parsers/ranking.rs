// Priority/urgency ordering

use crate::models::Recommendation;
use std::cmp::Ordering;

/// Higher priority first, then higher urgency
pub fn compare_recommendations(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| b.urgency.rank().cmp(&a.urgency.rank()))
}

/// Stable sort: records with equal rank keep their input order
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(compare_recommendations);
}
