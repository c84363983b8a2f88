use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Traffic-light rating attached to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Rating {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: String,
    pub period: String,
    pub score: f64,
    pub rating: Rating,
    pub reviewer: String,
}

impl PerformanceReview {
    /// Filled stars out of five on the review card.
    pub fn star_count(&self) -> u32 {
        (self.score.round() as u32).min(5)
    }
}
