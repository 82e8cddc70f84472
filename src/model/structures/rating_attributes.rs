use serde::{Deserialize, Serialize};

/// Result of rating one chart
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RatingAttributes {
    pub star_rating: f64,
    pub key_count: u32,
    pub note_count: usize,
    pub hold_count: usize,
    /// Length of the rated timeline in milliseconds, after the clock rate is applied
    pub duration_ms: usize,
    pub clock_rate: f64
}
