use serde::{Deserialize, Serialize};

use crate::model::{calculator::RatingCalculator, structures::note::Note};

/// A rateable chart as stored in the JSON files the CLI reads
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chart {
    pub key_count: u32,
    pub overall_difficulty: f64,
    pub notes: Vec<Note>
}

impl Chart {
    pub fn calculator(&self) -> RatingCalculator {
        RatingCalculator::new(self.key_count, self.overall_difficulty)
    }
}
