use tracing::debug;

use crate::model::{
    aggregator::aggregate,
    compute_bars,
    error::RatingError,
    structures::{bars::Bars, note::Note, note_sequence::NoteSequence, rating_attributes::RatingAttributes}
};

/// Rating entry point carrying the per-chart parameters.
///
/// ```
/// use sr_processor::model::{calculator::RatingCalculator, structures::note::Note};
///
/// let notes = vec![Note::tap(0, 0), Note::tap(1, 500), Note::tap(0, 1000), Note::tap(1, 1500)];
/// let attributes = RatingCalculator::new(2, 8.0).clock_rate(1.5).calculate(&notes).unwrap();
///
/// assert!(attributes.star_rating > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingCalculator {
    key_count: u32,
    overall_difficulty: f64,
    clock_rate: f64
}

impl RatingCalculator {
    pub fn new(key_count: u32, overall_difficulty: f64) -> RatingCalculator {
        RatingCalculator {
            key_count,
            overall_difficulty,
            clock_rate: 1.0
        }
    }

    /// Playback speed multiplier, e.g. 1.5 for double time and 0.75 for half time
    pub fn clock_rate(mut self, clock_rate: f64) -> RatingCalculator {
        self.clock_rate = clock_rate;
        self
    }

    pub fn calculate(&self, notes: &[Note]) -> Result<RatingAttributes, RatingError> {
        self.calculate_with_bars(notes).map(|(attributes, _)| attributes)
    }

    /// Like [`RatingCalculator::calculate`], also returning the series the rating was aggregated from
    pub fn calculate_with_bars(&self, notes: &[Note]) -> Result<(RatingAttributes, Bars), RatingError> {
        if !self.clock_rate.is_finite() || self.clock_rate <= 0.0 {
            return Err(RatingError::InvalidClockRate(self.clock_rate));
        }

        let scaled: Vec<Note> = notes.iter().map(|n| n.scaled(self.clock_rate)).collect();
        let seq = NoteSequence::build(&scaled, self.key_count)?;
        debug!(
            "Rating {} notes on {} lanes over {} ms",
            seq.note_count(),
            seq.key_count(),
            seq.timeline_len()
        );

        let bars = compute_bars(&seq, self.overall_difficulty);
        let star_rating = aggregate(&bars, seq.note_count(), seq.hold_count(), seq.key_count())?;
        debug!("Star rating {:.4}", star_rating);

        let attributes = RatingAttributes {
            star_rating,
            key_count: seq.key_count(),
            note_count: seq.note_count(),
            hold_count: seq.hold_count(),
            duration_ms: seq.timeline_len(),
            clock_rate: self.clock_rate
        };

        Ok((attributes, bars))
    }
}
