use tracing::trace;

use crate::model::{
    bars::{anchor::anchor_bar, cross::cross_bar, jack::jack_bar, press::press_bar, release::release_bar},
    calculator::RatingCalculator,
    constants::hit_window_scale,
    error::RatingError,
    smoothing::sliding_count,
    structures::{bars::Bars, note::Note, note_sequence::NoteSequence}
};

pub mod aggregator;
pub mod bars;
pub mod calculator;
pub mod constants;
pub mod cross_weights;
pub mod error;
pub mod smoothing;
pub mod structures;

/// Rates `notes` played on `key_count` lanes at the given overall difficulty.
///
/// # Errors
/// See [`NoteSequence::build`] for input validation. Any non-finite
/// intermediate result is reported as [`RatingError::DegenerateInput`].
pub fn compute_rating(notes: &[Note], key_count: u32, overall_difficulty: f64) -> Result<f64, RatingError> {
    RatingCalculator::new(key_count, overall_difficulty)
        .calculate(notes)
        .map(|attributes| attributes.star_rating)
}

/// Builds every difficulty series for `seq`.
///
/// Runs as two fork/join waves on the rayon pool:
/// 1. jack, cross and press, which only read the notes
/// 2. anchor, which needs the per-lane intervals of the jack pass, alongside release
///
/// Each bar is computed sequentially inside its own task, so the output does
/// not depend on scheduling.
pub fn compute_bars(seq: &NoteSequence, overall_difficulty: f64) -> Bars {
    let x = hit_window_scale(overall_difficulty);

    let ((jack, cross), press) = rayon::join(
        || rayon::join(|| jack_bar(seq, x), || cross_bar(seq, x)),
        || press_bar(seq, x)
    );
    trace!("Jack, cross and press bars complete");

    let (anchor, release) = rayon::join(|| anchor_bar(seq, &jack.deltas), || release_bar(seq, x));
    trace!("Anchor and release bars complete");

    let heads: Vec<usize> = seq.notes().iter().map(|n| n.head()).collect();

    Bars {
        jack: jack.bar,
        cross,
        press,
        anchor: anchor.bar,
        release,
        density: sliding_count(&heads, seq.timeline_len()),
        active_lanes: anchor.active_lanes
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            compute_bars, compute_rating,
            error::RatingError,
            structures::{note::Note, note_sequence::NoteSequence}
        },
        utils::test_utils::{generate_chart, generate_stream}
    };

    #[test]
    fn test_compute_bars_lengths() {
        let seq = NoteSequence::build(&generate_stream(4, 64, 125), 4).unwrap();
        let bars = compute_bars(&seq, 8.0);

        for series in [
            &bars.jack,
            &bars.cross,
            &bars.press,
            &bars.anchor,
            &bars.release,
            &bars.density,
            &bars.active_lanes
        ] {
            assert_eq!(series.len(), seq.timeline_len());
        }
    }

    #[test]
    fn test_single_lane_cross_is_zero() {
        let notes: Vec<Note> = (0..50).map(|i| Note::tap(0, i * 180)).collect();
        let seq = NoteSequence::build(&notes, 1).unwrap();

        let bars = compute_bars(&seq, 8.0);

        assert!(bars.cross.iter().all(|v| *v == 0.0));
        assert!(compute_rating(&notes, 1, 8.0).unwrap() > 0.0);
    }

    #[test]
    fn test_compute_rating_is_deterministic() {
        let chart = generate_chart(7, 600, 42);

        let first = compute_rating(&chart.notes, chart.key_count, chart.overall_difficulty).unwrap();
        let second = compute_rating(&chart.notes, chart.key_count, chart.overall_difficulty).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_compute_rating_is_order_independent() {
        let chart = generate_chart(4, 300, 7);
        let mut reversed = chart.notes.clone();
        reversed.reverse();

        let a = compute_rating(&chart.notes, 4, chart.overall_difficulty).unwrap();
        let b = compute_rating(&reversed, 4, chart.overall_difficulty).unwrap();

        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_faster_stream_rates_higher() {
        let slow = compute_rating(&generate_stream(4, 200, 150), 4, 8.0).unwrap();
        let fast = compute_rating(&generate_stream(4, 200, 75), 4, 8.0).unwrap();

        assert!(fast > slow);
    }

    #[test]
    fn test_errors_surface() {
        assert_eq!(compute_rating(&[], 4, 8.0), Err(RatingError::EmptyInput));
        assert_eq!(
            compute_rating(&generate_stream(4, 8, 100), 11, 8.0),
            Err(RatingError::UnsupportedKeyCount(11))
        );
    }
}
