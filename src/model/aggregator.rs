use crate::model::{
    constants::{
        COMPRESSION_THRESHOLD, KEY_COUNT_BASE_SCALE, KEY_COUNT_SCALE_STEP, LAMBDA_N, LENGTH_PENALTY_OFFSET, P_0,
        P_1, W_0, W_1, W_2
    },
    error::RatingError,
    structures::bars::Bars
};

/// Per-slot difficulty `D(t)` with every input clamped to be non-negative
pub fn difficulty_series(bars: &Bars) -> Vec<f64> {
    (0..bars.timeline_len())
        .map(|t| {
            let jack = bars.jack[t].max(0.0);
            let cross = bars.cross[t].max(0.0);
            let press = bars.press[t].max(0.0);
            let anchor = bars.anchor[t].max(0.0);
            let release = bars.release[t].max(0.0);
            let active_lanes = bars.active_lanes[t].max(0.0);

            let lane_anchor = anchor.powf(3.0 / active_lanes);
            let stress = (W_0 * (lane_anchor * jack).powf(1.5)
                + (1.0 - W_0) * (anchor.powf(2.0 / 3.0) * (0.8 * press + release)).powf(1.5))
            .powf(2.0 / 3.0);
            let technicality = lane_anchor * cross / (cross + stress + 1.0);

            W_1 * stress.sqrt() * technicality.powf(P_1) + stress * W_2
        })
        .collect()
}

/// Replaces zero or undefined samples with the latest valid one.
/// Leading invalid samples stay as they are.
pub fn forward_fill(values: &mut [f64]) {
    let mut last_valid = None;

    for value in values.iter_mut() {
        if *value != 0.0 && value.is_finite() {
            last_valid = Some(*value);
        } else if let Some(last) = last_valid {
            *value = last;
        }
    }
}

/// Power mean of `difficulty` weighted by local note `density`
pub fn weighted_rating(difficulty: &[f64], density: &[f64]) -> Result<f64, RatingError> {
    let (numerator, weight_sum) = difficulty
        .iter()
        .zip(density)
        .fold((0.0, 0.0), |(num, div), (d, c)| (num + d.powf(LAMBDA_N) * c, div + c));

    if weight_sum <= 0.0 {
        return Err(RatingError::degenerate("no notes contribute to the density weight"));
    }

    let rating = (numerator / weight_sum).powf(1.0 / LAMBDA_N);
    if !rating.is_finite() {
        return Err(RatingError::degenerate("weighted rating is not finite"));
    }

    Ok(rating)
}

/// Scales short charts down; approaches 1 as the chart grows
pub fn length_penalty(note_count: usize, hold_count: usize) -> f64 {
    let weighted_count = note_count as f64 + 0.5 * hold_count as f64;

    weighted_count / (weighted_count + LENGTH_PENALTY_OFFSET)
}

/// Applies the empirical corrections to a weighted rating
pub fn finalize_rating(weighted: f64, note_count: usize, hold_count: usize, key_count: u32) -> f64 {
    let mut rating = weighted.powf(P_0);
    rating *= length_penalty(note_count, hold_count);

    if rating <= COMPRESSION_THRESHOLD {
        rating = (2.0 * rating).sqrt();
    }

    rating * (KEY_COUNT_BASE_SCALE + KEY_COUNT_SCALE_STEP * key_count as f64)
}

/// Combines all bars into the final star rating
pub fn aggregate(bars: &Bars, note_count: usize, hold_count: usize, key_count: u32) -> Result<f64, RatingError> {
    bars.ensure_finite()?;

    let mut difficulty = difficulty_series(bars);
    let mut density: Vec<f64> = bars.density.iter().map(|c| c.max(0.0)).collect();
    forward_fill(&mut difficulty);
    forward_fill(&mut density);

    let weighted = weighted_rating(&difficulty, &density)?;
    let rating = finalize_rating(weighted, note_count, hold_count, key_count);

    if !rating.is_finite() {
        return Err(RatingError::degenerate("star rating is not finite"));
    }

    Ok(rating)
}
