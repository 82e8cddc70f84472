use itertools::Itertools;

use crate::model::{
    constants::{HOLD_ATTACK_MS, LAMBDA_4, SENTINEL_TIME_MS},
    smoothing::sum_smooth,
    structures::{note::Note, note_sequence::NoteSequence}
};

/// Head time of the first note in the same lane after `hold`,
/// or [`SENTINEL_TIME_MS`] when the lane ends with it.
fn next_head_in_lane(seq: &NoteSequence, hold: &Note) -> i64 {
    let lane = &seq.columns()[hold.lane()];
    let index = lane.partition_point(|n| n.head_time_ms < hold.head_time_ms);

    lane.get(index + 1).map_or(SENTINEL_TIME_MS, |n| n.head_time_ms)
}

/// How awkwardly a release lines up, from its own length and the gap to the next note in its lane
fn release_irregularity(hold: &Note, next_head_ms: i64, x: f64) -> f64 {
    let body_offset = 0.001 * (hold.tail_time_ms - hold.head_time_ms - HOLD_ATTACK_MS).abs() as f64 / x;
    let gap_offset = 0.001 * (next_head_ms - hold.tail_time_ms - HOLD_ATTACK_MS).abs() as f64 / x;

    2.0 / (2.0 + (-5.0 * (body_offset - 0.75)).exp() + (-5.0 * (gap_offset - 0.75)).exp())
}

pub fn release_bar(seq: &NoteSequence, x: f64) -> Vec<f64> {
    let tails = seq.tails();
    let irregularity: Vec<f64> = tails
        .iter()
        .map(|hold| release_irregularity(hold, next_head_in_lane(seq, hold), x))
        .collect();

    let mut release = vec![0.0; seq.timeline_len()];
    for ((prev, next), (i_prev, i_next)) in tails.iter().tuple_windows().zip(irregularity.iter().tuple_windows()) {
        let (start, end) = (prev.tail(), next.tail());
        if start == end {
            continue;
        }

        let delta = 0.001 * (end - start) as f64;
        let value = 0.08 * delta.powf(-0.5) / x * (1.0 + LAMBDA_4 * (i_prev + i_next));
        release[start..end].fill(value);
    }

    sum_smooth(&release)
}
