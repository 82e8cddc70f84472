use crate::model::{
    constants::WINDOW_HALF_WIDTH_MS,
    smoothing::average_smooth,
    structures::note_sequence::NoteSequence
};

/// Output of the anchor pass.
#[derive(Debug, Clone)]
pub struct AnchorBar {
    pub bar: Vec<f64>,
    /// Number of lanes with a note near each slot, at least 1
    pub active_lanes: Vec<f64>
}

/// For every lane, whether a note (or hold body) lies within the window of each slot
fn lane_activity(seq: &NoteSequence) -> Vec<Vec<bool>> {
    let len = seq.timeline_len();
    let mut active = vec![vec![false; len]; seq.lane_count()];

    for note in seq.notes() {
        let start = note.head().saturating_sub(WINDOW_HALF_WIDTH_MS);
        let anchor = if note.is_hold() { note.tail() } else { note.head() };
        let end = (anchor + WINDOW_HALF_WIDTH_MS).min(len - 1);

        active[note.lane()][start..end].fill(true);
    }

    active
}

/// Multiplicative factor for one pair of neighbouring active lanes
fn pair_factor(delta_a: f64, delta_b: f64) -> f64 {
    let slowest = delta_a.max(delta_b);
    let diff = (delta_a - delta_b).abs() + (slowest - 0.3).max(0.0);

    if diff < 0.02 {
        (0.75 + 0.5 * slowest).min(1.0)
    } else if diff < 0.07 {
        (0.65 + 5.0 * diff + 0.5 * slowest).min(1.0)
    } else {
        1.0
    }
}

pub fn anchor_bar(seq: &NoteSequence, deltas: &[Vec<f64>]) -> AnchorBar {
    let len = seq.timeline_len();
    let activity = lane_activity(seq);

    let mut anchor = vec![1.0; len];
    let mut active_lanes = vec![1.0; len];
    let mut lanes = Vec::with_capacity(seq.lane_count());

    for s in 0..len {
        lanes.clear();
        lanes.extend((0..seq.lane_count()).filter(|&k| activity[k][s]));

        for pair in lanes.windows(2) {
            anchor[s] *= pair_factor(deltas[pair[0]][s], deltas[pair[1]][s]);
        }
        active_lanes[s] = lanes.len().max(1) as f64;
    }

    AnchorBar {
        bar: average_smooth(&anchor),
        active_lanes
    }
}
