use itertools::Itertools;

use crate::model::{
    constants::{IDLE_DELTA, LAMBDA_1, LAMBDA_N},
    smoothing::sum_smooth,
    structures::note_sequence::NoteSequence
};

/// Output of the jack pass.
///
/// `deltas` keeps, for every lane, the inter-onset interval (seconds) in
/// effect at each slot. Slots outside any interval hold [`IDLE_DELTA`].
#[derive(Debug, Clone)]
pub struct JackBar {
    pub bar: Vec<f64>,
    pub deltas: Vec<Vec<f64>>
}

/// Penalizes intervals close to an unplayable trill rate
fn jack_nerfer(delta: f64) -> f64 {
    1.0 - 7e-5 * (0.15 + (delta - 0.08).abs()).powi(-4)
}

fn jack_value(delta: f64, x: f64) -> f64 {
    1.0 / delta * (1.0 / (delta + LAMBDA_1 * x.powf(0.25))) * jack_nerfer(delta)
}

pub fn jack_bar(seq: &NoteSequence, x: f64) -> JackBar {
    let len = seq.timeline_len();
    let mut deltas = vec![vec![IDLE_DELTA; len]; seq.lane_count()];

    let lane_bars: Vec<Vec<f64>> = seq
        .columns()
        .iter()
        .zip(deltas.iter_mut())
        .map(|(lane, lane_deltas)| {
            let mut raw = vec![0.0; len];

            for (prev, next) in lane.iter().tuple_windows() {
                let (start, end) = (prev.head(), next.head());
                if start == end {
                    continue;
                }

                let delta = 0.001 * (end - start) as f64;
                raw[start..end].fill(jack_value(delta, x));
                lane_deltas[start..end].fill(delta);
            }

            sum_smooth(&raw)
        })
        .collect();

    // Power mean across lanes, weighted by how recently each lane was active
    let bar = (0..len)
        .map(|s| {
            let mut numerator = 0.0;
            let mut weight_sum = 0.0;

            for (lane_bar, lane_deltas) in lane_bars.iter().zip(&deltas) {
                let weight = 1.0 / lane_deltas[s];
                numerator += lane_bar[s].max(0.0).powf(LAMBDA_N) * weight;
                weight_sum += weight;
            }

            (numerator / weight_sum.max(1e-9)).powf(1.0 / LAMBDA_N)
        })
        .collect();

    JackBar { bar, deltas }
}
