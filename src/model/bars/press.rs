use itertools::Itertools;

use crate::model::{
    constants::{CHORD_EPSILON, HOLD_ATTACK_MS, LAMBDA_2, LAMBDA_3},
    smoothing::sum_smooth,
    structures::note_sequence::NoteSequence
};

/// Load held hold-note bodies put on the player at every slot.
/// Half weight during the attack phase right after the head.
pub fn hold_body_load(seq: &NoteSequence) -> Vec<f64> {
    let mut load = vec![0.0; seq.timeline_len()];

    for hold in seq.holds() {
        let attack_end = (hold.head_time_ms + HOLD_ATTACK_MS).min(hold.tail_time_ms) as usize;

        for slot in &mut load[hold.head()..attack_end] {
            *slot += 0.5;
        }
        for slot in &mut load[attack_end..hold.tail()] {
            *slot += 1.0;
        }
    }

    load
}

/// Bump peaking on burst speeds, 1 outside of them
fn burst_multiplier(delta: f64) -> f64 {
    let speed = 7.5 / delta;

    if 160.0 < speed && speed < 360.0 {
        1.0 + 1.4e-7 * (speed - 160.0) * (speed - 360.0).powi(2)
    } else {
        1.0
    }
}

fn chord_spike(x: f64) -> f64 {
    1000.0 * (0.02 * (4.0 / x - LAMBDA_3)).powf(0.25)
}

fn press_value(delta: f64, x: f64, hold_multiplier: f64) -> f64 {
    let spread = if delta < 2.0 * x / 3.0 {
        (delta - x / 2.0).powi(2)
    } else {
        (x / 6.0).powi(2)
    };

    1.0 / delta * (0.08 / x * (1.0 - LAMBDA_3 / x * spread)).powf(0.25) * burst_multiplier(delta) * hold_multiplier
}

pub fn press_bar(seq: &NoteSequence, x: f64) -> Vec<f64> {
    let load = hold_body_load(seq);
    let mut press = vec![0.0; seq.timeline_len()];

    for (prev, next) in seq.notes().iter().tuple_windows() {
        let (start, end) = (prev.head(), next.head());
        let delta = 0.001 * (end - start) as f64;

        if delta < CHORD_EPSILON {
            press[start] += chord_spike(x);
            continue;
        }

        let hold_multiplier = 1.0 + LAMBDA_2 * 0.001 * load[start..end].iter().sum::<f64>();
        let value = press_value(delta, x, hold_multiplier);
        for slot in &mut press[start..end] {
            *slot += value;
        }
    }

    sum_smooth(&press)
}
