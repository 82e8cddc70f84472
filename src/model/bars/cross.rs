use itertools::Itertools;

use crate::model::{
    cross_weights::cross_weights,
    smoothing::sum_smooth,
    structures::{note::Note, note_sequence::NoteSequence}
};

/// Notes on either side of lane boundary `slot`. The outer boundaries only
/// see their single neighbouring lane.
fn boundary_notes(seq: &NoteSequence, slot: usize) -> Vec<Note> {
    let columns = seq.columns();
    let k = seq.lane_count();

    if slot == 0 {
        columns[0].clone()
    } else if slot == k {
        columns[k - 1].clone()
    } else {
        columns[slot - 1]
            .iter()
            .merge_by(&columns[slot], |a, b| a.head_time_ms <= b.head_time_ms)
            .copied()
            .collect()
    }
}

pub fn cross_bar(seq: &NoteSequence, x: f64) -> Vec<f64> {
    let len = seq.timeline_len();
    let Some(weights) = cross_weights(seq.key_count()) else {
        return vec![0.0; len];
    };

    let mut cross = vec![0.0; len];
    for (slot, weight) in weights.iter().enumerate() {
        for (prev, next) in boundary_notes(seq, slot).iter().tuple_windows() {
            let (start, end) = (prev.head(), next.head());
            let delta = 0.001 * (end - start) as f64;
            let value = 0.16 * x.max(delta).powi(-2);

            for slot_value in &mut cross[start..end] {
                *slot_value += value * weight;
            }
        }
    }

    sum_smooth(&cross)
}

#[cfg(test)]
mod tests {
    use super::{boundary_notes, cross_bar};
    use crate::model::{
        constants::hit_window_scale,
        structures::{note::Note, note_sequence::NoteSequence}
    };

    #[test]
    fn test_single_lane_has_no_cross_term() {
        let notes: Vec<Note> = (0..20).map(|i| Note::tap(0, i * 100)).collect();
        let seq = NoteSequence::build(&notes, 1).unwrap();

        let cross = cross_bar(&seq, hit_window_scale(8.0));

        assert_eq!(cross.len(), seq.timeline_len());
        assert!(cross.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_boundary_notes_merge_neighbours() {
        let notes = vec![Note::tap(0, 0), Note::tap(1, 50), Note::tap(0, 100), Note::tap(2, 75)];
        let seq = NoteSequence::build(&notes, 3).unwrap();

        assert_eq!(boundary_notes(&seq, 0), vec![Note::tap(0, 0), Note::tap(0, 100)]);
        assert_eq!(
            boundary_notes(&seq, 1),
            vec![Note::tap(0, 0), Note::tap(1, 50), Note::tap(0, 100)]
        );
        assert_eq!(boundary_notes(&seq, 2), vec![Note::tap(1, 50), Note::tap(2, 75)]);
        assert_eq!(boundary_notes(&seq, 3), vec![Note::tap(2, 75)]);
    }

    #[test]
    fn test_denser_boundary_does_not_decrease_bar() {
        let x = hit_window_scale(8.0);
        let sparse: Vec<Note> = (0..10).map(|i| Note::tap(0, i * 200)).collect();
        let mut dense = sparse.clone();
        dense.extend((0..10).map(|i| Note::tap(1, i * 200 + 100)));

        let before = cross_bar(&NoteSequence::build(&sparse, 2).unwrap(), x);
        let after = cross_bar(&NoteSequence::build(&dense, 2).unwrap(), x);

        for s in 0..before.len() {
            assert!(after[s] >= before[s] - 1e-12);
        }
    }
}
