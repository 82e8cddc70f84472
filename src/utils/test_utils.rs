use crate::model::structures::{chart::Chart, note::Note};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` taps rolling across all lanes, one every `interval_ms`
pub fn generate_stream(key_count: u32, count: usize, interval_ms: i64) -> Vec<Note> {
    (0..count)
        .map(|i| Note::tap((i % key_count as usize) as i32, i as i64 * interval_ms))
        .collect()
}

/// Pseudo-random chart with chords, jacks and holds.
///
/// Lanes never overlap themselves, so every (head, column) pair is unique.
pub fn generate_chart(key_count: u32, note_count: usize, seed: u64) -> Chart {
    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut lane_free_at = vec![0i64; key_count as usize];
    let mut notes = Vec::with_capacity(note_count);
    let mut time = 0i64;

    while notes.len() < note_count {
        // Occasional zero gaps produce chords
        if !rng.random_bool(0.25) {
            time += rng.random_range(40..=250);
        }

        let column = rng.random_range(0..key_count) as usize;
        if lane_free_at[column] > time {
            continue;
        }

        if rng.random_bool(0.2) {
            let tail = time + rng.random_range(100..=800);
            notes.push(Note::hold(column as i32, time, tail));
            lane_free_at[column] = tail + 30;
        } else {
            notes.push(Note::tap(column as i32, time));
            lane_free_at[column] = time + 30;
        }
    }

    Chart {
        key_count,
        overall_difficulty: rng.random_range(5.0..=9.5),
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_chart, generate_stream};
    use crate::model::structures::note::Note;
    use std::collections::HashSet;

    #[test]
    fn test_generate_stream() {
        assert_eq!(
            generate_stream(3, 4, 100),
            vec![Note::tap(0, 0), Note::tap(1, 100), Note::tap(2, 200), Note::tap(0, 300)]
        );
    }

    #[test]
    fn test_generate_chart_is_reproducible() {
        assert_eq!(generate_chart(7, 200, 3), generate_chart(7, 200, 3));
    }

    #[test]
    fn test_generate_chart_shape() {
        let chart = generate_chart(4, 500, 11);

        assert_eq!(chart.notes.len(), 500);
        assert!(chart.notes.iter().all(|n| (0..4).contains(&n.column)));
        assert!(chart.notes.iter().any(|n| n.is_hold()));

        let heads: HashSet<(i32, i64)> = chart.notes.iter().map(|n| (n.column, n.head_time_ms)).collect();
        assert_eq!(heads.len(), 500);
    }
}
