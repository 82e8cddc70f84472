use std::collections::HashSet;

use crate::model::{
    constants::{MAX_KEY_COUNT, MIN_KEY_COUNT, SENTINEL_TIME_MS},
    error::RatingError,
    structures::note::Note
};

/// Validated notes of one chart, ordered by head time then column,
/// along with the per-lane and per-hold views every bar works from.
#[derive(Debug, Clone)]
pub struct NoteSequence {
    key_count: u32,
    notes: Vec<Note>,
    columns: Vec<Vec<Note>>,
    holds: Vec<Note>,
    tails: Vec<Note>,
    timeline_len: usize
}

impl NoteSequence {
    /// Validates `notes` against `key_count` and builds the derived views.
    ///
    /// # Errors
    /// - [`RatingError::UnsupportedKeyCount`] if `key_count` is outside `[1, 10]`
    /// - [`RatingError::EmptyInput`] if there are no notes
    /// - [`RatingError::InvalidColumn`] if a column is outside `[0, key_count)`
    /// - [`RatingError::InvalidTime`] if a head is negative, a hold ends before it starts,
    ///   or a head or tail lies at or past [`SENTINEL_TIME_MS`]
    /// - [`RatingError::DegenerateInput`] for a single note, or notes spanning fewer than two distinct time points
    pub fn build(notes: &[Note], key_count: u32) -> Result<NoteSequence, RatingError> {
        if !(MIN_KEY_COUNT..=MAX_KEY_COUNT).contains(&key_count) {
            return Err(RatingError::UnsupportedKeyCount(key_count));
        }

        if notes.is_empty() {
            return Err(RatingError::EmptyInput);
        }

        for note in notes {
            if note.column < 0 || note.column as u32 >= key_count {
                return Err(RatingError::InvalidColumn {
                    column: note.column,
                    key_count
                });
            }

            let out_of_range = note.head_time_ms < 0
                || note.head_time_ms >= SENTINEL_TIME_MS
                || (note.is_hold() && (note.tail_time_ms < note.head_time_ms || note.tail_time_ms >= SENTINEL_TIME_MS));
            if out_of_range {
                return Err(RatingError::InvalidTime {
                    head_time_ms: note.head_time_ms,
                    tail_time_ms: note.tail_time_ms
                });
            }
        }

        if notes.len() < 2 {
            return Err(RatingError::degenerate("a single note has no inter-onset interval"));
        }

        let time_points: HashSet<i64> = notes
            .iter()
            .flat_map(|n| [Some(n.head_time_ms), n.is_hold().then_some(n.tail_time_ms)])
            .flatten()
            .collect();

        if time_points.len() < 2 {
            return Err(RatingError::degenerate("notes span fewer than two distinct time points"));
        }

        // Stable, so identical (head, column) pairs keep their input order
        let mut sorted = notes.to_vec();
        sorted.sort_by_key(|n| (n.head_time_ms, n.column));

        let mut columns = vec![Vec::new(); key_count as usize];
        for note in &sorted {
            columns[note.lane()].push(*note);
        }

        let holds: Vec<Note> = sorted.iter().filter(|n| n.is_hold()).copied().collect();
        let mut tails = holds.clone();
        tails.sort_by_key(|n| n.tail_time_ms);

        let last_time = sorted
            .iter()
            .map(|n| n.head_time_ms.max(n.tail_time_ms))
            .max()
            .unwrap_or_default();

        Ok(NoteSequence {
            key_count,
            notes: sorted,
            columns,
            holds,
            tails,
            timeline_len: last_time as usize + 1
        })
    }

    pub fn key_count(&self) -> u32 {
        self.key_count
    }

    pub fn lane_count(&self) -> usize {
        self.key_count as usize
    }

    /// All notes, ordered by head time then column
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// One time-ordered sub-sequence per lane
    pub fn columns(&self) -> &[Vec<Note>] {
        &self.columns
    }

    pub fn holds(&self) -> &[Note] {
        &self.holds
    }

    /// Holds ordered by release time
    pub fn tails(&self) -> &[Note] {
        &self.tails
    }

    /// Number of millisecond slots every bar covers
    pub fn timeline_len(&self) -> usize {
        self.timeline_len
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn hold_count(&self) -> usize {
        self.holds.len()
    }
}
