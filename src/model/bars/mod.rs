//! Per-millisecond difficulty series, one module per skill dimension.
//!
//! Every function here is pure over a [`NoteSequence`](crate::model::structures::note_sequence::NoteSequence)
//! and returns a series of exactly `timeline_len` slots.

pub mod anchor;
pub mod cross;
pub mod jack;
pub mod press;
pub mod release;
