pub mod bar_kind;
pub mod bars;
pub mod chart;
pub mod note;
pub mod note_sequence;
pub mod rating_attributes;
