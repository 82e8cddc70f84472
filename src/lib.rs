pub mod args;
pub mod chart_file;
pub mod model;
pub mod utils;

pub use model::{
    calculator::RatingCalculator,
    compute_rating,
    error::RatingError,
    structures::{chart::Chart, note::Note, rating_attributes::RatingAttributes}
};
