use std::{fs, path::Path};

use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::model::{
    error::RatingError,
    structures::{
        bar_kind::BarKind,
        bars::BarSummary,
        chart::Chart,
        rating_attributes::RatingAttributes
    }
};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to read chart: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse chart: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to rate chart: {0}")]
    Rating(#[from] RatingError)
}

/// Options shared by every chart of a CLI run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateOptions {
    pub od_override: Option<f64>,
    pub clock_rate: f64,
    pub breakdown: bool
}

impl Default for RateOptions {
    fn default() -> Self {
        Self {
            od_override: None,
            clock_rate: 1.0,
            breakdown: false
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub path: String,
    #[serde(flatten)]
    pub attributes: RatingAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<BarSummary>>
}

impl ChartReport {
    /// `path<TAB>rating`, followed by one indented line per bar when a breakdown is present
    pub fn to_line(&self) -> String {
        let mut line = format!("{}\t{:.4}", self.path, self.attributes.star_rating);

        for summary in self.breakdown.iter().flatten() {
            line.push_str(&format!(
                "\n  {:<8} peak={:.4} mean={:.4}",
                summary.kind.to_string(),
                summary.peak,
                summary.mean
            ));
        }

        line
    }
}

pub fn load_chart(path: &Path) -> Result<Chart, ChartError> {
    let contents = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&contents)?)
}

pub fn rate_chart_file(path: &Path, options: &RateOptions) -> Result<ChartReport, ChartError> {
    let mut chart = load_chart(path)?;
    if let Some(od) = options.od_override {
        chart.overall_difficulty = od;
    }

    let calculator = chart.calculator().clock_rate(options.clock_rate);
    let (attributes, breakdown) = if options.breakdown {
        let (attributes, bars) = calculator.calculate_with_bars(&chart.notes)?;
        (attributes, Some(BarKind::iter().map(|kind| bars.summary(kind)).collect()))
    } else {
        (calculator.calculate(&chart.notes)?, None)
    };

    Ok(ChartReport {
        path: path.display().to_string(),
        attributes,
        breakdown
    })
}
