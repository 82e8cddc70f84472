use serde::Serialize;

use crate::model::{error::RatingError, structures::bar_kind::BarKind};

/// Every series the aggregator consumes, one slot per millisecond
#[derive(Debug, Clone, Default)]
pub struct Bars {
    pub jack: Vec<f64>,
    pub cross: Vec<f64>,
    pub press: Vec<f64>,
    pub anchor: Vec<f64>,
    pub release: Vec<f64>,
    /// Notes within the smoothing window of each slot
    pub density: Vec<f64>,
    /// Lanes with a note near each slot, at least 1
    pub active_lanes: Vec<f64>
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BarSummary {
    pub kind: BarKind,
    pub peak: f64,
    pub mean: f64
}

impl Bars {
    pub fn series(&self, kind: BarKind) -> &[f64] {
        match kind {
            BarKind::Jack => &self.jack,
            BarKind::Cross => &self.cross,
            BarKind::Press => &self.press,
            BarKind::Anchor => &self.anchor,
            BarKind::Release => &self.release,
            BarKind::Density => &self.density
        }
    }

    pub fn summary(&self, kind: BarKind) -> BarSummary {
        let series = self.series(kind);
        let peak = series.iter().copied().fold(0.0, f64::max);
        let mean = if series.is_empty() {
            0.0
        } else {
            series.iter().sum::<f64>() / series.len() as f64
        };

        BarSummary { kind, peak, mean }
    }

    pub fn timeline_len(&self) -> usize {
        self.jack.len()
    }

    /// Fails on the first series holding a NaN or infinite value
    pub(crate) fn ensure_finite(&self) -> Result<(), RatingError> {
        let named = [
            ("jack", &self.jack),
            ("cross", &self.cross),
            ("press", &self.press),
            ("anchor", &self.anchor),
            ("release", &self.release),
            ("density", &self.density),
            ("active lanes", &self.active_lanes)
        ];

        for (name, series) in named {
            if let Some(s) = series.iter().position(|v| !v.is_finite()) {
                return Err(RatingError::degenerate(format!("{} bar is not finite at {} ms", name, s)));
            }
        }

        Ok(())
    }
}
