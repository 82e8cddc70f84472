use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Names one per-millisecond series produced while rating a chart
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Jack,
    Cross,
    Press,
    Anchor,
    Release,
    Density
}
