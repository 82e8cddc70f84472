use serde::{Deserialize, Serialize};

fn tap_tail() -> i64 {
    -1
}

/// A single hit event. A negative `tail_time_ms` marks a tap, anything else
/// is the release time of a hold whose body spans `[head_time_ms, tail_time_ms)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub column: i32,
    pub head_time_ms: i64,
    #[serde(default = "tap_tail")]
    pub tail_time_ms: i64
}

impl Note {
    pub fn tap(column: i32, head_time_ms: i64) -> Note {
        Note {
            column,
            head_time_ms,
            tail_time_ms: tap_tail()
        }
    }

    pub fn hold(column: i32, head_time_ms: i64, tail_time_ms: i64) -> Note {
        Note {
            column,
            head_time_ms,
            tail_time_ms
        }
    }

    pub fn is_hold(&self) -> bool {
        self.tail_time_ms >= 0
    }

    /// Zero-based lane index. Only meaningful once the column has been validated.
    pub(crate) fn lane(&self) -> usize {
        self.column as usize
    }

    pub(crate) fn head(&self) -> usize {
        self.head_time_ms as usize
    }

    pub(crate) fn tail(&self) -> usize {
        self.tail_time_ms as usize
    }

    /// Returns a copy with every timestamp divided by `clock_rate` and floored.
    /// Taps keep their tail marker.
    pub fn scaled(&self, clock_rate: f64) -> Note {
        let scale = |t: i64| (t as f64 / clock_rate).floor() as i64;

        Note {
            column: self.column,
            head_time_ms: scale(self.head_time_ms),
            tail_time_ms: if self.is_hold() {
                scale(self.tail_time_ms)
            } else {
                self.tail_time_ms
            }
        }
    }
}
