use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("Note column {column} is outside of [0, {key_count})")]
    InvalidColumn { column: i32, key_count: u32 },

    #[error("Note list is empty")]
    EmptyInput,

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Unsupported key count {0}, expected a value in [1, 10]")]
    UnsupportedKeyCount(u32),

    #[error("Invalid note timing: head {head_time_ms} ms, tail {tail_time_ms} ms")]
    InvalidTime { head_time_ms: i64, tail_time_ms: i64 },

    #[error("Invalid clock rate {0}, expected a finite value above zero")]
    InvalidClockRate(f64)
}

impl RatingError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        RatingError::DegenerateInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::RatingError;

    #[test]
    fn test_display_invalid_column() {
        let err = RatingError::InvalidColumn { column: 4, key_count: 4 };
        assert_eq!(err.to_string(), "Note column 4 is outside of [0, 4)");
    }

    #[test]
    fn test_display_unsupported_key_count() {
        assert_eq!(
            RatingError::UnsupportedKeyCount(11).to_string(),
            "Unsupported key count 11, expected a value in [1, 10]"
        );
    }
}
