// Model constants
pub const LAMBDA_N: f64 = 5.0;
pub const LAMBDA_1: f64 = 0.11;
pub const LAMBDA_2: f64 = 7.0;
pub const LAMBDA_3: f64 = 24.0;
pub const LAMBDA_4: f64 = 0.1;
pub const W_0: f64 = 0.4;
pub const W_1: f64 = 2.7;
pub const W_2: f64 = 0.27;
pub const P_0: f64 = 1.0;
pub const P_1: f64 = 1.5;

// Timeline discretization
pub const GRANULARITY: f64 = 1.0;
pub const WINDOW_HALF_WIDTH_MS: usize = 500;
pub const HOLD_ATTACK_MS: i64 = 80;

/// Inter-onset interval (seconds) assumed for a lane with no surrounding notes
pub const IDLE_DELTA: f64 = 1e9;
/// Gaps shorter than this (seconds) count as simultaneous presses
pub const CHORD_EPSILON: f64 = 1e-9;
/// Head time of the imaginary note following the last note of a lane
pub const SENTINEL_TIME_MS: i64 = 1_000_000_000;

// Key count bounds covered by the cross weight table
pub const MIN_KEY_COUNT: u32 = 1;
pub const MAX_KEY_COUNT: u32 = 10;

// Final scaling
pub const LENGTH_PENALTY_OFFSET: f64 = 60.0;
pub const COMPRESSION_THRESHOLD: f64 = 2.0;
pub const KEY_COUNT_BASE_SCALE: f64 = 0.96;
pub const KEY_COUNT_SCALE_STEP: f64 = 0.01;

/// Hit window scale `x` for a given overall difficulty
pub fn hit_window_scale(overall_difficulty: f64) -> f64 {
    0.3 * ((64.5 - (overall_difficulty * 3.0).ceil()) / 500.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::hit_window_scale;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hit_window_scale_od8() {
        // ceil(24) = 24
        assert_abs_diff_eq!(hit_window_scale(8.0), 0.3 * (40.5f64 / 500.0).sqrt());
    }

    #[test]
    fn test_hit_window_scale_rounds_up() {
        // ceil(3 * 7.1) = 22
        assert_abs_diff_eq!(hit_window_scale(7.1), 0.3 * (42.5f64 / 500.0).sqrt());
    }

    #[test]
    fn test_hit_window_scale_tightens_with_od() {
        assert!(hit_window_scale(10.0) < hit_window_scale(5.0));
    }
}
