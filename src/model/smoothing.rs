use crate::model::constants::{GRANULARITY, WINDOW_HALF_WIDTH_MS};

/// Sliding window density over `[s - 500, s + 500)`.
///
/// Meant for impulse-style series where each event contributes at one
/// index, so the window sum is scaled by a fixed `0.001` instead of the
/// number of slots actually covered.
pub fn sum_smooth(signal: &[f64]) -> Vec<f64> {
    let len = signal.len();
    let mut smoothed = vec![0.0; len];
    let mut window_sum: f64 = signal[..WINDOW_HALF_WIDTH_MS.min(len)].iter().sum();

    for s in 0..len {
        smoothed[s] = 0.001 * window_sum * GRANULARITY;
        if s + WINDOW_HALF_WIDTH_MS < len {
            window_sum += signal[s + WINDOW_HALF_WIDTH_MS];
        }
        if s >= WINDOW_HALF_WIDTH_MS {
            window_sum -= signal[s - WINDOW_HALF_WIDTH_MS];
        }
    }

    smoothed
}

/// Sliding window mean over `[s - 500, s + 500)`, dividing by the number of
/// slots the window covers so the result stays a proper mean where the
/// window is truncated by either end of the timeline.
pub fn average_smooth(signal: &[f64]) -> Vec<f64> {
    let len = signal.len();
    let mut smoothed = vec![0.0; len];
    let mut window_len = WINDOW_HALF_WIDTH_MS.min(len);
    let mut window_sum: f64 = signal[..window_len].iter().sum();

    for s in 0..len {
        smoothed[s] = window_sum / window_len as f64 * GRANULARITY;
        if s + WINDOW_HALF_WIDTH_MS < len {
            window_sum += signal[s + WINDOW_HALF_WIDTH_MS];
            window_len += 1;
        }
        if s >= WINDOW_HALF_WIDTH_MS {
            window_sum -= signal[s - WINDOW_HALF_WIDTH_MS];
            window_len -= 1;
        }
    }

    smoothed
}

/// Number of `times` falling in `[t - 500, t + 500)` for every slot of a
/// timeline of `len` slots. `times` must be sorted ascending.
pub fn sliding_count(times: &[usize], len: usize) -> Vec<f64> {
    let mut counts = vec![0.0; len];
    let mut start = 0;
    let mut end = 0;

    for (t, count) in counts.iter_mut().enumerate() {
        while start < times.len() && times[start] + WINDOW_HALF_WIDTH_MS < t {
            start += 1;
        }
        while end < times.len() && times[end] < t + WINDOW_HALF_WIDTH_MS {
            end += 1;
        }
        *count = (end - start) as f64;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::{average_smooth, sliding_count, sum_smooth};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum_smooth_impulse_spreads_over_window() {
        let mut signal = vec![0.0; 3000];
        signal[1500] = 1000.0;

        let smoothed = sum_smooth(&signal);

        // The impulse is inside [s - 500, s + 500) for s in (1000, 2000]
        assert_eq!(smoothed[1000], 0.0);
        assert_abs_diff_eq!(smoothed[1001], 1.0);
        assert_abs_diff_eq!(smoothed[1500], 1.0);
        assert_abs_diff_eq!(smoothed[2000], 1.0);
        assert_eq!(smoothed[2001], 0.0);
    }

    #[test]
    fn test_sum_smooth_constant_signal_truncated_at_edges() {
        let smoothed = sum_smooth(&vec![1.0; 2000]);

        assert_abs_diff_eq!(smoothed[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(smoothed[1000], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(smoothed[1999], 0.501, epsilon = 1e-12);
    }

    #[test]
    fn test_average_smooth_constant_signal_is_constant() {
        let smoothed = average_smooth(&vec![0.8; 1800]);

        for value in smoothed {
            assert_abs_diff_eq!(value, 0.8, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_average_smooth_short_timeline() {
        let smoothed = average_smooth(&[1.0, 0.0, 0.5]);

        for value in smoothed {
            assert_abs_diff_eq!(value, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sliding_count() {
        let counts = sliding_count(&[0, 100, 1200], 1800);

        assert_eq!(counts[0], 2.0);
        assert_eq!(counts[500], 2.0);
        assert_eq!(counts[600], 1.0);
        assert_eq!(counts[601], 0.0);
        assert_eq!(counts[700], 0.0);
        assert_eq!(counts[701], 1.0);
        assert_eq!(counts[1700], 1.0);
        assert_eq!(counts[1701], 0.0);
    }
}
