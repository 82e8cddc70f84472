use lazy_static::lazy_static;

/// Row marker for a key count that has no lane boundaries to weigh
pub const NO_CROSS_TERM: f64 = -1.0;

lazy_static! {
    /// Per key count, one coefficient per lane boundary slot `0..=K`.
    /// Row `K - 1` belongs to key count `K`.
    static ref CROSS_WEIGHTS: Vec<Vec<f64>> = vec![
        vec![NO_CROSS_TERM],
        vec![0.125, 0.05, 0.125],
        vec![0.125, 0.125, 0.125, 0.125],
        vec![0.175, 0.25, 0.05, 0.25, 0.175],
        vec![0.175, 0.25, 0.175, 0.175, 0.25, 0.175],
        vec![0.225, 0.35, 0.25, 0.05, 0.25, 0.35, 0.225],
        vec![0.225, 0.35, 0.25, 0.225, 0.225, 0.25, 0.35, 0.225],
        vec![0.275, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.275],
        vec![0.275, 0.45, 0.35, 0.25, 0.275, 0.275, 0.25, 0.35, 0.45, 0.275],
        vec![0.325, 0.55, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.55, 0.325]
    ];
}

/// Boundary weights for `key_count`, or `None` when the key count carries no
/// cross term (a single lane) or lies outside the table.
pub fn cross_weights(key_count: u32) -> Option<&'static [f64]> {
    let row = CROSS_WEIGHTS.get((key_count as usize).checked_sub(1)?)?;

    if row.len() == 1 && row[0] == NO_CROSS_TERM {
        return None;
    }

    Some(row.as_slice())
}
