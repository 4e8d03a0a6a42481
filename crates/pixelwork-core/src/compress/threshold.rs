//! Coefficient threshold selection and suppression.

/// Threshold for a set of transform coefficients.
///
/// Collects the distinct non-zero magnitudes, sorts them ascending and
/// returns the `k`-th smallest with `k = floor(count * percent / 100)`.
/// Returns 0 when `k < 1`, which suppresses nothing.
pub fn threshold_for(coefficients: &[f64], percent: f64) -> f64 {
    let mut magnitudes: Vec<f64> = coefficients
        .iter()
        .filter(|&&c| c != 0.0)
        .map(|c| c.abs())
        .collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();

    let k = (magnitudes.len() as f64 * percent / 100.0) as usize;
    if k < 1 {
        return 0.0;
    }
    magnitudes[k.min(magnitudes.len()) - 1]
}

/// Zero every coefficient whose magnitude is below `threshold`.
pub fn suppress_below(coefficients: &mut [f64], threshold: f64) {
    for c in coefficients.iter_mut() {
        if c.abs() < threshold {
            *c = 0.0;
        }
    }
}
