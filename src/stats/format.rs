/// Formats `value` with `digits` decimals, rounding halves away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid printing "-0.0" for tiny negatives that round to zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", digits, rounded)
}

/// Rounds to `digits` decimals, keeping the number numeric.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
