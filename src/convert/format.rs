/// Formats `value` with a fixed number of decimals, or `None` when it is not finite.
pub fn fixed(value: f64, decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    // Adding zero turns -0.0 into 0.0 so it doesn't print as "-0.00".
    Some(format!("{:.*}", decimals, value + 0.0))
}

/// Distance, azimuth and inclination fields use two decimals.
pub fn measurement(value: Option<f64>) -> Option<String> {
    value.and_then(|v| fixed(v, 2))
}

/// LRUD components are never omitted; an unknown dimension is `"0"`.
pub fn lrud(value: Option<f64>) -> String {
    measurement(value).unwrap_or_else(|| "0".to_string())
}

/// Fixed station coordinates use three decimals.
pub fn coordinate(value: f64) -> Option<String> {
    fixed(value, 3)
}
