mod test_distance;
mod test_takeoff;

/// Asserts that `actual` is within `tolerance` of `expected`.
fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
