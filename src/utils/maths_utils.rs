/// Linear map of `val` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// A degenerate input range maps everything to the middle of the output range.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() <= f64::EPSILON {
        return (out_min + out_max) / 2.0;
    }
    let t = (val - in_min) / span;
    out_min + t * (out_max - out_min)
}

/// Human-friendly step size (1, 2, 5, 10, 20, 50...) giving roughly `target_count` steps over `range`.
pub fn nice_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}
