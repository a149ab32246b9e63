use crate::domain::TimeKey;

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

/// Axis label for a horizontal plot coordinate; empty between representable days.
pub fn plot_x_to_date_string(x: f64) -> String {
    TimeKey::from_plot_x(x)
        .map(|t| t.to_string())
        .unwrap_or_default()
}
