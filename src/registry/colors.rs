use crate::{config::CHART_CONFIG, domain::SeriesColor};

/// Hands out palette colors in call order, wrapping once the palette is used up.
/// Same call sequence, same colors: nothing random or hash-ordered is involved.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: &'static [&'static str],
    next: usize,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(CHART_CONFIG.indicator_palette)
    }
}

impl ColorAssigner {
    pub fn new(palette: &'static [&'static str]) -> Self {
        debug_assert!(!palette.is_empty(), "indicator palette must not be empty");
        Self { palette, next: 0 }
    }

    pub fn next_color(&mut self) -> SeriesColor {
        let color = palette_color(self.palette, self.next);
        self.next += 1;
        color
    }
}

/// Color for the `index`-th indicator line.
pub fn palette_color(palette: &'static [&'static str], index: usize) -> SeriesColor {
    SeriesColor::new(palette[index % palette.len()])
}

/// Colors for an ordered sequence of `(indicator, field)` identities.
pub fn assign_colors<'a, I>(identities: I) -> Vec<((&'a str, &'a str), SeriesColor)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut assigner = ColorAssigner::default();
    identities
        .into_iter()
        .map(|identity| (identity, assigner.next_color()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &[&str] = &["#111111", "#222222", "#333333"];

    #[test]
    fn wraps_cyclically() {
        let mut assigner = ColorAssigner::new(PALETTE);
        let colors: Vec<&str> = (0..5).map(|_| assigner.next_color().hex()).collect();
        assert_eq!(colors, ["#111111", "#222222", "#333333", "#111111", "#222222"]);
    }

    #[test]
    fn assignment_is_deterministic() {
        let ids = [("sma", "value"), ("macd", "macd"), ("macd", "signal")];
        let first = assign_colors(ids);
        let second = assign_colors(ids);
        assert_eq!(first, second);
        assert_eq!(first[0].1.hex(), CHART_CONFIG.indicator_palette[0]);
        assert_eq!(first[2].1.hex(), CHART_CONFIG.indicator_palette[2]);
    }
}
