use {
    chrono::{Datelike, NaiveDate},
    std::fmt,
};

/// Format of a truncated datetime, and of every `TimeKey` we display.
pub const TIME_KEY_FORMAT: &str = "%Y-%m-%d";

/// Characters that end the date part of a backend datetime ("2024-01-02T09:30:00", "2024-01-02 09:30").
const TIME_SEPARATORS: [char; 2] = ['T', ' '];

/// Everything before the first time separator.
/// Pure string slicing: no calendar validation happens here, and a bare date passes through unchanged.
pub fn truncate_datetime(raw: &str) -> &str {
    let raw = raw.trim();
    match raw.find(|c: char| TIME_SEPARATORS.contains(&c)) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Day-resolution key shared by every series on the horizontal axis.
/// Two timestamps on the same calendar day collapse to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeKey(NaiveDate);

impl TimeKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Truncates then parses. `None` for empty or unparseable input, which callers drop silently.
    pub fn parse(raw: &str) -> Option<Self> {
        let date_part = truncate_datetime(raw);
        if date_part.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(date_part, TIME_KEY_FORMAT)
            .ok()
            .map(Self)
    }

    #[inline]
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Horizontal plot coordinate: whole days, so one candle is exactly 1.0 wide.
    #[inline]
    pub fn to_plot_x(self) -> f64 {
        self.0.num_days_from_ce() as f64
    }

    /// Nearest day to a plot coordinate. `None` outside chrono's representable range.
    pub fn from_plot_x(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        let days = x.round();
        if days < i32::MIN as f64 || days > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(days as i32).map(Self)
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_KEY_FORMAT))
    }
}

/// Inclusive span of days covered by a set of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimeKey,
    pub end: TimeKey,
}

impl TimeRange {
    pub fn single(time: TimeKey) -> Self {
        Self {
            start: time,
            end: time,
        }
    }

    pub fn include(self, time: TimeKey) -> Self {
        Self {
            start: self.start.min(time),
            end: self.end.max(time),
        }
    }

    pub fn union(self, other: TimeRange) -> Self {
        self.include(other.start).include(other.end)
    }
}
