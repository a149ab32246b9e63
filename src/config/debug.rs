//! Debugging feature flags.

pub struct LogFlags {
    /// Report dropped records and skipped indicator schemas during normalization.
    pub log_normalize: bool,

    /// Log every series registration (identity, scale, color).
    pub log_registry: bool,

    /// Surface lifecycle transitions: mount, resize, refit, destroy.
    pub log_surface: bool,

    /// Log every resolved legend snapshot. Very noisy: fires on each cursor move.
    pub log_crosshair: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_normalize: true,
    log_registry: false,
    log_surface: true,
    log_crosshair: false,
    log_performance: false,
};
