mod backend;
mod chart_surface;
mod scales;
mod scene;

pub use backend::{ChartBackend, SeriesStyle, SurfaceSize, VisualSeries};
pub use chart_surface::{ChartSurface, SurfaceError, SurfacePhase};
pub use scales::ScaleLayout;
pub use scene::{FitRequest, PlotScene};
