mod build;
mod colors;
mod series_registry;

pub use {
    build::{ChartGeneration, StrategySummary, build_generation},
    colors::{ColorAssigner, assign_colors, palette_color},
    series_registry::{RegistryBuilder, RegistryError, SeriesHandle, SeriesRegistry},
};
