mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{nice_step, remap};
pub use time_utils::{AppInstant, plot_x_to_date_string};
