use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub profit: Color32,
    pub loss: Color32,
    pub error: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub trades_panel_width: f32,
    /// Fixed width of each legend value column, so the legend does not jitter as the cursor moves.
    pub legend_value_width: f32,
    /// The legend strip never grows past this, so cursor moves cannot resize the plot.
    pub legend_height: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(19, 23, 34),
        side_panel: Color32::from_rgb(25, 25, 25),
        profit: Color32::from_rgb(38, 166, 154),
        loss: Color32::from_rgb(239, 83, 80),
        error: Color32::from_rgb(255, 120, 100),
    },
    trades_panel_width: 220.0,
    legend_value_width: 64.0,
    legend_height: 22.0,
};

impl UiConfig {
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin {
                left: 0,
                right: 8, // room for the right-hand price labels
                top: 0,
                bottom: 0,
            },
            ..Default::default()
        }
    }
}
