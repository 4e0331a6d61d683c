//! Plot visualization configuration

use colorgrad::Gradient;
use eframe::egui::Color32;

use crate::domain::condition::ConditionGrade;

pub struct PlotConfig {
    // Gradient used to colour condition grades, worst (J) to best (S)
    pub grade_gradient_colors: &'static [&'static str],
    /// Height of the wide time-axis charts
    pub wide_plot_height: f32,
    /// Height of the two box plots
    pub box_plot_height: f32,
    /// Width of monthly bars, in days on the date axis
    pub monthly_bar_width_days: f64,
    /// Width of each box, in category slots
    pub box_width: f64,
    pub line_width: f32,
    pub fallback_color: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    grade_gradient_colors: &[
        "#5e3c99", // J
        "#b2abd2", // D
        "#fdb863", // C
        "#e66101", // B
        "#1b9e77", // A
        "#0571b0", // S
    ],
    wide_plot_height: 260.0,
    box_plot_height: 260.0,
    monthly_bar_width_days: 24.0,
    box_width: 0.5,
    line_width: 2.0,
    fallback_color: Color32::GRAY,
};

/// Colour for a condition grade, sampled from the grade gradient.
pub fn grade_color(grade: ConditionGrade) -> Color32 {
    let position = f32::from(grade.code()) / 5.0;
    match colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.grade_gradient_colors)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(grad) => {
            let rgba8 = grad.at(position).to_rgba8();
            Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
        }
        Err(e) => {
            log::warn!("Failed to build grade gradient: {}", e);
            PLOT_CONFIG.fallback_color
        }
    }
}
