//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Body/frame color for bars that closed at or above their open
    pub bull_color: Color32,
    /// Body/frame color for bars that closed below their open
    pub bear_color: Color32,
    /// Whisker (high/low shadow) color, shared by both directions
    pub wick_color: Color32,
    /// Indicator curve color on the study sub-plot
    pub indicator_color: Color32,
    /// Candle body width in x-axis units (bars are 1.0 apart)
    pub candle_box_width: f64,
    /// Whisker width relative to the body
    pub candle_whisker_width: f64,
    /// Stroke width for candle outlines and the indicator line
    pub line_width: f32,
    /// Vertical padding applied above/below the price range, as a fraction
    pub y_padding_pct: f64,
    /// Height of the study sub-plot in points
    pub study_height: f32,
    /// Grid visibility for both plots
    pub show_grid: bool,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    bull_color: Color32::from_rgb(0, 170, 0),   // #00AA00
    bear_color: Color32::from_rgb(210, 0, 0),   // #D20000
    wick_color: Color32::WHITE,
    indicator_color: Color32::from_rgb(255, 255, 102), // #FFFF66
    candle_box_width: 0.8,
    candle_whisker_width: 0.5,
    line_width: 1.5,
    y_padding_pct: 0.05,
    study_height: 160.0,
    show_grid: true,
};
