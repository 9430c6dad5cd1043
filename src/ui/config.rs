use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub symbol_label: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub ticker_list_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(200),
        heading: Color32::WHITE,
        // The original chart is white-on-black; keep both panels dark
        central_panel: Color32::BLACK,
        side_panel: Color32::from_rgb(25, 25, 25),
        symbol_label: Color32::WHITE,
    },
    ticker_list_width: 90.0,
};

/// All user-facing strings in one place
pub struct UiText {
    pub app_title: &'static str,
    pub ticker_column_header: &'static str,
    pub indicator_legend: &'static str,
    pub empty_series_hint: &'static str,
    pub empty_store_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Stocks",
    ticker_column_header: "Symbol",
    indicator_legend: "MFI",
    empty_series_hint: "No price data for this symbol in the lookback window.",
    empty_store_hint: "No symbols configured.",
};
