// User interface components
pub mod app;
pub mod chart_view;
pub mod config;
pub mod ticker_list;
pub mod utils;

// Re-export main app
pub use app::StockViewApp;
pub use config::UI_CONFIG;
