// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{CreateSeriesStore, fetch_market_data};
pub use domain::{Bar, Symbol};
pub use models::{OhlcvSeries, SeriesStore};
pub use ui::StockViewApp;

use crate::config::MARKET;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbols to download and list, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = default_symbols())]
    pub symbols: Vec<String>,

    /// Trailing lookback window passed to the data provider (e.g. "180d")
    #[arg(long, default_value = MARKET.period)]
    pub period: String,
}

fn default_symbols() -> Vec<String> {
    MARKET.symbols.iter().map(|s| s.to_string()).collect()
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, store: SeriesStore) -> Box<dyn eframe::App> {
    let app = ui::StockViewApp::new(cc, store);
    Box::new(app)
}
