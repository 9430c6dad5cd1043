// Startup data loading
pub mod fetch;
pub mod yahoo;

// Re-export commonly used types
pub use fetch::{CreateSeriesStore, fetch_market_data, get_series_store_async};
pub use yahoo::YahooChartApi;
