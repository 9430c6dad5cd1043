//! Market data configuration constants and types.

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    /// Yahoo rejects requests without a browser-ish user agent
    pub user_agent: &'static str,
}

/// The Master Configuration Struct for the startup data download
pub struct MarketConfig {
    /// Configured ticker list; insertion order is the display order
    pub symbols: &'static [&'static str],
    /// Trailing lookback window passed to the chart endpoint (e.g. "180d")
    pub period: &'static str,
    /// Bar width requested from the chart endpoint
    pub interval: &'static str,
    /// Base URL of the Yahoo Finance chart API
    pub chart_base_url: &'static str,
    pub client: ClientDefaults,
}

pub const MARKET: MarketConfig = MarketConfig {
    symbols: &["AAPL", "GOOGL", "FB"],
    period: "180d",
    interval: "1d",
    chart_base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    client: ClientDefaults {
        timeout_ms: 10_000,
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) stockview/0.1",
    },
};
