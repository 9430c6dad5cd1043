// Yahoo Finance chart API client.
//
// One GET per symbol against /v8/finance/chart/{symbol}?range=..&interval=..
// The payload carries parallel OHLCV columns with nullable entries; rows with
// any missing field are dropped rather than guessed at.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use tokio::time::Instant;

use crate::config::MARKET;
use crate::data::fetch::CreateSeriesStore;
use crate::domain::{Bar, Symbol};
use crate::models::{OhlcvSeries, SeriesStore};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
#[cfg(debug_assertions)]
use crate::utils::time_utils;

pub struct YahooChartApi;

#[async_trait]
impl CreateSeriesStore for YahooChartApi {
    fn signature(&self) -> &'static str {
        "Yahoo chart API"
    }

    async fn create_series_store(&self, symbols: &[Symbol], period: &str) -> Result<SeriesStore> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(MARKET.client.timeout_ms))
            .user_agent(MARKET.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;

        let start_time = Instant::now();

        // One concurrent download per symbol; join_all keeps the results in
        // input order, which is what gives the store its insertion order.
        let handles = symbols
            .iter()
            .map(|symbol| fetch_symbol_series(&client, symbol, period));
        let results = join_all(handles).await;

        let mut store = SeriesStore::new();
        for (symbol, result) in symbols.iter().zip(results) {
            let series = result.with_context(|| format!("download failed for {}", symbol))?;
            store.insert(symbol.clone(), series);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_summary {
            for symbol in store.symbols() {
                let Some(series) = store.get(&symbol) else {
                    continue;
                };
                match (series.first_timestamp_ms(), series.last_timestamp_ms()) {
                    (Some(first), Some(last)) => log::info!(
                        "{}: {} bars ({} to {})",
                        symbol,
                        series.len(),
                        time_utils::epoch_ms_to_utc(first),
                        time_utils::epoch_ms_to_utc(last),
                    ),
                    _ => log::info!("{}: empty series", symbol),
                }
            }
        }
        log::info!("Market data download took {:?}", start_time.elapsed());

        Ok(store)
    }
}

/// Downloads one symbol's trailing-period daily bars.
/// A response with no usable rows yields an empty series, not an error.
async fn fetch_symbol_series(
    client: &reqwest::Client,
    symbol: &Symbol,
    period: &str,
) -> Result<OhlcvSeries> {
    let url = format!("{}/{}", MARKET.chart_base_url, symbol);
    let response: ChartResponse = client
        .get(&url)
        .query(&[("range", period), ("interval", MARKET.interval)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    chart_response_to_series(response)
}

fn chart_response_to_series(response: ChartResponse) -> Result<OhlcvSeries> {
    if let Some(error) = response.chart.error {
        bail!("chart API error: {}", error);
    }

    let Some(data) = response.chart.result.and_then(|mut r| {
        if r.is_empty() { None } else { Some(r.remove(0)) }
    }) else {
        bail!("chart API returned neither result nor error");
    };

    // No timestamps at all happens for symbols with no trades in the window
    let timestamps = data.timestamp.unwrap_or_default();
    let Some(quote) = data.indicators.quote.into_iter().next() else {
        return Ok(OhlcvSeries::default());
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for (idx, ts_sec) in timestamps.iter().enumerate() {
        let row = (
            quote.open.get(idx).copied().flatten(),
            quote.high.get(idx).copied().flatten(),
            quote.low.get(idx).copied().flatten(),
            quote.close.get(idx).copied().flatten(),
            quote.volume.get(idx).copied().flatten(),
        );
        // Rows with any null column (halted days etc.) are skipped
        if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
            bars.push(Bar::new(ts_sec * 1000, open, high, low, close, volume));
        }
    }

    Ok(OhlcvSeries::from_bars(bars))
}

// --- Wire format -----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<OhlcvSeries> {
        let response: ChartResponse = serde_json::from_str(json).expect("valid test JSON");
        chart_response_to_series(response)
    }

    #[test]
    fn test_parses_complete_rows() {
        let series = parse(
            r#"{"chart":{"result":[{"timestamp":[1700000000,1700086400],
                "indicators":{"quote":[{"open":[10.0,11.0],"high":[12.0,13.0],
                "low":[9.0,10.0],"close":[11.0,12.0],"volume":[1000.0,2000.0]}]}}],
                "error":null}}"#,
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[0].timestamp_ms, 1_700_000_000_000);
        assert_eq!(series.bars()[1].close, 12.0);
    }

    #[test]
    fn test_rows_with_nulls_are_dropped() {
        let series = parse(
            r#"{"chart":{"result":[{"timestamp":[1,2,3],
                "indicators":{"quote":[{"open":[1.0,null,3.0],"high":[1.0,2.0,3.0],
                "low":[1.0,2.0,3.0],"close":[1.0,2.0,3.0],"volume":[1.0,2.0,null]}]}}],
                "error":null}}"#,
        )
        .unwrap();

        // Middle row loses its open, last row its volume
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_missing_timestamps_give_empty_series() {
        let series = parse(
            r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}],"error":null}}"#,
        )
        .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_api_error_is_propagated() {
        let result = parse(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data"}}}"#,
        );
        assert!(result.is_err());
    }
}
