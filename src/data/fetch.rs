// Async code to run in main before egui starts up

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::Cli;
use crate::data::yahoo::YahooChartApi;
use crate::domain::Symbol;
use crate::models::SeriesStore;
use crate::utils::time_utils::period_to_days;

#[async_trait]
pub trait CreateSeriesStore {
    // Either create a populated store OR return an anyhow::Error
    async fn create_series_store(&self, symbols: &[Symbol], period: &str) -> Result<SeriesStore>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_series_store_async(
    implementations: &[Box<dyn CreateSeriesStore>],
    symbols: &[Symbol],
    period: &str,
) -> Result<(SeriesStore, &'static str)> {
    for imp in implementations {
        match imp.create_series_store(symbols, period).await {
            Ok(store) => return Ok((store, imp.signature())),
            Err(e) => {
                log::warn!("Provider {} failed: {:#}", imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All providers failed to create the series store"))
}

/// The async function to run in main before the GUI starts at all
/// (so it can't rely on any GUI app state).
pub async fn fetch_market_data(args: &Cli) -> Result<(SeriesStore, &'static str)> {
    let symbols: Vec<Symbol> = args.symbols.iter().map(|s| Symbol::new(s)).collect();

    match period_to_days(&args.period) {
        Some(days) => log::info!(
            "Fetching {} symbols over a {}-day window",
            symbols.len(),
            days
        ),
        None => log::warn!(
            "Lookback period {:?} is not a recognized shorthand; passing it through as-is",
            args.period
        ),
    }

    let providers: Vec<Box<dyn CreateSeriesStore>> = vec![Box::new(YahooChartApi)];
    let (store, signature) = get_series_store_async(&providers, &symbols, &args.period).await?;

    log::info!(
        "Loaded series for {} symbols using: {}",
        store.len(),
        signature
    );
    Ok((store, signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OhlcvSeries;

    struct CannedProvider;

    #[async_trait]
    impl CreateSeriesStore for CannedProvider {
        fn signature(&self) -> &'static str {
            "canned"
        }

        async fn create_series_store(
            &self,
            symbols: &[Symbol],
            _period: &str,
        ) -> Result<SeriesStore> {
            let mut store = SeriesStore::new();
            for symbol in symbols {
                store.insert(symbol.clone(), OhlcvSeries::default());
            }
            Ok(store)
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CreateSeriesStore for FailingProvider {
        fn signature(&self) -> &'static str {
            "failing"
        }

        async fn create_series_store(
            &self,
            _symbols: &[Symbol],
            _period: &str,
        ) -> Result<SeriesStore> {
            Err(anyhow!("boom"))
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_next_provider() {
        let providers: Vec<Box<dyn CreateSeriesStore>> =
            vec![Box::new(FailingProvider), Box::new(CannedProvider)];
        let symbols = vec![Symbol::new("AAPL"), Symbol::new("GOOGL")];

        let (store, signature) = get_series_store_async(&providers, &symbols, "180d")
            .await
            .unwrap();

        assert_eq!(signature, "canned");
        assert_eq!(store.len(), 2);
        assert_eq!(store.first_symbol(), Some(Symbol::new("AAPL")));
    }

    #[tokio::test]
    async fn test_all_providers_failing_is_an_error() {
        let providers: Vec<Box<dyn CreateSeriesStore>> = vec![Box::new(FailingProvider)];
        let result = get_series_store_async(&providers, &[Symbol::new("AAPL")], "180d").await;
        assert!(result.is_err());
    }
}
