use crate::domain::{Bar, Symbol};

// ============================================================================
// OhlcvSeries: one symbol's price history, ordered by timestamp
// ============================================================================

/// Bars ordered ascending by timestamp. Built once at startup and read-only
/// afterwards; may be empty for a symbol with no data in the lookback window.
#[derive(Debug, Clone, Default)]
pub struct OhlcvSeries {
    bars: Vec<Bar>,
}

impl OhlcvSeries {
    /// Builds a series, sorting the input so the ordering invariant holds
    /// even when the upstream payload delivers bars out of order.
    pub fn from_bars(mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|bar| bar.timestamp_ms);
        OhlcvSeries { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.bars.first().map(|bar| bar.timestamp_ms)
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.bars.last().map(|bar| bar.timestamp_ms)
    }
}

// ============================================================================
// SeriesStore: Symbol -> OhlcvSeries, in configured order
// ============================================================================

/// In-memory mapping from symbol to its series. Insertion order is the
/// configured symbol order and doubles as the list view's default row order.
///
/// Invariant: every symbol the list view can show has an entry here, so a
/// failed lookup from the UI is a programming error, not a runtime case.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    entries: Vec<(Symbol, OhlcvSeries)>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a series, replacing any previous entry for the same symbol
    /// (the replacement keeps the original position).
    pub fn insert(&mut self, symbol: Symbol, series: OhlcvSeries) {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            entry.1 = series;
        } else {
            self.entries.push((symbol, series));
        }
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&OhlcvSeries> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, series)| series)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.entries.iter().any(|(s, _)| s == symbol)
    }

    /// All symbols in insertion order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.entries.iter().map(|(s, _)| s.clone()).collect()
    }

    /// The initial selection: first symbol in insertion order.
    pub fn first_symbol(&self) -> Option<Symbol> {
        self.entries.first().map(|(s, _)| s.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
