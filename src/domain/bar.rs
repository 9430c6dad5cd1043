use strum_macros::Display;

// Define the Direction enum
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Bullish,
    Bearish,
}

/// One OHLCV bar: a fixed-schema record, ordered by `timestamp_ms` inside a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    // close >= open counts as bullish, matching the chart's up-color rule
    pub fn direction(&self) -> Direction {
        if self.close >= self.open {
            Direction::Bullish
        } else {
            Direction::Bearish
        }
    }

    // Returns the low and high of the bar body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.direction() {
            Direction::Bullish => (self.open, self.close),
            Direction::Bearish => (self.close, self.open),
        }
    }

    /// The "typical price" used by money-flow style indicators.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rule() {
        let up = Bar::new(0, 10.0, 12.0, 9.0, 11.0, 100.0);
        let flat = Bar::new(0, 10.0, 12.0, 9.0, 10.0, 100.0);
        let down = Bar::new(0, 10.0, 12.0, 9.0, 9.5, 100.0);

        assert_eq!(up.direction(), Direction::Bullish);
        // Equal close/open counts as bullish per the up-color rule
        assert_eq!(flat.direction(), Direction::Bullish);
        assert_eq!(down.direction(), Direction::Bearish);
    }

    #[test]
    fn test_body_range_orders_bounds() {
        let down = Bar::new(0, 11.0, 12.0, 9.0, 10.0, 100.0);
        assert_eq!(down.body_range(), (10.0, 11.0));
    }
}
