// Technical indicator computation for the chart's study sub-plot.

use crate::models::OhlcvSeries;

/// Standard MFI lookback.
pub const MFI_PERIOD: usize = 14;

/// Money Flow Index over the full series.
///
/// Pure function: returns one `[x, value]` point per bar after the warm-up
/// period, with `x` being the bar index (the same x-domain the candlesticks
/// use), so the curve aligns with the main plot on a shared time axis.
/// The output is never longer than the input series.
pub fn money_flow_index(series: &OhlcvSeries, period: usize) -> Vec<[f64; 2]> {
    let bars = series.bars();
    if period == 0 || bars.len() <= period {
        return Vec::new();
    }

    // Signed raw money flow per bar transition: positive when the typical
    // price rose against the previous bar, negative when it fell.
    let mut flows: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    for window in bars.windows(2) {
        let prev_tp = window[0].typical_price();
        let tp = window[1].typical_price();
        let raw = tp * window[1].volume;

        if tp > prev_tp {
            flows.push(raw);
        } else if tp < prev_tp {
            flows.push(-raw);
        } else {
            flows.push(0.0);
        }
    }

    let mut points = Vec::with_capacity(bars.len() - period);
    for idx in period..bars.len() {
        // Flows for transitions into bars (idx - period + 1)..=idx
        let window = &flows[idx - period..idx];
        let positive: f64 = window.iter().filter(|f| **f > 0.0).sum();
        let negative: f64 = -window.iter().filter(|f| **f < 0.0).sum::<f64>();

        let mfi = if positive + negative == 0.0 {
            50.0 // Flat window: neither buying nor selling pressure
        } else {
            100.0 * positive / (positive + negative)
        };

        points.push([idx as f64, mfi]);
    }

    points
}
