use eframe::egui::{self, Align, Layout, Stroke, Ui};
use egui_plot::{AxisHints, BoxElem, BoxPlot, BoxSpread, Corner, Legend, Line, Plot, PlotPoints};
use itertools::Itertools;

use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Direction, Symbol};
use crate::indicators::{MFI_PERIOD, money_flow_index};
use crate::models::OhlcvSeries;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::symbol_heading;

/// Per-symbol derived data, rebuilt when the selection changes.
#[derive(Clone)]
pub struct ChartCache {
    pub symbol: Symbol,
    pub indicator: Vec<[f64; 2]>,
    pub timestamps_ms: Vec<i64>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_max: f64,
}

/// The candlestick chart plus its indicator sub-plot.
///
/// egui is immediate-mode, so every frame rebuilds the plot items from the
/// series that is passed in. That makes `show` idempotent and re-entrant by
/// construction: there is never a stale candlestick set to clear.
#[derive(Default)]
pub struct ChartView {
    cache: Option<ChartCache>,
}

impl ChartView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn show(&mut self, ui: &mut Ui, symbol: &Symbol, series: &OhlcvSeries) {
        // The symbol label updates whether or not there is data to plot
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(symbol_heading(symbol.as_str()));
        });

        if series.is_empty() {
            ui.label(UI_TEXT.empty_series_hint);
            return;
        }

        let cache = self.cached_for(symbol, series);
        let candles = candle_elems(series);

        let main_height =
            (ui.available_height() - PLOT_CONFIG.study_height - 24.0).max(120.0);
        let link_group = egui::Id::new("stock_chart_x");

        let (y_min, y_max, x_max) = (cache.y_min, cache.y_max, cache.x_max);
        Plot::new("price_plot")
            .height(main_height)
            .link_axis(link_group, [true, false])
            .show_grid(PLOT_CONFIG.show_grid)
            .custom_x_axes(vec![date_axis(cache.timestamps_ms.clone())])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-1.0..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);
                plot_ui.box_plot(BoxPlot::new(symbol.as_str(), candles));
            });

        let indicator = cache.indicator.clone();
        Plot::new("study_plot")
            .height(PLOT_CONFIG.study_height)
            .link_axis(link_group, [true, false])
            .show_grid(PLOT_CONFIG.show_grid)
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![date_axis(cache.timestamps_ms.clone())])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-1.0..=x_max);
                plot_ui.set_plot_bounds_y(0.0..=100.0);
                plot_ui.line(
                    Line::new(UI_TEXT.indicator_legend, PlotPoints::new(indicator))
                        .color(PLOT_CONFIG.indicator_color)
                        .width(PLOT_CONFIG.line_width),
                );
            });
    }

    fn cached_for(&mut self, symbol: &Symbol, series: &OhlcvSeries) -> ChartCache {
        if let Some(cache) = &self.cache {
            if &cache.symbol == symbol {
                return cache.clone();
            }
        }

        let cache = build_chart_cache(symbol.clone(), series);
        self.cache = Some(cache.clone());
        cache
    }
}

pub fn build_chart_cache(symbol: Symbol, series: &OhlcvSeries) -> ChartCache {
    let (y_min, y_max) = price_bounds(series);
    ChartCache {
        symbol,
        indicator: money_flow_index(series, MFI_PERIOD),
        timestamps_ms: series.bars().iter().map(|bar| bar.timestamp_ms).collect(),
        y_min,
        y_max,
        x_max: series.len() as f64,
    }
}

/// One box-and-whisker element per bar: body spans open/close, whiskers span
/// low/high, colored by direction.
pub fn candle_elems(series: &OhlcvSeries) -> Vec<BoxElem> {
    series
        .bars()
        .iter()
        .enumerate()
        .map(|(idx, bar)| {
            let (body_low, body_high) = bar.body_range();
            let color = match bar.direction() {
                Direction::Bullish => PLOT_CONFIG.bull_color,
                Direction::Bearish => PLOT_CONFIG.bear_color,
            };
            let spread = BoxSpread::new(
                bar.low,
                body_low,
                (bar.open + bar.close) / 2.0,
                body_high,
                bar.high,
            );

            BoxElem::new(idx as f64, spread)
                .fill(color)
                .stroke(Stroke::new(PLOT_CONFIG.line_width, PLOT_CONFIG.wick_color))
                .whisker_width(PLOT_CONFIG.candle_whisker_width)
                .box_width(PLOT_CONFIG.candle_box_width)
        })
        .collect()
}

fn price_bounds(series: &OhlcvSeries) -> (f64, f64) {
    let minmax = series
        .bars()
        .iter()
        .flat_map(|bar| [bar.low, bar.high])
        .minmax_by(|a, b| a.total_cmp(b));

    match minmax.into_option() {
        Some((min, max)) => {
            let padding = (max - min).max(f64::EPSILON) * PLOT_CONFIG.y_padding_pct;
            (min - padding, max + padding)
        }
        None => (0.0, 1.0),
    }
}

fn date_axis(timestamps_ms: Vec<i64>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round();
        if idx < 0.0 {
            return String::new();
        }
        match timestamps_ms.get(idx as usize) {
            Some(ts) => crate::utils::time_utils::epoch_ms_to_utc(*ts),
            None => String::new(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;
    use crate::models::OhlcvSeries;

    fn ten_bar_series() -> OhlcvSeries {
        let bars = (0..10)
            .map(|i| {
                let open = 100.0 + i as f64;
                // Alternate up and down closes
                let close = if i % 2 == 0 { open + 1.0 } else { open - 1.0 };
                Bar::new(i as i64 * 86_400_000, open, open + 2.0, open - 2.0, close, 1000.0)
            })
            .collect();
        OhlcvSeries::from_bars(bars)
    }

    #[test]
    fn test_one_candle_per_bar() {
        let series = ten_bar_series();
        assert_eq!(candle_elems(&series).len(), 10);
    }

    #[test]
    fn test_empty_series_draws_no_candles() {
        assert!(candle_elems(&OhlcvSeries::default()).is_empty());
    }

    #[test]
    fn test_candles_are_colored_by_direction() {
        let elems = candle_elems(&ten_bar_series());
        assert_eq!(elems[0].fill, PLOT_CONFIG.bull_color);
        assert_eq!(elems[1].fill, PLOT_CONFIG.bear_color);
    }

    #[test]
    fn test_candle_spread_matches_bar() {
        let series = ten_bar_series();
        let elems = candle_elems(&series);
        let bar = &series.bars()[1]; // bearish: open 101, close 100

        assert_eq!(elems[1].spread.lower_whisker, bar.low);
        assert_eq!(elems[1].spread.quartile1, bar.close);
        assert_eq!(elems[1].spread.quartile3, bar.open);
        assert_eq!(elems[1].spread.upper_whisker, bar.high);
    }

    #[test]
    fn test_cache_rebuild_replaces_previous_symbol() {
        // Switching symbols must leave only the new symbol's derived data
        let mut view = ChartView::new();
        let series_a = ten_bar_series();
        let series_b = OhlcvSeries::default();

        let first = view.cached_for(&Symbol::new("AAPL"), &series_a);
        assert_eq!(first.symbol, Symbol::new("AAPL"));
        assert_eq!(first.timestamps_ms.len(), 10);

        let second = view.cached_for(&Symbol::new("GOOGL"), &series_b);
        assert_eq!(second.symbol, Symbol::new("GOOGL"));
        assert!(second.timestamps_ms.is_empty());

        // Repeated call with the same symbol is a no-op (idempotent render input)
        let third = view.cached_for(&Symbol::new("GOOGL"), &series_b);
        assert_eq!(third.symbol, Symbol::new("GOOGL"));
        assert!(third.timestamps_ms.is_empty());
    }

    #[test]
    fn test_indicator_never_outnumbers_candles() {
        let series = ten_bar_series();
        let cache = build_chart_cache(Symbol::new("AAPL"), &series);
        assert!(cache.indicator.len() <= series.len());
    }

    #[test]
    fn test_price_bounds_cover_all_bars() {
        let series = ten_bar_series();
        let (y_min, y_max) = price_bounds(&series);
        for bar in series.bars() {
            assert!(bar.low >= y_min && bar.high <= y_max);
        }
    }
}
