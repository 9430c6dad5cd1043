use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::domain::Symbol;
use crate::models::SeriesStore;
use crate::ui::chart_view::ChartView;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ticker_list::{Panel, SortOrder, TickerListEvent, TickerListPanel};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The composite pane: owns the series store and the selection state, wires
/// ticker-list activation events to chart redraws, and lays the two views out
/// side by side.
#[derive(Serialize, Deserialize)]
pub struct StockViewApp {
    /// Current selection; set to the store's first symbol at startup and
    /// never cleared afterwards (only replaced by activations).
    selected: Option<Symbol>,
    sort_order: SortOrder,

    #[serde(skip)]
    store: SeriesStore,
    #[serde(skip)]
    chart: ChartView,
}

impl StockViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, store: SeriesStore) -> Self {
        // Attempt to load the persisted state (sort order, last selection)
        let mut app: StockViewApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(|| {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted UI state found. Creating anew.");
                }
                StockViewApp {
                    selected: None,
                    sort_order: SortOrder::default(),
                    store: SeriesStore::default(),
                    chart: ChartView::default(),
                }
            });

        app.store = store;

        // A persisted selection can reference a symbol that is no longer
        // configured; fall back to the store's first key either way.
        let selection_valid = app
            .selected
            .as_ref()
            .map(|symbol| app.store.contains(symbol))
            .unwrap_or(false);
        if !selection_valid {
            app.selected = app.store.first_symbol();
        }

        app
    }

    fn handle_symbol_activation(&mut self, symbol: Symbol) {
        if self.selected.as_ref() == Some(&symbol) {
            return;
        }

        // The list view can only emit symbols present in the store; a miss
        // here is a bug, not a runtime condition to recover from.
        debug_assert!(self.store.contains(&symbol), "activated unknown symbol");
        if !self.store.contains(&symbol) {
            log::error!("Invariant violated: activated symbol {} has no series", symbol);
            return;
        }

        self.selected = Some(symbol);
    }

    fn render_ticker_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(UI_CONFIG.colors.side_panel);
        egui::SidePanel::left("ticker_list_panel")
            .frame(frame)
            .resizable(false)
            .exact_width(UI_CONFIG.ticker_list_width)
            .show(ctx, |ui| {
                let symbols = self.store.symbols();
                let mut panel =
                    TickerListPanel::new(&symbols, self.selected.as_ref(), self.sort_order);
                let events = panel.render(ui);

                for event in events {
                    match event {
                        TickerListEvent::SymbolActivated(symbol) => {
                            self.handle_symbol_activation(symbol);
                        }
                        TickerListEvent::SortToggled(new_order) => {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Ticker list sort order: {}", new_order);
                            }
                            self.sort_order = new_order;
                        }
                    }
                }
            });
    }

    fn render_chart_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(UI_CONFIG.colors.central_panel);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let Some(symbol) = self.selected.clone() else {
                // Only possible with an empty configured symbol list
                ui.centered_and_justified(|ui| {
                    ui.label(UI_TEXT.empty_store_hint);
                });
                return;
            };

            match self.store.get(&symbol) {
                Some(series) => self.chart.show(ui, &symbol, series),
                None => {
                    debug_assert!(false, "selected symbol lost its series");
                    log::error!("Invariant violated: no series for selected symbol {}", symbol);
                }
            }
        });
    }
}

impl eframe::App for StockViewApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_ticker_panel(ctx);
        self.render_chart_panel(ctx);
    }
}
