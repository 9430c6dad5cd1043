use eframe::egui::{Button, RichText, ScrollArea, Ui};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::Symbol;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Serialize, Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            SortOrder::Ascending => "⬆",
            SortOrder::Descending => "⬇",
        }
    }
}

/// The sorted row permutation shown to the user. Kept as a pure function so
/// the "activation carries the symbol under the visual row" contract is
/// testable without a UI.
pub fn sorted_rows(symbols: &[Symbol], order: SortOrder) -> Vec<Symbol> {
    let mut rows = symbols.to_vec();
    rows.sort();
    if order == SortOrder::Descending {
        rows.reverse();
    }
    rows
}

#[derive(Debug)]
pub enum TickerListEvent {
    /// The user activated (clicked) a row; payload is that row's symbol.
    SymbolActivated(Symbol),
    /// The user clicked the column header.
    SortToggled(SortOrder),
}

/// Single-column sortable ticker list.
/// State lives in the app; the panel is rebuilt per frame like the other panels.
pub struct TickerListPanel<'a> {
    symbols: &'a [Symbol],
    selected: Option<&'a Symbol>,
    sort_order: SortOrder,
}

impl<'a> TickerListPanel<'a> {
    pub fn new(symbols: &'a [Symbol], selected: Option<&'a Symbol>, sort_order: SortOrder) -> Self {
        Self {
            symbols,
            selected,
            sort_order,
        }
    }

    fn render_header(&self, ui: &mut Ui) -> Option<SortOrder> {
        let header = format!(
            "{} {}",
            UI_TEXT.ticker_column_header,
            self.sort_order.indicator()
        );
        let clicked = ui
            .add_sized(
                [UI_CONFIG.ticker_list_width, 0.0],
                Button::new(RichText::new(header).strong()),
            )
            .clicked();

        clicked.then(|| self.sort_order.toggled())
    }

    fn render_rows(&self, ui: &mut Ui) -> Option<Symbol> {
        let mut activated = None;

        ScrollArea::vertical()
            .id_salt("ticker_list")
            .show(ui, |ui| {
                // Rows follow the sorted permutation, so a click resolves to
                // the symbol the user is actually looking at.
                for symbol in sorted_rows(self.symbols, self.sort_order) {
                    let is_selected = self.selected == Some(&symbol);
                    if ui.selectable_label(is_selected, symbol.as_str()).clicked() {
                        activated = Some(symbol.clone());
                    }
                }
            });

        activated
    }
}

impl Panel for TickerListPanel<'_> {
    type Event = TickerListEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if let Some(new_order) = self.render_header(ui) {
            events.push(TickerListEvent::SortToggled(new_order));
        }
        ui.separator();

        if let Some(symbol) = self.render_rows(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Ticker activated: {}", symbol);
            }
            events.push(TickerListEvent::SymbolActivated(symbol));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> Vec<Symbol> {
        vec![Symbol::new("GOOGL"), Symbol::new("AAPL"), Symbol::new("FB")]
    }

    #[test]
    fn test_default_sort_is_ascending() {
        let rows = sorted_rows(&symbols(), SortOrder::Ascending);
        let names: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["AAPL", "FB", "GOOGL"]);
    }

    #[test]
    fn test_sort_round_trip_restores_row_order() {
        let original = sorted_rows(&symbols(), SortOrder::Ascending);

        let order = SortOrder::Ascending.toggled(); // descending
        let descending = sorted_rows(&symbols(), order);
        assert_ne!(original, descending);

        let back = sorted_rows(&symbols(), order.toggled());
        assert_eq!(original, back);
    }

    #[test]
    fn test_activation_resolves_through_sort_permutation() {
        // Descending puts GOOGL at visual row 0; the event payload must be
        // GOOGL, not whatever sat at row 0 before sorting.
        let rows = sorted_rows(&symbols(), SortOrder::Descending);
        assert_eq!(rows[0], Symbol::new("GOOGL"));
        assert_eq!(rows[1], Symbol::new("FB"));
        assert_eq!(rows[2], Symbol::new("AAPL"));
    }

    #[test]
    fn test_empty_symbol_list_is_valid() {
        assert!(sorted_rows(&[], SortOrder::Ascending).is_empty());
        assert!(sorted_rows(&[], SortOrder::Descending).is_empty());
    }
}
