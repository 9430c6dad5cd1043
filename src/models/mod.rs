// Data model backing the UI
// These modules contain pure logic independent of UI/visualization

pub mod series;

// Re-export key types for convenience
pub use series::{OhlcvSeries, SeriesStore};
