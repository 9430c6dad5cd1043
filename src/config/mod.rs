//! Configuration module for the stockview application.

pub mod market;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use market::MARKET;
pub use plot::PLOT_CONFIG;
