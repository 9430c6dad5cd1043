// Domain types and value objects
pub mod bar;
pub mod symbol;

// Re-export commonly used types
pub use bar::{Bar, Direction};
pub use symbol::Symbol;
