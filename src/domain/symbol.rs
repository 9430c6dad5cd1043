use serde::{Deserialize, Serialize};

/// A short uppercase ticker identifier (e.g. "AAPL").
/// Construction normalizes the raw text; the value is immutable afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(raw: &str) -> Self {
        Symbol(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
