//! Human-readable byte sizes.

use std::fmt;

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// A byte count scaled by powers of 1024 into the largest unit that keeps the
/// value at or above 1. Renders as e.g. `1.46 KB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedSize {
    pub value: f64,
    pub unit: &'static str,
}

impl FormattedSize {
    pub fn from_bytes(bytes: u64) -> Self {
        let mut value = bytes as f64;
        let mut idx = 0;
        while value >= 1024.0 && idx < UNITS.len() - 1 {
            value /= 1024.0;
            idx += 1;
        }
        Self {
            value,
            unit: UNITS[idx],
        }
    }
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2} {}", self.value, self.unit))
    }
}

pub fn format_size(bytes: u64) -> String {
    FormattedSize::from_bytes(bytes).to_string()
}
