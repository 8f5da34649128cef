//! Views Module - Presentation models
//!
//! Each view owns its ranked data and disclosure state exclusively and is
//! rebuilt from scratch for every backend response.

pub mod shap;
pub mod importance;
pub mod breakdown;

pub use shap::{ShapBar, ShapDetail, ShapView};
pub use importance::{ImportanceBar, ImportanceDetail, ImportanceView};
pub use breakdown::{BreakdownRow, BreakdownSlice, BreakdownView};

use crate::constants::LABEL_MAX_LEN;

/// `0.1234` -> `"12.34%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Cut long labels for chart axes: first 20 chars + "...".
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_LEN {
        let head: String = name.chars().take(LABEL_MAX_LEN).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.1234), "12.34%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("P-VALUE"), "P-VALUE");
        assert_eq!(truncate_label("STRONGEST SNP-RISK ALLELE"), "STRONGEST SNP-RISK A...");
        assert_eq!(truncate_label("RISK ALLELE FREQUENCY"), "RISK ALLELE FREQUENC...");
    }
}
