//! Relative-share normalization for comparison bar lists.
//!
//! Each review block scales its own list against that list's maximum, so
//! different blocks may use different scales.

use crate::models::ComparisonEntry;

/// One bar of a comparison panel, scaled against the list maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonBar {
    pub label: String,
    pub value_kwh: f64,
    /// Fraction of the list maximum, in [0, 1].
    pub share: f64,
    /// Whether this entry matches the review's own label.
    pub is_current: bool,
}

/// Normalize an ordered list of labeled magnitudes for proportional bars.
///
/// The maximum is computed once up front. A list whose values are all zero
/// produces zero shares rather than dividing by zero.
pub fn comparison_bars(
    entries: &[ComparisonEntry],
    current_label: Option<&str>,
) -> Vec<ComparisonBar> {
    let max = entries
        .iter()
        .map(|entry| entry.value_kwh)
        .fold(0.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| ComparisonBar {
            label: entry.label.clone(),
            value_kwh: entry.value_kwh,
            share: if max > 0.0 { entry.value_kwh / max } else { 0.0 },
            is_current: current_label == Some(entry.label.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(values: &[(&str, f64)]) -> Vec<ComparisonEntry> {
        values
            .iter()
            .map(|(label, value)| ComparisonEntry {
                label: (*label).to_string(),
                value_kwh: *value,
            })
            .collect()
    }

    #[test]
    fn test_shares_are_fractions_of_the_maximum() {
        let bars = comparison_bars(&entries(&[("A", 40.0), ("B", 100.0), ("C", 10.0)]), None);
        let shares: Vec<f64> = bars.iter().map(|b| b.share).collect();
        assert_eq!(shares, vec![0.4, 1.0, 0.1]);
    }

    #[test]
    fn test_maximum_entry_share_is_exactly_one() {
        let bars = comparison_bars(&entries(&[("W1", 12.5), ("W2", 80.0), ("W3", 79.9)]), None);
        assert_eq!(bars[1].share, 1.0);
    }

    #[test]
    fn test_all_zero_values_yield_zero_shares() {
        let bars = comparison_bars(&entries(&[("A", 0.0), ("B", 0.0)]), None);
        assert!(bars.iter().all(|b| b.share == 0.0));
        assert!(bars.iter().all(|b| b.share.is_finite()));
    }

    #[test]
    fn test_current_label_is_flagged() {
        let bars = comparison_bars(&entries(&[("W1", 10.0), ("W2", 20.0)]), Some("W2"));
        assert!(!bars[0].is_current);
        assert!(bars[1].is_current);
    }

    #[test]
    fn test_order_is_preserved() {
        let bars = comparison_bars(&entries(&[("W3", 5.0), ("W1", 9.0), ("W2", 7.0)]), None);
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["W3", "W1", "W2"]);
    }
}
