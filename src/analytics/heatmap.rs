//! Intensity mapping for the day-of-week × hour-of-day consumption grid.
//!
//! The source table is sparse; the output grid is always dense 7×24 so the
//! rendered table keeps its shape no matter how little data came back.

use crate::models::PatternTable;

/// Row order of the rendered grid.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const HOURS_PER_DAY: u8 = 24;

/// Cells above this intensity get light text to stay legible on the
/// saturated background. Constant, never derived from the data.
pub const LIGHT_TEXT_THRESHOLD: f64 = 0.6;

/// One cell of the dense grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub day: &'static str,
    pub hour: u8,
    pub value: f64,
    /// `value / max(table)`, in [0, 1]; 0 when the table maximum is 0.
    pub intensity: f64,
}

/// Expand a sparse pattern table into the dense 7×24 grid, normalizing each
/// cell against the table-wide maximum. Row-major: all 24 hours of Sunday,
/// then Monday, and so on.
pub fn intensity_grid(table: &PatternTable) -> Vec<HeatCell> {
    let max = table
        .values()
        .flat_map(|hours| hours.values())
        .fold(0.0_f64, |acc, value| acc.max(*value));

    let mut cells = Vec::with_capacity(DAY_LABELS.len() * HOURS_PER_DAY as usize);
    for day in DAY_LABELS {
        let hours = table.get(day);
        for hour in 0..HOURS_PER_DAY {
            let value = hours.and_then(|h| h.get(&hour)).copied().unwrap_or(0.0);
            cells.push(HeatCell {
                day,
                hour,
                value,
                intensity: if max > 0.0 { value / max } else { 0.0 },
            });
        }
    }
    cells
}

/// Single-hue color scale: fixed base color, alpha carries the intensity.
pub fn cell_background(intensity: f64) -> String {
    format!("rgba(76, 175, 80, {intensity:.3})")
}

/// Contrasting text treatment once the cell gets dark enough.
pub fn cell_text_color(intensity: f64) -> &'static str {
    if intensity > LIGHT_TEXT_THRESHOLD {
        "white"
    } else {
        "black"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(entries: &[(&str, &[(u8, f64)])]) -> PatternTable {
        entries
            .iter()
            .map(|(day, hours)| ((*day).to_string(), hours.iter().copied().collect()))
            .collect()
    }

    fn cell<'a>(cells: &'a [HeatCell], day: &str, hour: u8) -> &'a HeatCell {
        cells
            .iter()
            .find(|c| c.day == day && c.hour == hour)
            .unwrap()
    }

    #[test]
    fn test_grid_is_dense_regardless_of_sparsity() {
        assert_eq!(intensity_grid(&PatternTable::new()).len(), 168);
        assert_eq!(intensity_grid(&table(&[("Mon", &[(9, 5.0)])])).len(), 168);
    }

    #[test]
    fn test_sparse_table_normalizes_against_global_maximum() {
        let cells = intensity_grid(&table(&[("Mon", &[(9, 5.0), (14, 10.0)])]));
        assert_eq!(cell(&cells, "Mon", 14).intensity, 1.0);
        assert_eq!(cell(&cells, "Mon", 9).intensity, 0.5);
        let zero_cells = cells.iter().filter(|c| c.intensity == 0.0).count();
        assert_eq!(zero_cells, 166);
    }

    #[test]
    fn test_empty_table_has_zero_intensity_everywhere() {
        let cells = intensity_grid(&PatternTable::new());
        assert!(cells.iter().all(|c| c.intensity == 0.0 && c.value == 0.0));
    }

    #[test]
    fn test_intensity_is_monotone_in_value() {
        let cells = intensity_grid(&table(&[
            ("Tue", &[(0, 1.0), (1, 2.0), (2, 3.0)]),
            ("Fri", &[(7, 4.0)]),
        ]));
        assert!(cell(&cells, "Tue", 0).intensity < cell(&cells, "Tue", 1).intensity);
        assert!(cell(&cells, "Tue", 1).intensity < cell(&cells, "Tue", 2).intensity);
        assert_eq!(cell(&cells, "Fri", 7).intensity, 1.0);
    }

    #[test]
    fn test_grid_row_order_matches_day_labels() {
        let cells = intensity_grid(&PatternTable::new());
        assert_eq!(cells[0].day, "Sun");
        assert_eq!(cells[0].hour, 0);
        assert_eq!(cells[23].hour, 23);
        assert_eq!(cells[24].day, "Mon");
        assert_eq!(cells[167].day, "Sat");
        assert_eq!(cells[167].hour, 23);
    }

    #[test]
    fn test_text_flips_to_light_above_threshold() {
        assert_eq!(cell_text_color(0.0), "black");
        assert_eq!(cell_text_color(0.6), "black");
        assert_eq!(cell_text_color(0.61), "white");
        assert_eq!(cell_text_color(1.0), "white");
    }

    #[test]
    fn test_cell_background_carries_intensity_as_alpha() {
        assert_eq!(cell_background(0.0), "rgba(76, 175, 80, 0.000)");
        assert_eq!(cell_background(1.0), "rgba(76, 175, 80, 1.000)");
        assert_eq!(cell_background(0.5), "rgba(76, 175, 80, 0.500)");
    }
}
