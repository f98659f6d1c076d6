use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::report::HourlyProfile;

/// Day-name → hour-of-day → consumption (kWh). Sparse: absent cells mean
/// no consumption was recorded for that slot.
pub type PatternTable = HashMap<String, HashMap<u8, f64>>;

/// One sub-period's detailed breakdown within a report.
///
/// The wire shape is a superset: the identifying labels and the common
/// sections are shared across periods, while the week/month extensions are
/// simply absent from day reviews. Renderers read only the fields their
/// period guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    #[serde(default)]
    pub formatted_date: Option<String>,
    #[serde(default)]
    pub week_label: Option<String>,
    #[serde(default)]
    pub full_week_label: Option<String>,
    #[serde(default)]
    pub month_label: Option<String>,
    pub summary_cards: SummaryCards,
    /// Absent for the first sub-period in the sequence.
    #[serde(default)]
    pub comparison_with_previous: Option<ComparisonWithPrevious>,
    pub operating_hours: OperatingHours,
    #[serde(default)]
    pub hourly_load_profile: Option<HourlyProfile>,
    // Week and month reviews only.
    #[serde(default)]
    pub daily_consumption_chart: Vec<DailyBarPoint>,
    #[serde(default)]
    pub week_comparison_list: Vec<ComparisonEntry>,
    #[serde(default)]
    pub load_profile_analysis: Option<LoadProfileAnalysis>,
    // Week reviews only.
    #[serde(default)]
    pub consumption_pattern_table: Option<PatternTable>,
}

/// Scalar totals for one sub-period. The average breakdowns only exist for
/// week and month reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCards {
    pub total_energy_consumption: f64,
    pub peak_kva: f64,
    pub energy_cost: f64,
    #[serde(default)]
    pub daily_avg_energy: Option<f64>,
    #[serde(default)]
    pub weekday_avg_energy: Option<f64>,
    #[serde(default)]
    pub weekend_avg_energy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

/// Change against the previous sub-period; `percentage` is preformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonWithPrevious {
    pub direction: Direction,
    pub percentage: String,
}

/// Daytime/nighttime partition of a sub-period's consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub daytime: OperatingWindow,
    pub nighttime: OperatingWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub label: String,
    pub percentage: String,
    pub energy_consumption: f64,
    pub avg_kva: f64,
    pub min_kva: f64,
    pub max_kva: f64,
}

/// One bar of a review's daily consumption chart. Week reviews label their
/// points with `day`, month reviews with `date` (+ `full_date` for the
/// tooltip); only `consumption_kwh` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBarPoint {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub full_date: Option<String>,
    pub consumption_kwh: f64,
}

impl DailyBarPoint {
    /// Axis label for this point, whichever key the period supplied.
    pub fn label(&self) -> &str {
        self.day
            .as_deref()
            .or(self.date.as_deref())
            .unwrap_or_default()
    }

    /// Tooltip label; falls back to the axis label.
    pub fn tooltip_label(&self) -> &str {
        self.full_date.as_deref().unwrap_or_else(|| self.label())
    }
}

/// One labeled magnitude in a week-on-week comparison list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub label: String,
    pub value_kwh: f64,
}

/// Weekday vs weekend load statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadProfileAnalysis {
    pub weekday: ProfileStats,
    pub weekend: ProfileStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}
