use serde::{Deserialize, Serialize};

use super::review::PerformanceReview;

/// Aggregation granularity of a report.
///
/// The service may grow new granularities over time; anything outside the
/// three supported values deserializes as `Unknown`, which renders the
/// facility header but no period body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    #[serde(other)]
    Unknown,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Unknown => "unknown",
        }
    }
}

/// Full analytics payload returned for one dataset/facility combination.
///
/// An immutable snapshot owned by the current render cycle; it is replaced
/// wholesale on each successful request, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub period: Period,
    pub facility_info: FacilityInfo,
    pub data_quality_indicators: DataQualityIndicators,
    pub energy_load_summary: EnergyLoadSummary,
    /// One review per calendar sub-period, in chronological payload order.
    #[serde(default)]
    pub performance_reviews: Vec<PerformanceReview>,
}

/// Static identifying metadata, present regardless of period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub company_name: String,
    pub facility_name: String,
    pub address: String,
}

/// Measurement provenance metadata, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityIndicators {
    pub total_values: u64,
    pub total_missing: u64,
    pub percentage_missing: String,
    // The service emits this key misspelled; accept both spellings.
    #[serde(alias = "measurment_interval_minutes")]
    pub measurement_interval_minutes: u32,
}

/// Aggregate totals plus the period-specific trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLoadSummary {
    pub total_energy_consumed: f64,
    pub peak_load: f64,
    pub total_energy_cost: f64,
    pub load_factor: String,
    pub consumption_summary: ConsumptionSummary,
    /// Hourly load profile averaged over all days; day reports only.
    #[serde(default)]
    pub typical_day_profile: Option<HourlyProfile>,
}

/// Trend series for the top-level consumption chart. Only the array
/// matching the report period is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSummary {
    #[serde(default)]
    pub daily_consumption: Vec<DailyTrendPoint>,
    #[serde(default)]
    pub weekly_consumption: Vec<WeeklyTrendPoint>,
    #[serde(default)]
    pub monthly_consumption: Vec<MonthlyTrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub formatted_date: String,
    pub consumption_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    pub week_label: String,
    pub total_consumption_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month_label: String,
    pub total_consumption_kwh: f64,
}

/// 24-point load profile by hour-of-day, plus the marked peak event.
///
/// Review-level profiles carry their points under `graph_data`; the
/// typical-day profile uses `hourly_data`. Both land here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyProfile {
    #[serde(alias = "hourly_data")]
    pub graph_data: Vec<HourlyLoadPoint>,
    pub peak_event: PeakEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyLoadPoint {
    pub hour: u8,
    pub average_load: f64,
    #[serde(default)]
    pub min_range: f64,
    #[serde(default)]
    pub max_range: f64,
}

/// Pre-computed peak; the renderer trusts it and only places the marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakEvent {
    pub hour: u8,
    pub value: f64,
    pub formatted_hour: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_deserializes_known_values() {
        assert_eq!(serde_json::from_str::<Period>(r#""day""#).unwrap(), Period::Day);
        assert_eq!(serde_json::from_str::<Period>(r#""week""#).unwrap(), Period::Week);
        assert_eq!(serde_json::from_str::<Period>(r#""month""#).unwrap(), Period::Month);
    }

    #[test]
    fn test_period_unrecognized_value_falls_through_to_unknown() {
        assert_eq!(
            serde_json::from_str::<Period>(r#""quarter""#).unwrap(),
            Period::Unknown
        );
        assert_eq!(serde_json::from_str::<Period>(r#""""#).unwrap(), Period::Unknown);
    }

    #[test]
    fn test_quality_indicators_accept_misspelled_interval_key() {
        let json = r#"{
            "total_values": 2976,
            "total_missing": 12,
            "percentage_missing": "0.40%",
            "measurment_interval_minutes": 15
        }"#;
        let dq: DataQualityIndicators = serde_json::from_str(json).unwrap();
        assert_eq!(dq.measurement_interval_minutes, 15);
    }

    #[test]
    fn test_hourly_profile_accepts_both_point_keys() {
        let review_style = r#"{
            "graph_data": [{"hour": 0, "average_load": 10.0, "min_range": 5.0, "max_range": 20.0}],
            "peak_event": {"hour": 0, "value": 20.0, "formatted_hour": "12 AM"}
        }"#;
        let typical_style = r#"{
            "hourly_data": [{"hour": 0, "average_load": 10.0, "min_range": 5.0, "max_range": 20.0}],
            "peak_event": {"hour": 0, "value": 20.0, "formatted_hour": "12 AM"}
        }"#;
        let a: HourlyProfile = serde_json::from_str(review_style).unwrap();
        let b: HourlyProfile = serde_json::from_str(typical_style).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_report_deserializes() {
        let json = r#"{
            "period": "day",
            "facility_info": {
                "company_name": "Acme Power",
                "facility_name": "Plant A",
                "address": "12 Industrial Rd"
            },
            "data_quality_indicators": {
                "total_values": 96,
                "total_missing": 0,
                "percentage_missing": "0.00%",
                "measurement_interval_minutes": 15
            },
            "energy_load_summary": {
                "total_energy_consumed": 1000000.0,
                "peak_load": 420.0,
                "total_energy_cost": 150000.0,
                "load_factor": "0.62",
                "consumption_summary": {
                    "daily_consumption": [
                        {"formatted_date": "Mon, Jan 6", "consumption_kwh": 980.0}
                    ]
                },
                "typical_day_profile": {
                    "hourly_data": [
                        {"hour": 0, "average_load": 120.0, "min_range": 90.0, "max_range": 150.0}
                    ],
                    "peak_event": {"hour": 0, "value": 150.0, "formatted_hour": "12 AM"}
                }
            },
            "performance_reviews": []
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.period, Period::Day);
        assert_eq!(report.facility_info.facility_name, "Plant A");
        assert!(report.performance_reviews.is_empty());
        assert!(report.energy_load_summary.typical_day_profile.is_some());
        assert_eq!(
            report.energy_load_summary.consumption_summary.daily_consumption[0].consumption_kwh,
            980.0
        );
    }
}
