use serde::Deserialize;

use super::client::{ApiClient, ApiError};
use crate::models::{Report, ReportRequest};

/// Wire envelope around the analytics response: a status discriminator plus
/// either the report payload or a human-readable message.
#[derive(Debug, Deserialize)]
pub struct ReportEnvelope {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Report>,
}

impl ReportEnvelope {
    /// Collapse the envelope into the report or a service error.
    pub fn into_report(self) -> Result<Report, ApiError> {
        if self.status == "success" {
            self.data.ok_or_else(|| {
                ApiError::Deserialization("success response without report data".to_string())
            })
        } else {
            Err(ApiError::Service(
                self.message
                    .unwrap_or_else(|| "Failed to generate report".to_string()),
            ))
        }
    }
}

impl ApiClient {
    /// Request an analytics report for one dataset/facility combination.
    pub async fn generate_report(
        &self,
        data_id: &str,
        request: &ReportRequest,
    ) -> Result<Report, ApiError> {
        let envelope: ReportEnvelope = self
            .post(
                &format!("/api/v1/data/{data_id}/energy-analytics-reports"),
                request,
            )
            .await?;
        envelope.into_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    #[test]
    fn test_failure_envelope_surfaces_service_message() {
        let json = r#"{"status": "error", "message": "dataset not found"}"#;
        let envelope: ReportEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_report(),
            Err(ApiError::Service("dataset not found".to_string()))
        );
    }

    #[test]
    fn test_failure_envelope_without_message_uses_generic_text() {
        let json = r#"{"status": "error"}"#;
        let envelope: ReportEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_report(),
            Err(ApiError::Service("Failed to generate report".to_string()))
        );
    }

    #[test]
    fn test_success_envelope_without_data_is_a_deserialization_error() {
        let json = r#"{"status": "success"}"#;
        let envelope: ReportEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.into_report(),
            Err(ApiError::Deserialization(_))
        ));
    }

    #[test]
    fn test_success_envelope_yields_the_report() {
        let json = r#"{
            "status": "success",
            "data": {
                "period": "week",
                "facility_info": {
                    "company_name": "Acme Power",
                    "facility_name": "Plant A",
                    "address": "12 Industrial Rd"
                },
                "data_quality_indicators": {
                    "total_values": 672,
                    "total_missing": 3,
                    "percentage_missing": "0.45%",
                    "measurement_interval_minutes": 15
                },
                "energy_load_summary": {
                    "total_energy_consumed": 8200.5,
                    "peak_load": 410.0,
                    "total_energy_cost": 1845000.0,
                    "load_factor": "0.58",
                    "consumption_summary": {
                        "weekly_consumption": [
                            {"week_label": "W1", "total_consumption_kwh": 8200.5}
                        ]
                    }
                },
                "performance_reviews": []
            }
        }"#;
        let envelope: ReportEnvelope = serde_json::from_str(json).unwrap();
        let report = envelope.into_report().unwrap();
        assert_eq!(report.period, Period::Week);
        assert_eq!(report.energy_load_summary.peak_load, 410.0);
    }
}
