use serde::{Deserialize, Serialize};

/// Body of the report-generation request. The dataset id travels in the
/// URL path, everything else in the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub company_name: String,
    pub facility_name: String,
    pub address: String,
    pub filename: String,
    pub tariff_rate: f64,
}
