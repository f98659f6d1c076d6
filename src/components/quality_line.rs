use leptos::*;

use crate::models::DataQualityIndicators;

/// Measurement provenance line under the executive summary title,
/// rendered verbatim from the payload.
#[component]
pub fn QualityLine(
    indicators: DataQualityIndicators,
    /// Extra leading item, e.g. the week count.
    lead: Option<String>,
) -> impl IntoView {
    view! {
        <div class="quality-line">
            {lead.map(|text| view! { <span>{text} " | "</span> })}
            "Total Values: " {indicators.total_values} " readings | "
            "Missing Values: " {indicators.total_missing} " readings | "
            "Percentage Missing: " {indicators.percentage_missing} " | "
            "Interval: " {indicators.measurement_interval_minutes} " mins"
        </div>
    }
}
