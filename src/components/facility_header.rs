use leptos::*;

use crate::models::{FacilityInfo, Period};

/// Identifying metadata shared by all report types. Renders for every
/// successful report, including unrecognized periods.
#[component]
pub fn FacilityHeader(info: FacilityInfo, period: Period) -> impl IntoView {
    view! {
        <div class="facility-header">
            <div class="facility-title">
                <h2>{info.facility_name}</h2>
                <div class="facility-meta">
                    <strong>{info.company_name}</strong>
                    " • "
                    {info.address}
                </div>
            </div>
            <div class="facility-badge">{period.as_str()} " Report"</div>
        </div>
    }
}
