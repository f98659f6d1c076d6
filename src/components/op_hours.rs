use leptos::*;

use crate::format::{format_decimal, format_number};
use crate::models::{LoadProfileAnalysis, OperatingHours, OperatingWindow, ProfileStats};

/// "Avg | Min | Max" kVA line for one operating window.
fn kva_summary(window: &OperatingWindow) -> String {
    format!(
        "Avg: {} | Min: {} | Max: {} kVA",
        format_number(window.avg_kva),
        format_number(window.min_kva),
        format_number(window.max_kva)
    )
}

fn stats_summary(stats: &ProfileStats) -> String {
    format!(
        "Avg: {} | Min: {} | Max: {} kVA",
        format_number(stats.average),
        format_number(stats.min),
        format_number(stats.max)
    )
}

/// Daytime/nighttime consumption split cards.
#[component]
pub fn OperatingHoursGrid(hours: OperatingHours, decimal_consumption: bool) -> impl IntoView {
    view! {
        <div class="op-hours-grid">
            <OpWindowCard
                window=hours.daytime
                night=false
                decimal_consumption=decimal_consumption
            />
            <OpWindowCard
                window=hours.nighttime
                night=true
                decimal_consumption=decimal_consumption
            />
        </div>
    }
}

#[component]
fn OpWindowCard(window: OperatingWindow, night: bool, decimal_consumption: bool) -> impl IntoView {
    let consumption = if decimal_consumption {
        format_decimal(window.energy_consumption)
    } else {
        format_number(window.energy_consumption)
    };
    let details = kva_summary(&window);
    let card_class = if night { "op-card night" } else { "op-card" };

    view! {
        <div class=card_class>
            <h4>{window.label}</h4>
            <div class="op-percent">{window.percentage}</div>
            <div class="op-details">
                "Consumption: " {consumption} " kWh"
                <br />
                {details}
            </div>
        </div>
    }
}

/// Weekday/weekend load statistics cards.
#[component]
pub fn ProfileAnalysisGrid(analysis: LoadProfileAnalysis) -> impl IntoView {
    view! {
        <div class="op-hours-grid">
            <div class="op-card">
                <h4>"Weekdays"</h4>
                <div class="op-details op-details-wide">{stats_summary(&analysis.weekday)}</div>
            </div>
            <div class="op-card">
                <h4>"Weekends"</h4>
                <div class="op-details op-details-wide">{stats_summary(&analysis.weekend)}</div>
            </div>
        </div>
    }
}
