use leptos::*;

use crate::format::{format_currency, format_number};
use crate::models::Report;

use super::charts::{BarChart, BarPoint, LoadProfileChart, ProfileStyle};
use super::quality_line::QualityLine;
use super::review_block::{Accent, BlockOptions, ComparisonMode, ReviewBlock};
use super::stat_card::StatCard;

const ACCENT: Accent = Accent {
    border: "#4caf50",
    header: "#2e7d32",
    chart: "#4caf50",
    band: "#c8e6c9",
    line: "#2e7d32",
};

fn block_options() -> BlockOptions {
    BlockOptions {
        accent: ACCENT,
        extended_cards: false,
        decimal_totals: false,
        daily_chart: false,
        comparison: ComparisonMode::None,
        heatmap: false,
        profile_analysis: false,
        profile_style: ProfileStyle::Filled,
        profile_title: "Hourly Load Profile",
        profile_caption: "Peak Load",
    }
}

/// Day-granularity report body: global summary, daily trend, the typical
/// 24-hour profile, then one review block per calendar day.
#[component]
pub fn DayView(report: Report) -> impl IntoView {
    let summary = report.energy_load_summary;

    let trend: Vec<BarPoint> = summary
        .consumption_summary
        .daily_consumption
        .iter()
        .map(|point| {
            BarPoint::new(short_date(&point.formatted_date), point.consumption_kwh)
                .with_tooltip(point.formatted_date.clone())
        })
        .collect();

    let typical = summary.typical_day_profile.clone().map(|profile| {
        view! {
            <div class="chart-container">
                <h3 class="chart-title">"Typical 24-Hour Load Profile"</h3>
                <LoadProfileChart
                    profile=profile
                    variant=ProfileStyle::Banded
                    fill=ACCENT.band
                    stroke=ACCENT.line
                    caption="Peak Event (Max Range)"
                />
            </div>
        }
    });

    let reviews = report
        .performance_reviews
        .into_iter()
        .map(|review| {
            let title = match &review.formatted_date {
                Some(date) => format!("{date} Analysis"),
                None => "Analysis".to_string(),
            };
            view! { <ReviewBlock review=review title=title options=block_options() /> }
        })
        .collect_view();

    // Day summaries arrive in Wh; the card shows kWh.
    let total_kwh = format!("{} KWh", format_number(summary.total_energy_consumed / 1000.0));

    view! {
        <div>
            <h2 class="section-title">"Executive Summary (Global)"</h2>
            <QualityLine indicators=report.data_quality_indicators lead=None />

            <div class="card-grid">
                <StatCard label="Total Energy Consumed" value=total_kwh />
                <StatCard label="Peak Load" value=format!("{} kVA", format_number(summary.peak_load)) />
                <StatCard label="Total Energy Cost" value=format_currency(summary.total_energy_cost) />
                <StatCard label="Load Factor" value=summary.load_factor.clone() />
            </div>

            <div class="chart-container">
                <h3 class="chart-title">"Daily Energy Consumption Trend"</h3>
                <BarChart points=trend color=ACCENT.chart unit="kWh" />
            </div>

            {typical}

            <h2 class="section-title">"Daily Performance Reviews"</h2>
            {reviews}
        </div>
    }
}

/// Weekday prefix of a "Mon, Jan 6" style label.
fn short_date(formatted: &str) -> String {
    formatted
        .split(',')
        .next()
        .unwrap_or(formatted)
        .trim()
        .to_string()
}
