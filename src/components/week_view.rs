use leptos::*;

use crate::format::{format_currency, format_decimal, format_number};
use crate::models::Report;

use super::charts::{BarChart, BarPoint, ProfileStyle};
use super::quality_line::QualityLine;
use super::review_block::{Accent, BlockOptions, ComparisonMode, ReviewBlock};
use super::stat_card::StatCard;

const ACCENT: Accent = Accent {
    border: "#2196f3",
    header: "#1976d2",
    chart: "#4caf50",
    band: "#c8e6c9",
    line: "#2e7d32",
};

/// Top-level weekly trend keeps the period color even though the review
/// charts inside the blocks stay green.
const TREND_COLOR: &str = "#2196f3";

fn block_options() -> BlockOptions {
    BlockOptions {
        accent: ACCENT,
        extended_cards: true,
        decimal_totals: true,
        daily_chart: true,
        comparison: ComparisonMode::HighlightCurrent,
        heatmap: true,
        profile_analysis: true,
        profile_style: ProfileStyle::Banded,
        profile_title: "Weekly 24-Hour Load Profile",
        profile_caption: "Peak Event",
    }
}

/// Week-granularity report body: weekly trend plus one review block per
/// week, each with its daily chart, week-on-week comparison and heatmap.
#[component]
pub fn WeekView(report: Report) -> impl IntoView {
    let summary = report.energy_load_summary;
    let week_count = report.performance_reviews.len();

    let trend: Vec<BarPoint> = summary
        .consumption_summary
        .weekly_consumption
        .iter()
        .map(|point| BarPoint::new(point.week_label.clone(), point.total_consumption_kwh))
        .collect();

    let reviews = report
        .performance_reviews
        .into_iter()
        .map(|review| {
            let title = review
                .full_week_label
                .clone()
                .or_else(|| review.week_label.clone())
                .unwrap_or_default();
            view! { <ReviewBlock review=review title=title options=block_options() /> }
        })
        .collect_view();

    view! {
        <div>
            <h2 class="section-title">"Executive Summary (Weekly Overview)"</h2>
            <QualityLine
                indicators=report.data_quality_indicators
                lead=Some(format!("Total Weeks: {week_count} weeks"))
            />

            <div class="card-grid">
                <StatCard
                    label="Total Energy (kWh)"
                    value=format_decimal(summary.total_energy_consumed)
                />
                <StatCard label="Peak Load" value=format!("{} kVA", format_number(summary.peak_load)) />
                <StatCard label="Total Cost" value=format_currency(summary.total_energy_cost) />
                <StatCard label="Load Factor" value=summary.load_factor.clone() />
            </div>

            <div class="chart-container">
                <h3 class="chart-title">"Weekly Consumption Trend"</h3>
                <BarChart points=trend color=TREND_COLOR unit="kWh" />
            </div>

            <h2 class="section-title">"Weekly Performance Reviews"</h2>
            {reviews}
        </div>
    }
}
