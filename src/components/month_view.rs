use leptos::*;

use crate::format::{format_currency, format_number};
use crate::models::Report;

use super::charts::{BarChart, BarPoint, ProfileStyle};
use super::quality_line::QualityLine;
use super::review_block::{Accent, BlockOptions, ComparisonMode, ReviewBlock};
use super::stat_card::StatCard;

const ACCENT: Accent = Accent {
    border: "#9c27b0",
    header: "#7b1fa2",
    chart: "#7b1fa2",
    band: "#f3e5f5",
    line: "#7b1fa2",
};

fn block_options() -> BlockOptions {
    BlockOptions {
        accent: ACCENT,
        extended_cards: true,
        decimal_totals: false,
        daily_chart: true,
        comparison: ComparisonMode::Uniform,
        heatmap: false,
        profile_analysis: true,
        profile_style: ProfileStyle::Banded,
        profile_title: "Monthly 24-Hour Load Profile (Range & Average)",
        profile_caption: "Peak Event",
    }
}

/// Month-granularity report body. Two comparison levels: the monthly trend
/// at the top, then a week-on-week panel nested inside each month's block.
#[component]
pub fn MonthView(report: Report) -> impl IntoView {
    let summary = report.energy_load_summary;

    let trend: Vec<BarPoint> = summary
        .consumption_summary
        .monthly_consumption
        .iter()
        .map(|point| BarPoint::new(point.month_label.clone(), point.total_consumption_kwh))
        .collect();

    let reviews = report
        .performance_reviews
        .into_iter()
        .map(|review| {
            let title = review.month_label.clone().unwrap_or_default();
            view! { <ReviewBlock review=review title=title options=block_options() /> }
        })
        .collect_view();

    view! {
        <div>
            <h2 class="section-title">"Executive Summary (Monthly Overview)"</h2>
            <QualityLine indicators=report.data_quality_indicators lead=None />

            <div class="card-grid">
                <StatCard
                    label="Total Energy (KWh)"
                    value=format_number(summary.total_energy_consumed)
                />
                <StatCard label="Peak Load" value=format!("{} kVA", format_number(summary.peak_load)) />
                <StatCard label="Total Cost" value=format_currency(summary.total_energy_cost) />
                <StatCard label="Load Factor" value=summary.load_factor.clone() />
            </div>

            <div class="chart-container">
                <h3 class="chart-title">"Monthly Consumption Trend"</h3>
                <BarChart points=trend color=ACCENT.chart unit="KWh" />
            </div>

            <h2 class="section-title">"Monthly Performance Reviews"</h2>
            {reviews}
        </div>
    }
}
