//! Shared per-sub-period review template.
//!
//! The three period layouts differ only in which sections they include and
//! the colors they use, so one component takes the review plus an option
//! set instead of three near-copies of the same markup.

use leptos::*;

use crate::format::{format_currency, format_decimal, format_number};
use crate::models::{Direction, PerformanceReview, SummaryCards};

use super::charts::{BarChart, BarPoint, LoadProfileChart, ProfileStyle};
use super::comparison_panel::ComparisonPanel;
use super::heatmap_grid::ConsumptionHeatmap;
use super::op_hours::{OperatingHoursGrid, ProfileAnalysisGrid};
use super::stat_card::StatCard;

/// Accent colors for one period's review blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub border: &'static str,
    pub header: &'static str,
    pub chart: &'static str,
    pub band: &'static str,
    pub line: &'static str,
}

/// Comparison panel treatment within a review block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMode {
    /// No comparison panel (day reviews have no finer sub-unit).
    None,
    /// Accent for the review's own entry, neutral for the rest.
    HighlightCurrent,
    /// One accent color for every bar.
    Uniform,
}

/// Which sections a period's review blocks include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockOptions {
    pub accent: Accent,
    /// Six summary cards instead of three.
    pub extended_cards: bool,
    /// Two-decimal formatting for energy totals (week reports).
    pub decimal_totals: bool,
    pub daily_chart: bool,
    pub comparison: ComparisonMode,
    pub heatmap: bool,
    pub profile_analysis: bool,
    pub profile_style: ProfileStyle,
    pub profile_title: &'static str,
    pub profile_caption: &'static str,
}

#[component]
pub fn ReviewBlock(
    review: PerformanceReview,
    title: String,
    options: BlockOptions,
) -> impl IntoView {
    let accent = options.accent;

    let badge = review.comparison_with_previous.as_ref().map(|cmp| {
        let arrow = match cmp.direction {
            Direction::Increase => "▲",
            Direction::Decrease => "▼",
        };
        view! {
            <span class="comparison-badge">{arrow} " " {cmp.percentage.clone()} " vs prev"</span>
        }
    });

    let cards = summary_card_grid(&review.summary_cards, &options);

    let show_charts_row = options.daily_chart || options.comparison != ComparisonMode::None;
    let charts_row = show_charts_row.then(|| {
        let daily = options.daily_chart.then(|| {
            let points: Vec<BarPoint> = review
                .daily_consumption_chart
                .iter()
                .map(|p| BarPoint::new(p.label(), p.consumption_kwh).with_tooltip(p.tooltip_label()))
                .collect();
            view! {
                <div class="chart-container chart-half">
                    <h4 class="chart-title">"Daily Consumption (kWh)"</h4>
                    <BarChart points=points color=accent.chart unit="kWh" />
                </div>
            }
        });

        let comparison = match options.comparison {
            ComparisonMode::None => None,
            ComparisonMode::HighlightCurrent => Some(view! {
                <div class="chart-container chart-side">
                    <h4 class="chart-title">"Comparison (kWh)"</h4>
                    <ComparisonPanel
                        entries=review.week_comparison_list.clone()
                        current_label=review.week_label.clone()
                        accent=accent.chart
                    />
                </div>
            }),
            ComparisonMode::Uniform => Some(view! {
                <div class="chart-container chart-side">
                    <h4 class="chart-title">"Week-on-Week (KWh)"</h4>
                    <ComparisonPanel
                        entries=review.week_comparison_list.clone()
                        current_label=None
                        accent=accent.chart
                    />
                </div>
            }),
        };

        view! { <div class="review-charts">{daily} {comparison}</div> }
    });

    let profile = review.hourly_load_profile.clone().map(|profile| {
        view! {
            <div class="chart-container">
                <h4 class="chart-title">{options.profile_title}</h4>
                <LoadProfileChart
                    profile=profile
                    variant=options.profile_style
                    fill=accent.band
                    stroke=accent.line
                    caption=options.profile_caption
                />
            </div>
        }
    });

    let heatmap = options
        .heatmap
        .then(|| review.consumption_pattern_table.clone())
        .flatten()
        .map(|table| {
            view! {
                <div class="chart-container chart-auto">
                    <h4 class="chart-title">"Daily Consumption Heatmap"</h4>
                    <ConsumptionHeatmap table=table />
                </div>
            }
        });

    let analysis = options
        .profile_analysis
        .then(|| review.load_profile_analysis.clone())
        .flatten()
        .map(|analysis| view! { <ProfileAnalysisGrid analysis=analysis /> });

    view! {
        <div class="daily-review" style=format!("border-left: 5px solid {}", accent.border)>
            <div class="daily-header" style=format!("background: {}", accent.header)>
                <h3>{title}</h3>
                {badge}
            </div>
            {cards}
            {charts_row}
            {profile}
            {heatmap}
            {analysis}
            <OperatingHoursGrid
                hours=review.operating_hours.clone()
                decimal_consumption=options.decimal_totals
            />
        </div>
    }
}

fn summary_card_grid(cards: &SummaryCards, options: &BlockOptions) -> View {
    let energy: fn(f64) -> String = if options.decimal_totals {
        format_decimal
    } else {
        format_number
    };

    if options.extended_cards {
        view! {
            <div class="card-grid card-grid-compact">
                <StatCard label="Total kWh" value=energy(cards.total_energy_consumption) />
                <StatCard label="Peak kVA" value=format_number(cards.peak_kva) />
                <StatCard label="Cost" value=format_currency(cards.energy_cost) />
                <StatCard label="Daily Avg" value=avg_card(cards.daily_avg_energy) />
                <StatCard label="Weekday Avg" value=avg_card(cards.weekday_avg_energy) />
                <StatCard label="Weekend Avg" value=avg_card(cards.weekend_avg_energy) />
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="card-grid">
                <StatCard
                    label="Daily Total"
                    value=format!("{} kWh", format_number(cards.total_energy_consumption))
                />
                <StatCard
                    label="Daily Peak"
                    value=format!("{} kVA", format_number(cards.peak_kva))
                />
                <StatCard label="Daily Cost" value=format_currency(cards.energy_cost) />
            </div>
        }
        .into_view()
    }
}

/// Average cards are only supplied for week and month reviews.
fn avg_card(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_card_falls_back_when_absent() {
        assert_eq!(avg_card(Some(1234.5)), "1,234.50");
        assert_eq!(avg_card(None), "N/A");
    }
}
