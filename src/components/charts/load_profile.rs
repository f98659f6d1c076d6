//! 24-hour load profile chart: optional min/max range band, average line,
//! and a marker at the payload's peak event.

use leptos::*;

use crate::format::format_number;
use crate::models::{HourlyLoadPoint, HourlyProfile};

/// How the profile body is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStyle {
    /// Min/max range band behind the average line.
    Banded,
    /// Filled area under the average line.
    Filled,
}

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 260.0;
const PLOT_BOTTOM: f64 = 232.0;
const PLOT_TOP: f64 = 10.0;

/// Vertical scale ceiling: the largest of the range bounds, the averages,
/// and the peak value, so the marker always lands inside the plot.
fn scale_ceiling(profile: &HourlyProfile) -> f64 {
    profile
        .graph_data
        .iter()
        .map(|p| p.max_range.max(p.average_load))
        .fold(profile.peak_event.value, f64::max)
}

fn x_pos(hour: u8) -> f64 {
    f64::from(hour) / 23.0 * VIEW_WIDTH
}

fn y_pos(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        PLOT_BOTTOM - value / max * (PLOT_BOTTOM - PLOT_TOP)
    } else {
        PLOT_BOTTOM
    }
}

/// `points` attribute for a polyline through one value channel.
fn line_points<F>(points: &[HourlyLoadPoint], value: F, max: f64) -> String
where
    F: Fn(&HourlyLoadPoint) -> f64,
{
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", x_pos(p.hour), y_pos(value(p), max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon between the max-range and min-range channels.
fn band_points(points: &[HourlyLoadPoint], max: f64) -> String {
    let forward = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", x_pos(p.hour), y_pos(p.max_range, max)));
    let back = points
        .iter()
        .rev()
        .map(|p| format!("{:.1},{:.1}", x_pos(p.hour), y_pos(p.min_range, max)));
    forward.chain(back).collect::<Vec<_>>().join(" ")
}

/// Closed polygon between the average line and the baseline.
fn area_points(points: &[HourlyLoadPoint], max: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let Some(last) = points.last() else {
        return String::new();
    };
    let line = line_points(points, |p| p.average_load, max);
    format!(
        "{line} {:.1},{PLOT_BOTTOM} {:.1},{PLOT_BOTTOM}",
        x_pos(last.hour),
        x_pos(first.hour)
    )
}

#[component]
pub fn LoadProfileChart(
    profile: HourlyProfile,
    variant: ProfileStyle,
    fill: &'static str,
    stroke: &'static str,
    /// Caption prefix ahead of the formatted peak value.
    caption: &'static str,
) -> impl IntoView {
    let max = scale_ceiling(&profile);
    let points = profile.graph_data;
    let peak = profile.peak_event;

    let body = match variant {
        ProfileStyle::Banded => view! {
            <polygon points=band_points(&points, max) fill=fill stroke="none" />
            <polyline
                points=line_points(&points, |p| p.average_load, max)
                fill="none"
                stroke=stroke
                stroke-width="2"
            />
        }
        .into_view(),
        ProfileStyle::Filled => view! {
            <polygon points=area_points(&points, max) fill=fill stroke="none" />
            <polyline
                points=line_points(&points, |p| p.average_load, max)
                fill="none"
                stroke=stroke
                stroke-width="2"
            />
        }
        .into_view(),
    };

    let label_y = VIEW_HEIGHT - 6.0;
    let hour_ticks = (0u8..24)
        .step_by(3)
        .map(|hour| {
            view! {
                <text x=x_pos(hour) y=label_y text-anchor="middle" class="axis-label">
                    {hour.to_string()}
                </text>
            }
        })
        .collect_view();

    let grid = [PLOT_BOTTOM * 0.25, PLOT_BOTTOM * 0.5, PLOT_BOTTOM * 0.75]
        .iter()
        .map(|y| {
            let y = *y;
            view! { <line x1="0" y1=y x2=VIEW_WIDTH y2=y class="grid-line" /> }
        })
        .collect_view();

    view! {
        <svg
            class="chart-svg"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            preserveAspectRatio="none"
        >
            {grid}
            {body}
            <circle cx=x_pos(peak.hour) cy=y_pos(peak.value, max) r="6" fill="red" stroke="none" />
            {hour_ticks}
        </svg>
        <div class="chart-caption">
            {caption}
            ": "
            <strong class="peak-value">{format_number(peak.value)} " kVA"</strong>
            " at "
            {peak.formatted_hour}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeakEvent;

    fn flat_profile(load: f64, peak: f64) -> HourlyProfile {
        HourlyProfile {
            graph_data: (0..24)
                .map(|hour| HourlyLoadPoint {
                    hour,
                    average_load: load,
                    min_range: load / 2.0,
                    max_range: load * 1.5,
                })
                .collect(),
            peak_event: PeakEvent {
                hour: 12,
                value: peak,
                formatted_hour: "12 PM".to_string(),
            },
        }
    }

    #[test]
    fn test_x_axis_spans_the_view() {
        assert_eq!(x_pos(0), 0.0);
        assert_eq!(x_pos(23), VIEW_WIDTH);
    }

    #[test]
    fn test_y_axis_maps_zero_to_baseline_and_max_to_top() {
        assert_eq!(y_pos(0.0, 100.0), PLOT_BOTTOM);
        assert_eq!(y_pos(100.0, 100.0), PLOT_TOP);
    }

    #[test]
    fn test_y_axis_guards_zero_maximum() {
        assert_eq!(y_pos(0.0, 0.0), PLOT_BOTTOM);
    }

    #[test]
    fn test_scale_ceiling_includes_the_peak_event() {
        // Peak above every range bound still fits the plot.
        let profile = flat_profile(100.0, 400.0);
        assert_eq!(scale_ceiling(&profile), 400.0);
        let profile = flat_profile(100.0, 10.0);
        assert_eq!(scale_ceiling(&profile), 150.0);
    }

    #[test]
    fn test_line_has_one_point_per_hour() {
        let profile = flat_profile(100.0, 150.0);
        let line = line_points(&profile.graph_data, |p| p.average_load, 150.0);
        assert_eq!(line.split(' ').count(), 24);
    }

    #[test]
    fn test_band_walks_out_and_back() {
        let profile = flat_profile(100.0, 150.0);
        let band = band_points(&profile.graph_data, 150.0);
        assert_eq!(band.split(' ').count(), 48);
    }

    #[test]
    fn test_area_closes_to_the_baseline() {
        let profile = flat_profile(100.0, 150.0);
        let area = area_points(&profile.graph_data, 150.0);
        assert_eq!(area.split(' ').count(), 26);
        assert!(area.ends_with(&format!("0.0,{PLOT_BOTTOM}")));
    }

    #[test]
    fn test_empty_series_renders_no_geometry() {
        assert_eq!(area_points(&[], 100.0), "");
        assert_eq!(band_points(&[], 100.0), "");
    }
}
