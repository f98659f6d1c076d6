//! Minimal SVG bar chart used by the consumption trend panels.

use leptos::*;

use crate::format::format_number;

/// One labeled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    /// Tooltip label; defaults to the axis label.
    pub tooltip: String,
    pub value: f64,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        let label = label.into();
        Self {
            tooltip: label.clone(),
            label,
            value,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 260.0;
const PLOT_HEIGHT: f64 = 228.0;
/// Fraction of each bar slot left as spacing.
const BAR_GAP_RATIO: f64 = 0.2;
/// Axis labels are thinned once the series grows past this.
const MAX_AXIS_LABELS: usize = 16;

/// Position and size of one bar within the plot, scaled to the series
/// maximum. A zero maximum collapses every bar to zero height.
fn bar_geometry(index: usize, count: usize, value: f64, max: f64) -> (f64, f64, f64, f64) {
    let slot = VIEW_WIDTH / count as f64;
    let width = slot * (1.0 - BAR_GAP_RATIO);
    let x = index as f64 * slot + (slot - width) / 2.0;
    let height = if max > 0.0 {
        value / max * PLOT_HEIGHT
    } else {
        0.0
    };
    (x, PLOT_HEIGHT - height, width, height)
}

/// Render every n-th axis label so long series stay readable.
fn label_step(count: usize) -> usize {
    count.div_ceil(MAX_AXIS_LABELS).max(1)
}

#[component]
pub fn BarChart(points: Vec<BarPoint>, color: &'static str, unit: &'static str) -> impl IntoView {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let count = points.len().max(1);
    let step = label_step(count);
    let slot = VIEW_WIDTH / count as f64;

    let label_y = VIEW_HEIGHT - 6.0;
    let grid_ys = [PLOT_HEIGHT * 0.25, PLOT_HEIGHT * 0.5, PLOT_HEIGHT * 0.75];

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let (x, y, width, height) = bar_geometry(i, count, point.value, max);
            let tooltip = format!("{}: {} {}", point.tooltip, format_number(point.value), unit);
            view! {
                <rect x=x y=y width=width height=height fill=color rx="2">
                    <title>{tooltip}</title>
                </rect>
            }
        })
        .collect_view();

    let labels = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, point)| {
            let x = i as f64 * slot + slot / 2.0;
            view! {
                <text x=x y=label_y text-anchor="middle" class="axis-label">
                    {point.label.clone()}
                </text>
            }
        })
        .collect_view();

    let grid = grid_ys
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
            {bars}
            {labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_spans_the_plot() {
        let (_, y, _, height) = bar_geometry(0, 3, 100.0, 100.0);
        assert_eq!(height, PLOT_HEIGHT);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_zero_maximum_collapses_bars() {
        let (_, y, _, height) = bar_geometry(1, 3, 0.0, 0.0);
        assert_eq!(height, 0.0);
        assert_eq!(y, PLOT_HEIGHT);
    }

    #[test]
    fn test_bars_are_laid_out_left_to_right() {
        let (x0, _, _, _) = bar_geometry(0, 4, 1.0, 2.0);
        let (x1, _, _, _) = bar_geometry(1, 4, 1.0, 2.0);
        let (x3, _, _, _) = bar_geometry(3, 4, 1.0, 2.0);
        assert!(x0 < x1 && x1 < x3);
        assert!(x3 < VIEW_WIDTH);
    }

    #[test]
    fn test_half_value_is_half_height() {
        let (_, _, _, full) = bar_geometry(0, 2, 10.0, 10.0);
        let (_, _, _, half) = bar_geometry(1, 2, 5.0, 10.0);
        assert_eq!(half, full / 2.0);
    }

    #[test]
    fn test_label_step_thins_long_series() {
        assert_eq!(label_step(7), 1);
        assert_eq!(label_step(16), 1);
        assert_eq!(label_step(31), 2);
        assert_eq!(label_step(90), 6);
    }
}
