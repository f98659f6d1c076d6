use leptos::*;

use crate::analytics::comparison_bars;
use crate::format::format_number;
use crate::models::ComparisonEntry;

const NEUTRAL_BAR: &str = "#bdbdbd";

/// Proportional horizontal bars, each scaled within its own list.
///
/// With a `current_label` the matching entry keeps the accent color and the
/// rest go neutral; without one every bar uses the accent.
#[component]
pub fn ComparisonPanel(
    entries: Vec<ComparisonEntry>,
    current_label: Option<String>,
    accent: &'static str,
) -> impl IntoView {
    let highlight_only_current = current_label.is_some();
    let bars = comparison_bars(&entries, current_label.as_deref());

    let rows = bars
        .into_iter()
        .map(|bar| {
            let color = if !highlight_only_current || bar.is_current {
                accent
            } else {
                NEUTRAL_BAR
            };
            let style = format!(
                "width: {:.1}%; background: {color}",
                bar.share * 100.0
            );
            view! {
                <div class="comparison-row">
                    <div class="comparison-label">{bar.label}</div>
                    <div class="comparison-track">
                        <div class="comparison-fill" style=style></div>
                    </div>
                    <div class="comparison-value">{format_number(bar.value_kwh)}</div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="comparison-list">{rows}</div> }
}
