use leptos::*;

use crate::analytics::{cell_background, cell_text_color, intensity_grid, HOURS_PER_DAY};
use crate::format::format_number;
use crate::models::PatternTable;

/// Dense day-of-week × hour-of-day grid with single-hue intensity
/// coloring. Always 7×24 cells, however sparse the source table.
#[component]
pub fn ConsumptionHeatmap(table: PatternTable) -> impl IntoView {
    let cells = intensity_grid(&table);

    let header = (0..HOURS_PER_DAY)
        .map(|hour| view! { <th>{hour}</th> })
        .collect_view();

    let rows = cells
        .chunks(HOURS_PER_DAY as usize)
        .map(|row| {
            let day = row.first().map(|cell| cell.day).unwrap_or_default();
            let cols = row
                .iter()
                .map(|cell| {
                    let style = format!(
                        "background-color: {}; color: {}",
                        cell_background(cell.intensity),
                        cell_text_color(cell.intensity)
                    );
                    let tooltip = format!("{} kWh", format_number(cell.value));
                    view! { <td style=style title=tooltip></td> }
                })
                .collect_view();
            view! {
                <tr>
                    <td class="heatmap-day">{day}</td>
                    {cols}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="heatmap-scroll">
            <table class="heatmap-table">
                <thead>
                    <tr>
                        <th></th>
                        {header}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
