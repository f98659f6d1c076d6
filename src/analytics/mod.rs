//! Client-side derived metrics. Everything the payload does not supply
//! pre-computed lives here, as pure functions of the report snapshot.

pub mod comparison;
pub mod heatmap;

pub use comparison::{comparison_bars, ComparisonBar};
pub use heatmap::{
    cell_background, cell_text_color, intensity_grid, HeatCell, DAY_LABELS, HOURS_PER_DAY,
    LIGHT_TEXT_THRESHOLD,
};
