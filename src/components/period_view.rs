use leptos::*;

use crate::models::{Period, Report};

use super::day_view::DayView;
use super::month_view::MonthView;
use super::week_view::WeekView;

/// Period-polymorphic dispatch: exactly one renderer per recognized
/// granularity, nothing for anything else. No renderer substitutes for
/// another and nothing here can panic.
#[component]
pub fn PeriodView(report: Report) -> impl IntoView {
    match report.period {
        Period::Day => view! { <DayView report=report /> }.into_view(),
        Period::Week => view! { <WeekView report=report /> }.into_view(),
        Period::Month => view! { <MonthView report=report /> }.into_view(),
        Period::Unknown => ().into_view(),
    }
}
