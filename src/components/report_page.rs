use leptos::*;

use crate::api::ApiClient;
use crate::models::{Report, ReportRequest};

use super::facility_header::FacilityHeader;
use super::period_view::PeriodView;

/// Lifecycle of the single tracked report request. Replaced atomically as
/// a whole value on every transition.
#[derive(Debug, Clone, PartialEq)]
enum ReportState {
    Idle,
    Loading,
    Ready(Report),
    Failed(String),
}

/// Report workflow page: input form, request orchestration, and the
/// rendered report below it.
#[component]
pub fn ReportPage() -> impl IntoView {
    let client = ApiClient::new();

    let data_id = create_rw_signal(String::new());
    let company_name = create_rw_signal(String::new());
    let facility_name = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let filename = create_rw_signal(String::new());
    let tariff_rate = create_rw_signal(String::new());

    let (state, set_state) = create_signal(ReportState::Idle);
    // Monotonic token for the last-settled-wins rule: a response is applied
    // only while its token is still the newest submission.
    let generation = store_value(0_u64);

    let on_generate = move |_| {
        let id = data_id.get_untracked();
        let request = ReportRequest {
            company_name: company_name.get_untracked(),
            facility_name: facility_name.get_untracked(),
            address: address.get_untracked(),
            filename: filename.get_untracked(),
            tariff_rate: tariff_rate.get_untracked().parse().unwrap_or(0.0),
        };

        generation.update_value(|g| *g += 1);
        let token = generation.get_value();
        set_state.set(ReportState::Loading);

        let client = client.clone();
        spawn_local(async move {
            let result = client.generate_report(&id, &request).await;
            if generation.get_value() != token {
                log::debug!("Discarding superseded report response");
                return;
            }
            match result {
                Ok(report) => {
                    log::info!(
                        "Loaded {} report with {} reviews",
                        report.period.as_str(),
                        report.performance_reviews.len()
                    );
                    set_state.set(ReportState::Ready(report));
                }
                Err(err) => {
                    log::warn!("Report request failed: {err}");
                    set_state.set(ReportState::Failed(err.to_string()));
                }
            }
        });
    };

    let pending = move || state.get() == ReportState::Loading;

    view! {
        <div class="input-section">
            <FormField label="Data ID (UUID)" value=data_id />
            <FormField label="Company Name" value=company_name />
            <FormField label="Facility Name" value=facility_name />
            <FormField label="Address" value=address />
            <FormField label="Filename" value=filename />
            <FormField label="Tariff Rate" value=tariff_rate numeric=true />
            <button class="generate-btn" on:click=on_generate disabled=pending>
                {move || if pending() { "Generating..." } else { "Generate Report" }}
            </button>
        </div>

        {move || match state.get() {
            ReportState::Idle | ReportState::Loading => ().into_view(),
            ReportState::Failed(message) => view! {
                <div class="error-banner">"Error: " {message}</div>
            }
            .into_view(),
            ReportState::Ready(report) => view! {
                <FacilityHeader info=report.facility_info.clone() period=report.period />
                <PeriodView report=report />
            }
            .into_view(),
        }}
    }
}

/// Labeled text input bound to a string signal.
#[component]
fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let input_type = if numeric { "number" } else { "text" };

    view! {
        <div class="input-group">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
