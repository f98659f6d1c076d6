use leptos::*;

use crate::components::ReportPage;

/// Root component: page chrome around the report workflow.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <h1>"Energy Analytics Report Generator"</h1>
            <ReportPage />
        </div>
    }
}
