//! Home Page
//!
//! The report creation workspace.

use leptos::*;

use crate::components::report_form::ReportForm;
use crate::state::app::AppState;

/// Landing page: the report creation form
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    // The shell redirects when there is no session; this only bridges the
    // render before that effect runs
    let session = state.session;

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"New report"</h1>
                <p class="page-sub">"Attach a renography series and queue it for analysis."</p>
            </div>

            {move || session.get().map(|session| view! {
                <ReportForm token=session.token />
            })}
        </div>
    }
}
