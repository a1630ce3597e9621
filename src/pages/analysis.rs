//! Analysis Page
//!
//! Placeholder detail view for a single analysis. The analysis service
//! prepares the actual results; this page anchors the route the creation
//! flow navigates to and the sidebar highlights.

use leptos::*;
use leptos_router::use_params_map;

use crate::components::loading::CardSkeleton;

/// Analysis detail placeholder
#[component]
pub fn AnalysisPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").cloned().unwrap_or_default());

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{move || format!("Analysis {}", id())}</h1>
                <p class="page-sub">"Results are prepared by the analysis service."</p>
            </div>

            <CardSkeleton />
        </div>
    }
}
