//! Patient Analysis List
//!
//! Sidebar tree of patients and their past analyses. Fetched once on
//! mount; analyses render in payload order (the backend decides relevance).

use chrono::Datelike;
use leptos::*;
use leptos_router::{use_location, A};

use crate::api;
use crate::api::types::{Analysis, PatientReport};
use crate::components::loading::ListSkeleton;

/// Norwegian month names for the sidebar date labels
const NO_MONTHS: [&str; 12] = [
    "januar", "februar", "mars", "april", "mai", "juni",
    "juli", "august", "september", "oktober", "november", "desember",
];

/// Collapsible per-patient tree of analysis links
#[component]
pub fn PatientAnalysisList() -> impl IntoView {
    let (groups, set_groups) = create_signal(Vec::<PatientReport>::new());
    let (loading, set_loading) = create_signal(true);

    // One fetch on mount; the list goes stale if reports are created later
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_patients_with_analyses().await {
                Ok(patients) => set_groups.set(patients),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load patients: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <ListSkeleton count=4 /> }.into_view();
            }

            let groups = groups.get();
            if groups.is_empty() {
                view! { <p class="sidebar-empty">"No reports yet."</p> }.into_view()
            } else {
                groups.into_iter().map(|group| view! {
                    <PatientGroup group=group />
                }).collect_view()
            }
        }}
    }
}

/// One collapsible patient section, open by default
#[component]
fn PatientGroup(group: PatientReport) -> impl IntoView {
    let (open, set_open) = create_signal(true);

    let name = group.name.clone();
    let analyses = group.analyses;

    view! {
        <div class="patient-group">
            <button
                class="patient-group-header"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span class=move || if open.get() { "chevron open" } else { "chevron" }>"›"</span>
                <span>{name}</span>
            </button>

            {move || {
                if open.get() {
                    view! {
                        <ul class="analysis-links">
                            {analyses.iter().map(|analysis| view! {
                                <AnalysisLink analysis=analysis.clone() />
                            }).collect_view()}
                        </ul>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Link to one analysis, highlighted while it is the one on screen
#[component]
fn AnalysisLink(analysis: Analysis) -> impl IntoView {
    let location = use_location();

    let href = format!("/analysis/{}", analysis.id);
    let label = format_date_no(analysis.created_at);
    let id = analysis.id;

    view! {
        <li class=move || {
            if is_active(&location.pathname.get(), &id) {
                "analysis-link active"
            } else {
                "analysis-link"
            }
        }>
            <A href=href>{label}</A>
        </li>
    }
}

/// Format a ms-epoch timestamp as a Norwegian long date, e.g. `12. mars 2025`
fn format_date_no(timestamp_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(timestamp_ms) {
        Some(date) => format!(
            "{}. {} {}",
            date.day(),
            NO_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => "ukjent dato".to_string(),
    }
}

/// Exact `/analysis/{id}` match; `/analysis/142` must not light up id `42`
fn is_active(path: &str, id: &str) -> bool {
    path.trim_end_matches('/').strip_prefix("/analysis/") == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_date_no() {
        let ts = Utc
            .with_ymd_and_hms(2025, 3, 12, 9, 30, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_date_no(ts), "12. mars 2025");

        let ts = Utc
            .with_ymd_and_hms(2024, 12, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_date_no(ts), "1. desember 2024");
    }

    #[test]
    fn test_is_active_requires_exact_id() {
        assert!(is_active("/analysis/42", "42"));
        assert!(is_active("/analysis/42/", "42"));
        assert!(!is_active("/analysis/142", "42"));
        assert!(!is_active("/analysis/42/details", "42"));
        assert!(!is_active("/", "42"));
    }
}
