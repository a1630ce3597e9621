//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Skeleton loader for the analysis placeholder card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton-line wide" />
            <div class="skeleton-line" />
            <div class="skeleton-line tall" />
        </div>
    }
}

/// Skeleton loader for sidebar list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="skeleton-rows">
            {(0..count).map(|_| view! {
                <div class="skeleton-row" />
            }).collect_view()}
        </div>
    }
}

/// Loading overlay for forms
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="overlay-host">
            {children()}

            {move || {
                if loading.get() {
                    view! {
                        <div class="overlay">
                            <div class="spinner spinner-lg" />
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
