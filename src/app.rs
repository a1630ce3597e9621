//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{PatientAnalysisList, ThemeSwitcher, Toast};
use crate::pages::{AnalysisPage, Home, Login};
use crate::state::app::{provide_app_state, AppState};
use crate::state::theme::provide_theme_store;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide state to all components; this also restores the persisted
    // session and applies the persisted theme
    provide_app_state();
    provide_theme_store();

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/" view=Shell>
                    <Route path="" view=Home />
                    <Route path="analysis/:id" view=AnalysisPage />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Signed-in workspace: top bar, patient sidebar, routed main pane
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    // Everything under the shell requires a session
    let session = state.session;
    let navigate = use_navigate();
    create_effect(move |_| {
        if session.get().is_none() {
            navigate("/login", Default::default());
        }
    });

    let state_for_signout = state.clone();

    view! {
        <div class="workspace">
            <header class="topbar">
                <A href="/" class="brand">
                    <span class="brand-icon">"🩻"</span>
                    <span>"RenoGraph"</span>
                </A>

                <div class="topbar-actions">
                    <ThemeSwitcher />

                    {move || session.get().map(|session| view! {
                        <span class="session-email">{session.email}</span>
                    })}

                    <button
                        class="button-ghost"
                        on:click=move |_| state_for_signout.end_session()
                    >
                        "Sign out"
                    </button>
                </div>
            </header>

            <div class="workspace-body">
                <aside class="sidebar">
                    <h2 class="sidebar-title">"Patients"</h2>
                    <PatientAnalysisList />
                </aside>

                <main class="workspace-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="brand-icon">"🔍"</div>
            <h1 class="page-title">"Page Not Found"</h1>
            <p class="page-sub">"The page you're looking for doesn't exist."</p>
            <A href="/" class="button-primary">"Go to reports"</A>
        </div>
    }
}
