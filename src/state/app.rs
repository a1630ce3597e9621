//! Application State
//!
//! Session and toast signals provided to the whole component tree.

use leptos::*;

use crate::api::types::Session;

const SESSION_KEY: &str = "renograph_session";

/// App-wide state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Signed-in session, `None` when logged out
    pub session: RwSignal<Option<Session>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide app state to the component tree
///
/// The session is restored from local storage so a reload keeps the user
/// signed in.
pub fn provide_app_state() {
    let state = AppState {
        session: create_rw_signal(load_session()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Store a fresh session and persist it
    pub fn start_session(&self, session: Session) {
        store_session(&session);
        self.session.set(Some(session));
    }

    /// Drop the session and its persisted copy
    pub fn end_session(&self) {
        clear_session();
        self.session.set(None);
    }
}

fn load_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn store_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(session) {
                let _ = storage.set_item(SESSION_KEY, &raw);
            }
        }
    }
}

fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
