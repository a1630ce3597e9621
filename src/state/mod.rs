//! State Management
//!
//! Session, toast, and theme state shared through Leptos context.

pub mod app;
pub mod theme;

pub use app::{provide_app_state, AppState};
pub use theme::{provide_theme_store, ThemePreference, ThemeStore};
