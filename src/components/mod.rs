//! UI Components
//!
//! Reusable Leptos components for the workspace.

pub mod auth_layout;
pub mod loading;
pub mod patient_list;
pub mod report_form;
pub mod theme_switcher;
pub mod toast;

pub use auth_layout::AuthLayout;
pub use loading::{CardSkeleton, ListSkeleton, LoadingOverlay};
pub use patient_list::PatientAnalysisList;
pub use report_form::ReportForm;
pub use theme_switcher::ThemeSwitcher;
pub use toast::Toast;
