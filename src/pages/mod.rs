//! Pages
//!
//! Top-level page components for each route.

pub mod analysis;
pub mod home;
pub mod login;

pub use analysis::AnalysisPage;
pub use home::Home;
pub use login::Login;
