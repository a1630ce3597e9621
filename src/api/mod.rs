//! RenoGraph API Client
//!
//! HTTP client for the RenoGraph analysis service.

pub mod client;
pub mod types;

pub use client::{create_analysis, fetch_patients, fetch_patients_with_analyses, sign_in};
pub use types::{Analysis, CreatedAnalysis, Patient, PatientReport, Session};
