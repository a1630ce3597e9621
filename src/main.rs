//! RenoGraph
//!
//! Browser frontend for clinical diuretic renography reporting, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Report creation for new and existing patients
//! - DICOM series upload with metadata
//! - Patient worklist grouped by analysis history
//! - Light/dark/system theme switching
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the RenoGraph analysis API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod report;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
