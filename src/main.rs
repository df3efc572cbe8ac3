//! Community Insights Dashboard
//!
//! Analytics dashboard for the macOS Beta Teams channel, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Activity timeline (messages per day) as a canvas line chart
//! - Top topics as horizontal bars
//! - Contributor cards with engagement indicators
//! - Reaction breakdown as a donut chart with legend
//! - Derived summary totals (reactions, responses)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is supplied to the [`app::App`] component at mount
//! time; the default is an embedded sample dataset, so the view works with no
//! backend at all.

use leptos::*;

mod app;
mod components;
mod data;
mod metrics;
mod pages;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
