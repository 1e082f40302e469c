//! Inkwell Admin
//!
//! Admin dashboard for the Inkwell CMS, built with Leptos (WASM).
//!
//! # Features
//!
//! - Content overview with recent activity
//! - Post editing with markdown content and slug management
//! - Site settings with singleton upsert semantics
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks directly to the hosted table API (PostgREST shape)
//! over HTTP; there is no application server of its own.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
