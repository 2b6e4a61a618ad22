// Vertex Nexus storefront — Leptos 0.8 Edition

mod app;
mod components;
mod config;
mod fetch;
mod scroll_lock;
mod sections;

use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <app::App/> });
}
