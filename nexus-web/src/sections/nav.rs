use leptos::prelude::*;

use crate::config::BRAND;

/// Sticky header: brand plus the current/total selection counter.
#[component]
pub fn Nav(#[prop(into)] position: Signal<(usize, usize)>) -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <h1 class="nav-brand">{BRAND}</h1>
                <div class="nav-counter">
                    <span>{move || position.get().0 + 1}</span>
                    <span class="nav-counter-sep">"/"</span>
                    <span>{move || position.get().1}</span>
                </div>
            </div>
        </header>
    }
}
