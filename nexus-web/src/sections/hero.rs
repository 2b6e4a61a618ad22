use std::time::Duration;

use leptos::prelude::*;

use crate::components::use_typewriter;
use crate::config::{TAGLINE, TYPE_SPEED_MS};

/// Intro strip above the showcase, headline revealed by the typewriter.
#[component]
pub fn Hero() -> impl IntoView {
    let typed = use_typewriter(TAGLINE, Duration::from_millis(TYPE_SPEED_MS));

    view! {
        <section class="hero">
            <div class="container">
                <h2 class="hero-title">
                    {move || typed.get()}
                    <span class="hero-caret">"_"</span>
                </h2>
                <p class="hero-description">
                    "Every template below is live. Browse, preview full-screen, and make it yours."
                </p>
            </div>
        </section>
    }
}
