use leptos::prelude::*;
use nexus_core::preview::ResolvedPreview;
use nexus_core::readiness::ReadinessGate;

use super::PreviewHost;
use crate::scroll_lock::ScrollLock;

/// Full-viewport preview overlay.
///
/// Holds the page scroll lock for exactly as long as it is mounted; the
/// `on_cleanup` drop covers the close button, and any abnormal teardown
/// while still full-screen.
#[component]
pub fn FullScreenPreview(
    resolved: RwSignal<Option<ResolvedPreview>>,
    gate: RwSignal<ReadinessGate>,
    #[prop(into)] backdrop: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    view! {
        <div class="fullscreen-overlay">
            <PreviewHost resolved=resolved gate=gate backdrop=backdrop full=true />
            <button
                class="glass-btn fullscreen-close"
                title="Exit Fullscreen"
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
        </div>
    }
}
