use std::time::Duration;

use leptos::prelude::*;
use nexus_core::preview::ResolvedPreview;
use nexus_core::readiness::{GateEvent, HostStatus, ReadinessGate, SETTLE_DEBOUNCE_MS};

use super::Loader;

/// Sandboxed preview host with a readiness-gated cross-fade.
///
/// The iframe is rebuilt whenever the resolved content changes (the closure
/// below re-runs on the signal), so a selection switch always gets a fresh
/// host instance. Its `load` event is the "settled" lifecycle signal for
/// the readiness gate; the debounce keeps a single-frame flash from leaking
/// through.
#[component]
pub fn PreviewHost(
    resolved: RwSignal<Option<ResolvedPreview>>,
    gate: RwSignal<ReadinessGate>,
    #[prop(into)] backdrop: Signal<Option<String>>,
    #[prop(default = false)] full: bool,
) -> impl IntoView {
    let ready = Memo::new(move |_| gate.with(|g| g.is_ready()));

    let on_load = move |_| {
        gate.update(|g| g.apply(GateEvent::Status(HostStatus::Settled)));
        let epoch = gate.with_untracked(|g| g.epoch());
        set_timeout(
            move || {
                gate.update(|g| {
                    g.apply_at(epoch, GateEvent::SettleDelayElapsed);
                });
            },
            Duration::from_millis(SETTLE_DEBOUNCE_MS),
        );
    };

    view! {
        <div class=if full { "preview-host full" } else { "preview-host" }>
            <Show when=move || !ready.get()>
                <Loader backdrop=backdrop />
            </Show>
            {move || {
                resolved.get().map(|preview| {
                    let markup = preview.index_markup().unwrap_or("").to_string();
                    view! {
                        <iframe
                            class="preview-frame"
                            class:ready=move || ready.get()
                            srcdoc=markup
                            sandbox="allow-scripts"
                            title="Template preview"
                            on:load=on_load
                        ></iframe>
                    }
                })
            }}
        </div>
    }
}
