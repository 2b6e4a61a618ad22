use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use nexus_core::catalog::{catalog, CatalogEntry, DraftDetails};
use nexus_core::gallery::GalleryState;
use nexus_core::preview::{resolve_preview, ResolutionSequence, ResolvedPreview};
use nexus_core::purchase::purchase_url;
use nexus_core::readiness::{GateEvent, ReadinessGate, FALLBACK_TIMEOUT_MS};

use crate::components::{DetailsModal, FullScreenPreview, PreviewHost};
use crate::config::WHATSAPP_RECIPIENT;
use crate::fetch::fetch_text;
use crate::sections::{
    Carousel, DetailsPanel, Footer, Hero, Nav, Process, Services, Testimonials,
};

#[component]
pub fn App() -> impl IntoView {
    let entries = RwSignal::new(catalog());
    let gallery = RwSignal::new(GalleryState::new());
    let resolved = RwSignal::new(None::<ResolvedPreview>);
    let gate = RwSignal::new(ReadinessGate::new());
    let editing = RwSignal::new(false);
    let requests = StoredValue::new(ResolutionSequence::new());

    let total = Memo::new(move |_| entries.with(|e| e.len()));
    let current_index = Memo::new(move |_| gallery.with(|g| g.current_index()));
    let current_entry =
        Memo::new(move |_| entries.with(|e| e.get(current_index.get()).cloned()));
    let backdrop = Signal::derive(move || {
        current_entry.get().and_then(|e| e.image_path().map(str::to_string))
    });
    let position = Signal::derive(move || (current_index.get(), total.get()));

    // Re-resolve whenever the selection (or the blank canvas draft) changes.
    // Each batch begins a resolution ticket; a batch finishing after a newer
    // selection superseded it is discarded instead of overwriting it.
    Effect::new(move |_| {
        let Some(entry) = current_entry.get() else {
            return;
        };
        let Some(ticket) = requests.try_update_value(|seq| seq.begin()) else {
            return;
        };
        resolved.set(None);
        gate.update(|g| g.apply(GateEvent::Reset));
        let epoch = gate.with_untracked(|g| g.epoch());
        set_timeout(
            move || {
                gate.update(|g| {
                    g.apply_at(epoch, GateEvent::FallbackElapsed);
                });
            },
            Duration::from_millis(FALLBACK_TIMEOUT_MS),
        );
        spawn_local(async move {
            let content = entry.preview_content();
            let result = resolve_preview(Some(&content), fetch_text).await;
            let current = requests
                .try_with_value(|seq| seq.is_current(ticket))
                .unwrap_or(false);
            if !current {
                leptos::logging::log!("discarding stale preview batch");
                return;
            }
            if let Some(error) = &result.error {
                leptos::logging::error!("template preview failed: {error}");
            }
            resolved.set(Some(result));
        });
    });

    let buy = Callback::new(move |_: ()| {
        let Some(entry) = current_entry.get_untracked() else {
            return;
        };
        match purchase_url(&entry, WHATSAPP_RECIPIENT) {
            Some(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
            // Blank canvas: the primary action is the editing flow.
            None => editing.set(true),
        }
    });
    let edit = Callback::new(move |_: ()| editing.set(true));
    let close_fullscreen =
        Callback::new(move |_: ()| gallery.update(|g| g.exit_full_screen()));

    let draft = Signal::derive(move || {
        entries.with(|list| {
            list.iter()
                .find_map(|entry| match entry {
                    CatalogEntry::BlankCanvas(d) => Some(d.clone()),
                    _ => None,
                })
                .unwrap_or_default()
        })
    });
    let save_draft = Callback::new(move |new_draft: DraftDetails| {
        entries.update(|list| {
            for entry in list.iter_mut() {
                if !entry.is_purchasable() {
                    *entry = CatalogEntry::BlankCanvas(new_draft.clone());
                }
            }
        });
    });

    view! {
        <div class="page">
            <Nav position=position />
            <main>
                <Hero />
                <section class="showcase container">
                    <div class="showcase-frame">
                        <PreviewHost resolved=resolved gate=gate backdrop=backdrop />
                        <div class="showcase-nav">
                            <button
                                class="glass-btn"
                                aria-label="Previous"
                                on:click=move |_| {
                                    gallery.update(|g| g.select_previous(total.get_untracked()))
                                }
                            >
                                "‹"
                            </button>
                            <button
                                class="glass-btn"
                                aria-label="Next"
                                on:click=move |_| {
                                    gallery.update(|g| g.select_next(total.get_untracked()))
                                }
                            >
                                "›"
                            </button>
                        </div>
                        <button
                            class="glass-btn fullscreen-btn"
                            title="Fullscreen"
                            on:click=move |_| gallery.update(|g| g.enter_full_screen())
                        >
                            "⛶"
                        </button>
                    </div>
                </section>
                <DetailsPanel entry=current_entry on_buy=buy on_edit=edit />
                <Carousel entries=entries gallery=gallery />
                <Services />
                <Process />
                <Testimonials />
            </main>
            <Footer />
            <Show when=move || gallery.with(|g| g.is_full_screen())>
                <FullScreenPreview
                    resolved=resolved
                    gate=gate
                    backdrop=backdrop
                    on_close=close_fullscreen
                />
            </Show>
            <DetailsModal open=editing draft=draft on_save=save_draft />
        </div>
    }
}
