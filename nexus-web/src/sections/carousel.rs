use leptos::prelude::*;
use nexus_core::catalog::CatalogEntry;
use nexus_core::gallery::GalleryState;
use nexus_core::pricing::format_inr;

/// Horizontally scrollable thumbnail strip.
///
/// Clicking a card selects it; the heart toggles the favorite set without
/// moving the selection (the card underneath is clickable, so the toggle
/// stops propagation). The blank canvas renders a plus tile and is never
/// favoritable.
#[component]
pub fn Carousel(
    entries: RwSignal<Vec<CatalogEntry>>,
    gallery: RwSignal<GalleryState>,
) -> impl IntoView {
    view! {
        <section class="browse container">
            <h3 class="browse-heading">"Browse All Templates"</h3>
            <div class="carousel">
                <div class="carousel-fade left"></div>
                <div class="carousel-fade right"></div>
                <div class="carousel-track">
                    {move || {
                        let total = entries.with(|e| e.len());
                        entries
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, entry)| thumbnail_card(entry, idx, total, gallery))
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

fn thumbnail_card(
    entry: CatalogEntry,
    idx: usize,
    total: usize,
    gallery: RwSignal<GalleryState>,
) -> impl IntoView {
    let title = entry.title().to_string();
    let key = entry.key().to_string();
    let fav_key = key.clone();

    let price_line = match &entry {
        CatalogEntry::Purchasable(record) => format!("₹{}", format_inr(record.price)),
        CatalogEntry::BlankCanvas(_) => "Start from Scratch".to_string(),
    };

    let tile = match entry.image_path() {
        Some(path) => {
            let src = path.to_string();
            let alt = format!("{title} thumbnail");
            view! {
                <div class="thumb-media">
                    <img src=src alt=alt loading="lazy" />
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="thumb-media thumb-new">
                <span class="thumb-plus">"+"</span>
            </div>
        }
        .into_any(),
    };

    let favorite = entry.is_purchasable().then(|| {
        view! {
            <button
                class="fav-btn"
                class:active=move || gallery.with(|g| g.is_favorite(&fav_key))
                aria-label="Toggle favorite"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gallery.update(|g| g.toggle_favorite(&key));
                }
            >
                "♥"
            </button>
        }
    });

    view! {
        <div
            class="thumb-card"
            class:active=move || gallery.with(|g| g.current_index() == idx)
            on:click=move |_| gallery.update(|g| g.select(idx, total))
        >
            {tile}
            <div class="thumb-meta">
                <div class="thumb-text">
                    <h4 class="thumb-title">{title.clone()}</h4>
                    <p class="thumb-price">{price_line}</p>
                </div>
                {favorite}
            </div>
        </div>
    }
}
