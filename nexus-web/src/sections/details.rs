use leptos::prelude::*;
use nexus_core::catalog::CatalogEntry;
use nexus_core::pricing::format_inr;

/// Details panel under the showcase: category, title, tags, pricing, and
/// the primary action - Buy Now for a template, Edit Details for the blank
/// canvas.
#[component]
pub fn DetailsPanel(
    #[prop(into)] entry: Signal<Option<CatalogEntry>>,
    #[prop(into)] on_buy: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="details container">
            <div class="details-card">
                {move || match entry.get() {
                    Some(CatalogEntry::Purchasable(record)) => {
                        let price = format_inr(record.price);
                        let original = record
                            .discount()
                            .map(|_| format_inr(record.original_price));
                        let saved = record.discount().map(format_inr);
                        view! {
                            <div class="details-grid">
                                <div class="details-main">
                                    <span class="category-chip">{record.category.clone()}</span>
                                    <h2 class="details-title">{record.title.clone()}</h2>
                                    <p class="details-description">{record.description.clone()}</p>
                                    <div class="tag-row">
                                        {record
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! { <span class="tag">"#"{tag.clone()}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="details-aside">
                                    <div class="price-row">
                                        <span class="price">"₹"{price}</span>
                                        {original
                                            .map(|o| {
                                                view! { <span class="price-original">"₹"{o}</span> }
                                            })}
                                    </div>
                                    {saved
                                        .map(|s| {
                                            view! {
                                                <span class="save-badge">"Save ₹"{s}</span>
                                            }
                                        })}
                                    <button class="btn btn-primary buy-btn" on:click=move |_| on_buy.run(())>
                                        "Buy Now"
                                    </button>
                                    <p class="details-note">"✓ Instant Delivery & Full Source Code"</p>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Some(CatalogEntry::BlankCanvas(draft)) => {
                        view! {
                            <div class="details-grid">
                                <div class="details-main">
                                    <span class="category-chip">{draft.category.clone()}</span>
                                    <h2 class="details-title">{draft.display_title().to_string()}</h2>
                                    <p class="details-description">
                                        {draft.display_description().to_string()}
                                    </p>
                                </div>
                                <div class="details-aside">
                                    <p class="details-blank-hint">
                                        "Start from scratch - add a title, description, and category."
                                    </p>
                                    <button class="btn btn-primary" on:click=move |_| on_edit.run(())>
                                        "Edit Details"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <h2 class="details-title muted">"Select a template"</h2>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
