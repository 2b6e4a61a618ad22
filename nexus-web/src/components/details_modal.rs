use leptos::prelude::*;
use nexus_core::catalog::{DraftDetails, CATEGORIES};

/// Details-editing dialog for the blank canvas.
///
/// Fields are copied from the current draft every time the dialog opens, so
/// cancelling (overlay click or the close button) discards edits. Empty
/// fields are accepted; display falls back to placeholder copy downstream.
#[component]
pub fn DetailsModal(
    open: RwSignal<bool>,
    #[prop(into)] draft: Signal<DraftDetails>,
    #[prop(into)] on_save: Callback<DraftDetails>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    Effect::new(move |_| {
        if open.get() {
            let current = draft.get_untracked();
            title.set(current.title);
            description.set(current.description);
            category.set(current.category);
        }
    });

    let save = move |_| {
        on_save.run(DraftDetails {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
        });
        open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"Your Website Details"</h3>
                        <button class="modal-close" on:click=move |_| open.set(false)>
                            "✕"
                        </button>
                    </div>
                    <div class="modal-body">
                        <label class="field">
                            <span class="field-label">"Title"</span>
                            <input
                                type="text"
                                placeholder="My Dream Website"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Description"</span>
                            <textarea
                                rows="3"
                                placeholder="What should your site say about you?"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="field">
                            <span class="field-label">"Category"</span>
                            <select
                                prop:value=move || category.get()
                                on:change=move |ev| category.set(event_target_value(&ev))
                            >
                                {CATEGORIES
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <option value=*c selected=move || category.get() == *c>
                                                {*c}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn-primary" on:click=save>
                            "Save Details"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
