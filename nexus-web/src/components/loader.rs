use leptos::prelude::*;

/// Loading overlay: spinner plus an optional blurred backdrop built from
/// the selected template's thumbnail.
#[component]
pub fn Loader(#[prop(into)] backdrop: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="loader-overlay">
            {move || {
                backdrop.get().map(|url| {
                    view! {
                        <div
                            class="loader-backdrop"
                            style=format!("background-image: url('{url}')")
                        ></div>
                    }
                })
            }}
            <div class="loader-center">
                <div class="loader-spinner"></div>
                <p class="loader-text">"Loading Interactive Preview..."</p>
            </div>
        </div>
    }
}
