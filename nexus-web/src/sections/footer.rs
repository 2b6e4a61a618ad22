use leptos::prelude::*;
use nexus_core::catalog::CATEGORIES;

use crate::config::BRAND;

/// Site footer: brand blurb, link columns, social links, copyright.
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand-col">
                        <h4 class="footer-brand">{BRAND}</h4>
                        <p class="footer-blurb">
                            "Build your next-generation website with our AI-powered platform. "
                            "Choose a stunning template or create something entirely new."
                        </p>
                        <div class="footer-social">
                            <a href="#" class="social-link" aria-label="Instagram">"IG"</a>
                            <a href="#" class="social-link" aria-label="LinkedIn">"IN"</a>
                            <a href="#" class="social-link" aria-label="GitHub">"GH"</a>
                        </div>
                    </div>
                    <FooterColumn title="Categories" links=CATEGORIES />
                    <FooterColumn title="Company" links=&["About Us", "Careers", "Blog"] />
                    <FooterColumn
                        title="Support"
                        links=&["Documentation", "Contact Us", "Help Center"]
                    />
                </div>
                <p class="footer-copyright">
                    "© " {year} " " {BRAND} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-col">
            <h5 class="footer-col-title">{title}</h5>
            <ul class="footer-list">
                {links
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a href="#" class="footer-link">{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
