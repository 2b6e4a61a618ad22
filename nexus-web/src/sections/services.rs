use leptos::prelude::*;

/// "Our Core Services" marketing section.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"What We Offer"</p>
                    <h2 class="section-title">"Our Core Services"</h2>
                </div>
                <div class="card-grid three">
                    <ServiceCard
                        icon="⌨️"
                        title="Web Development"
                        description="Crafting responsive, high-performance websites and web applications tailored to your business needs."
                    />
                    <ServiceCard
                        icon="🎨"
                        title="UI/UX Design"
                        description="Creating intuitive and beautiful user interfaces that provide an exceptional user experience."
                    />
                    <ServiceCard
                        icon="☁️"
                        title="Cloud & DevOps"
                        description="Automating workflows and deploying scalable solutions on the cloud for maximum efficiency."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-icon">{icon}</div>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
        </article>
    }
}
