use leptos::prelude::*;

/// "Our Streamlined Process" timeline section.
#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"How It Works"</p>
                    <h2 class="section-title">"Our Streamlined Process"</h2>
                </div>
                <div class="process-timeline">
                    <div class="process-line"></div>
                    <ProcessStep
                        number="01"
                        title="Discovery & Planning"
                        description="We start by understanding your vision, goals, and requirements to create a detailed project roadmap."
                    />
                    <ProcessStep
                        number="02"
                        title="Design & Prototype"
                        description="Our team designs a stunning UI/UX prototype, ensuring it's both beautiful and user-friendly."
                    />
                    <ProcessStep
                        number="03"
                        title="Development & Testing"
                        description="We build your solution using modern tech, followed by rigorous testing to ensure quality."
                    />
                    <ProcessStep
                        number="04"
                        title="Deployment & Support"
                        description="We deploy your project and provide ongoing support to ensure it runs smoothly and scales effectively."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProcessStep(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="process-step">
            <div class="process-number">{number}</div>
            <div class="process-card">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
            </div>
        </div>
    }
}
