use leptos::prelude::*;

/// "What Our Clients Say" section.
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Testimonials"</p>
                    <h2 class="section-title">"What Our Clients Say"</h2>
                </div>
                <div class="card-grid three">
                    <TestimonialCard
                        name="Aarav Sharma"
                        company="CEO, Innovate Inc."
                        quote="Vertex Nexus delivered a product that exceeded our wildest expectations. Their professionalism and technical skill are second to none."
                    />
                    <TestimonialCard
                        name="Priya Mehta"
                        company="Founder, Creative Solutions"
                        quote="Working with this team was a game-changer for our brand. The final website is not just beautiful but also incredibly fast and intuitive."
                    />
                    <TestimonialCard
                        name="Rohan Desai"
                        company="CTO, TechFront"
                        quote="The development process was seamless and transparent. They tackled complex challenges with ease and delivered on time."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    name: &'static str,
    company: &'static str,
    quote: &'static str,
) -> impl IntoView {
    view! {
        <article class="testimonial-card">
            <span class="testimonial-quote-mark">"“"</span>
            <p class="testimonial-quote">{quote}</p>
            <div>
                <p class="testimonial-name">{name}</p>
                <p class="testimonial-company">{company}</p>
            </div>
        </article>
    }
}
