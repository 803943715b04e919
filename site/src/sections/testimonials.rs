use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Customers"</p>
                    <h2 class="section-title">"Teams that stopped guessing"</h2>
                </div>
                <div class="testimonials-grid">
                    <TestimonialCard
                        quote="We rewrote a job post through the wizard and the next three candidates all asked about our release ritual. That never happened with the old listing."
                        name="Priya Raman"
                        role="VP Engineering, Fieldstone Robotics"
                    />
                    <TestimonialCard
                        quote="The team workstyle questions felt like therapy. Turns out 'fast-paced environment' meant four different things to four managers."
                        name="Marcus Webb"
                        role="Head of Talent, Delta Freight"
                    />
                    <TestimonialCard
                        quote="Two hires in a quarter for a team that had been open for a year. The persona did the screening before we ever got on a call."
                        name="Ana Sofia Duarte"
                        role="Founder, Lumen Health"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    quote: &'static str,
    name: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <article class="testimonial-card">
            <p class="testimonial-quote">{quote}</p>
            <div class="testimonial-author">
                <span class="testimonial-name">{name}</span>
                <span class="testimonial-role">{role}</span>
            </div>
        </article>
    }
}
