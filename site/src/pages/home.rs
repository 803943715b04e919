// Home page - hero + how it works + testimonials
use crate::sections::{Hero, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <HowItWorks />
        <Testimonials />
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"How it works"</p>
                    <h2 class="section-title">"Four steps from blank page to job persona"</h2>
                </div>
                <div class="steps-grid">
                    <StepCard
                        number="01"
                        title="Your organization"
                        description="Name, industry, funding, and the mission you actually believe. Candidates read this before anything else."
                    />
                    <StepCard
                        number="02"
                        title="Your team"
                        description="Remote or onsite, steady or sprinting, how decisions really get made. The workstyle questions most postings skip."
                    />
                    <StepCard
                        number="03"
                        title="Your hiring intent"
                        description="How many people, how soon, and why now. Honest timelines filter out mismatched expectations early."
                    />
                    <StepCard
                        number="04"
                        title="The job persona"
                        description="A role built from a catalog of real jobs, with skills, traits, and compensation attached. Post it anywhere."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(number: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="step-card">
            <div class="step-card-number">{number}</div>
            <h3 class="step-card-title">{title}</h3>
            <p class="step-card-description">{description}</p>
        </article>
    }
}
