use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "Hiring for teams, not seats"
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Hire the person"</span>
                            <br />
                            "your team is actually missing."
                        </h1>
                        <p class="hero-description">
                            "Hireframe turns how your team really works into a job persona "
                            "candidates can say yes to. No keyword bingo, no resume roulette. "
                            "Tell us about your organization once and post roles that read like you."
                        </p>
                        <div class="hero-actions">
                            <a href="/auth" class="btn btn-primary">
                                "Start hiring"
                            </a>
                            <a href="/podcast" class="btn btn-secondary">
                                "Listen to the podcast →"
                            </a>
                        </div>
                    </div>
                    <PersonaCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PersonaCard() -> impl IntoView {
    view! {
        <div class="hero-card">
            <div class="hero-card-header">
                <span class="hero-card-tag">"JOB PERSONA"</span>
                <span class="hero-card-title">"Senior Backend Engineer"</span>
            </div>
            <div class="hero-card-body">
                <div class="hero-card-row">
                    <span class="hero-card-label">"Team"</span>
                    <span>"Platform — remote, steady pace"</span>
                </div>
                <div class="hero-card-row">
                    <span class="hero-card-label">"Timeline"</span>
                    <span>"0-3 months"</span>
                </div>
                <div class="hero-card-row">
                    <span class="hero-card-label">"Compensation"</span>
                    <span>"$140k-$180k"</span>
                </div>
                <div class="hero-card-chips">
                    <span class="chip">"Rust"</span>
                    <span class="chip">"Postgres"</span>
                    <span class="chip">"Owns incidents"</span>
                    <span class="chip">"Writes things down"</span>
                </div>
                <div class="hero-card-note">
                    "\"We ship every Tuesday and argue in RFCs, not meetings.\""
                </div>
            </div>
        </div>
    }
}
