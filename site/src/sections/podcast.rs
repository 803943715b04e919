use leptos::prelude::*;

#[component]
pub fn PodcastHero() -> impl IntoView {
    view! {
        <section class="podcast-hero">
            <div class="container">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "The Hireframe Podcast"
                </div>
                <h1 class="hero-title">
                    <span class="hero-title-accent">"People Who Hire People"</span>
                </h1>
                <p class="hero-description">
                    "Conversations with the people behind unusual teams — how they found "
                    "each other, what they got wrong, and the job posts they wish they'd written."
                </p>
                <div class="podcast-subscribe">
                    <a href="https://podcasts.apple.com/podcast/people-who-hire-people" target="_blank" class="btn btn-secondary">
                        "Apple Podcasts"
                    </a>
                    <a href="https://open.spotify.com/show/people-who-hire-people" target="_blank" class="btn btn-secondary">
                        "Spotify"
                    </a>
                    <a href="/podcast/feed.xml" class="btn btn-secondary">
                        "RSS"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PodcastEpisodes() -> impl IntoView {
    view! {
        <section class="podcast-episodes">
            <div class="container">
                <EpisodeCard
                    number="EP 014"
                    title="The job post that said 'we argue a lot'"
                    guest="Priya Raman, Fieldstone Robotics"
                    duration="42 min"
                    blurb="Why honest friction beats harmony theater, and how Fieldstone's bluntest posting ever tripled qualified applicants."
                />
                <EpisodeCard
                    number="EP 013"
                    title="Hiring your first ten without a recruiter"
                    guest="Ana Sofia Duarte, Lumen Health"
                    duration="38 min"
                    blurb="A founder's hiring diary: the persona worksheet, the two bad offers, and the question she now asks every candidate."
                />
                <EpisodeCard
                    number="EP 012"
                    title="What 'fast-paced' actually means"
                    guest="Marcus Webb, Delta Freight"
                    duration="45 min"
                    blurb="Four managers, four definitions, one burned-out team. Marcus on naming your real pace before you post the role."
                />
                <EpisodeCard
                    number="EP 011"
                    title="Interviews are a terrible sampling method"
                    guest="Dr. Lena Kovac"
                    duration="51 min"
                    blurb="An organizational psychologist on what interviews can and cannot tell you, and what to collect instead."
                />
            </div>
        </section>
    }
}

#[component]
fn EpisodeCard(
    number: &'static str,
    title: &'static str,
    guest: &'static str,
    duration: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <article class="episode-card">
            <div class="episode-meta">
                <span class="episode-number">{number}</span>
                <span class="episode-duration">{duration}</span>
            </div>
            <h3 class="episode-title">{title}</h3>
            <p class="episode-guest">{guest}</p>
            <Show when=move || expanded.get()>
                <p class="episode-blurb">{blurb}</p>
            </Show>
            <button class="episode-toggle" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Less" } else { "About this episode" }}
            </button>
        </article>
    }
}
