// Podcast landing page
use crate::sections::{PodcastEpisodes, PodcastHero};
use leptos::prelude::*;

#[component]
pub fn PodcastPage() -> impl IntoView {
    view! {
        <PodcastHero />
        <PodcastEpisodes />
    }
}
