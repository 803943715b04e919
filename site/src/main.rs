// Hireframe site - Leptos 0.8 CSR app

mod onboarding;
mod pages;
mod sections;
mod storage;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{AuthPage, HomePage, OnboardingPage, PodcastPage};
use sections::{Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Blocking message box, the error surface the whole site uses.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/podcast") view=PodcastPage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/onboarding") view=OnboardingPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
