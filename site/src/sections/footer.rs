use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"hf"</span>
                    <span class="footer-title">"hireframe"</span>
                </div>
                <div class="footer-links">
                    <a href="/podcast" class="footer-link">"Podcast"</a>
                    <a href="/auth" class="footer-link">"Sign in"</a>
                    <a href="mailto:hello@hireframe.io" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">
                    "Hireframe (c)2026 — hire the person your team is missing"
                </p>
            </div>
        </footer>
    }
}
