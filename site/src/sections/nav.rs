use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"hf"</span>
                    <span class="nav-title">"hireframe"</span>
                </a>
                <div class="nav-links">
                    <a href="/#how-it-works" class="nav-link">"How it works"</a>
                    <a href="/#testimonials" class="nav-link">"Customers"</a>
                    <a href="/podcast" class="nav-link">"Podcast"</a>
                    <a href="/auth" class="nav-link">"Sign in"</a>
                    <a href="/auth" class="nav-cta">"Get started"</a>
                    <button
                        class=move || if menu_open.get() { "nav-menu-btn active" } else { "nav-menu-btn" }
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        {move || if menu_open.get() { "Close" } else { "Menu" }}
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        <a href="/#how-it-works" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "How it works"
                        </a>
                        <a href="/#testimonials" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "Customers"
                        </a>
                        <a href="/podcast" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "Podcast"
                        </a>
                        <a href="/auth" class="nav-drawer-link nav-drawer-cta" on:click=move |_| set_menu_open.set(false)>
                            "Get started"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
