// Sign in / sign up - plain POST-and-redirect against the backend
use hireframe::api::ApiClient;
use hireframe::config::ApiConfig;
use hireframe::session::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::alert;
use crate::storage::BrowserStore;

#[component]
pub fn AuthPage() -> impl IntoView {
    let (signup_mode, set_signup_mode) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let navigate = navigate.clone();
        let is_signup = signup_mode.get();
        let name = name.get();
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            alert("Email and password are required");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let client = ApiClient::new(ApiConfig::default());
            let result = if is_signup {
                client.signup(name.trim(), email.trim(), &password).await
            } else {
                client.login(email.trim(), &password).await
            };
            match result {
                Ok(token) => {
                    let store = BrowserStore;
                    let mut session = Session::load(&store);
                    session.auth_token = Some(token.auth_token.clone());
                    client.set_token(Some(token.auth_token));
                    // Cache the profile for later PATCH->PUT payload rebuilds.
                    if let Ok(user) = client.me().await {
                        session.current_user = Some(user);
                    }
                    session.save(&store);
                    navigate("/onboarding", Default::default());
                }
                Err(err) => alert(&err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="auth">
            <div class="container auth-container">
                <div class="auth-card">
                    <div class="auth-tabs">
                        <button
                            class=move || if !signup_mode.get() { "auth-tab active" } else { "auth-tab" }
                            on:click=move |_| set_signup_mode.set(false)
                        >
                            "Sign in"
                        </button>
                        <button
                            class=move || if signup_mode.get() { "auth-tab active" } else { "auth-tab" }
                            on:click=move |_| set_signup_mode.set(true)
                        >
                            "Create account"
                        </button>
                    </div>

                    <form class="auth-form" on:submit=submit>
                        <Show when=move || signup_mode.get()>
                            <label class="field">
                                <span class="field-label">"Your name"</span>
                                <input
                                    type="text"
                                    placeholder="Jamie Rivera"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <label class="field">
                            <span class="field-label">"Work email"</span>
                            <input
                                type="email"
                                placeholder="you@company.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Password"</span>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn-primary auth-submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Working..."
                                } else if signup_mode.get() {
                                    "Create account"
                                } else {
                                    "Sign in"
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
