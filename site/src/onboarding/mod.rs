//! The onboarding wizard UI.
//!
//! [`OnboardingWizard`] owns a [`Wizard`] signal and renders exactly one
//! step's content at a time. Forward motion validates through the state
//! machine; phase boundaries additionally persist to the backend before the
//! wizard moves on. Every failure alerts and stays put with the entered
//! data intact. The aggregate auto-saves to localStorage on a debounce so a
//! reload resumes where the user left off.

mod steps;

use std::time::Duration;

use hireframe::api::ApiClient;
use hireframe::config::ApiConfig;
use hireframe::model::{JobPost, TeamPatch, UserPatch};
use hireframe::session::{RoleSelection, Session};
use hireframe::wizard::form::WizardForm;
use hireframe::wizard::{Step, Wizard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert;
use crate::storage::{self, BrowserStore};

use steps::{
    HiringIntentStep, JobPersonaStep, OrgBasicInfoStep, OrgFinancialStep, OrgPurposeStep,
    TeamBasicsStep, TeamCultureStep, TeamWorkstyleStep,
};

/// Quiet period before a draft write; newer edits reschedule it.
const AUTOSAVE_DELAY: Duration = Duration::from_millis(600);

/// Client carrying the session's bearer token.
pub(crate) fn authed_client() -> ApiClient {
    let session = Session::load(&BrowserStore);
    ApiClient::with_token(ApiConfig::default(), session.auth_token)
}

/// Resume from the auto-save draft, or from an older session's
/// hiring-intent draft, or start fresh.
fn restore_wizard() -> Wizard {
    if let Some(form) = storage::load_wizard_draft() {
        return Wizard::from_form(form);
    }
    let session = Session::load(&BrowserStore);
    match session.hiring_intent_draft {
        Some(draft) => {
            let form = WizardForm {
                hiring_intent: draft,
                ..Default::default()
            };
            Wizard::from_form(form)
        }
        None => Wizard::new(),
    }
}

#[component]
pub fn OnboardingWizard() -> impl IntoView {
    let wizard = RwSignal::new(restore_wizard());
    let busy = RwSignal::new(false);
    // Memoized so typing into a step re-renders its inputs, not the step
    // itself (a remount would drop input focus).
    let current = Memo::new(move |_| wizard.with(|w| w.current()));

    // Debounced auto-save of the aggregate.
    let pending_save = StoredValue::new_local(None::<TimeoutHandle>);
    Effect::new(move |_| {
        let form = wizard.with(|w| w.form().clone());
        if let Some(handle) = pending_save.get_value() {
            handle.clear();
        }
        let handle =
            set_timeout_with_handle(move || storage::save_wizard_draft(&form), AUTOSAVE_DELAY).ok();
        pending_save.set_value(handle);
    });

    let back = move |_| {
        wizard.update(|w| {
            w.back();
        });
    };

    let advance = move |_| {
        if busy.get() {
            return;
        }
        if let Err(err) = wizard.with(|w| w.validate_current()) {
            alert(&err.to_string());
            return;
        }
        match wizard.with(|w| w.current()) {
            Step::OrgPurpose => submit_organization(wizard, busy),
            Step::TeamCulture => submit_team(wizard, busy),
            Step::HiringIntent => save_hiring_intent(wizard),
            Step::JobPersona => submit_job_post(wizard, busy),
            // Steps inside a phase only move the pointer.
            _ => wizard.update(|w| {
                let _ = w.try_advance();
            }),
        }
    };

    let next_label = move || {
        if busy.get() {
            return "Saving...";
        }
        match wizard.with(|w| w.current()) {
            Step::OrgPurpose => "Complete Organization",
            Step::TeamCulture => "Complete Team",
            Step::JobPersona => "Create Job Post",
            _ => "Next",
        }
    };

    view! {
        <section class="onboarding">
            <div class="container onboarding-layout">
                <ProgressRail wizard=wizard />
                <div class="onboarding-panel">
                    <Show
                        when=move || !wizard.with(|w| w.is_finished())
                        fallback=move || view! { <DonePanel /> }
                    >
                        <header class="step-header">
                            <p class="step-eyebrow">
                                {move || current.get().main().title()}
                            </p>
                            <h2 class="step-title">{move || current.get().title()}</h2>
                        </header>

                        {move || current_step_view(current.get(), wizard)}

                        <div class="onboarding-actions">
                            <Show when=move || wizard.with(|w| w.current().prev().is_some())>
                                <button class="btn btn-secondary" on:click=back>
                                    "Back"
                                </button>
                            </Show>
                            <button
                                class="btn btn-primary"
                                disabled=move || busy.get()
                                on:click=advance
                            >
                                {next_label}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Exactly one step's content is mounted at a time.
fn current_step_view(step: Step, wizard: RwSignal<Wizard>) -> AnyView {
    match step {
        Step::OrgBasicInfo => view! { <OrgBasicInfoStep wizard=wizard /> }.into_any(),
        Step::OrgFinancial => view! { <OrgFinancialStep wizard=wizard /> }.into_any(),
        Step::OrgPurpose => view! { <OrgPurposeStep wizard=wizard /> }.into_any(),
        Step::TeamBasics => view! { <TeamBasicsStep wizard=wizard /> }.into_any(),
        Step::TeamWorkstyle => view! { <TeamWorkstyleStep wizard=wizard /> }.into_any(),
        Step::TeamCulture => view! { <TeamCultureStep wizard=wizard /> }.into_any(),
        Step::HiringIntent => view! { <HiringIntentStep wizard=wizard /> }.into_any(),
        Step::JobPersona => view! { <JobPersonaStep wizard=wizard /> }.into_any(),
    }
}

#[component]
fn ProgressRail(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <aside class="onboarding-rail">
            {Step::ALL
                .iter()
                .map(|&step| {
                    let group = (step.sub_index() == 0)
                        .then(|| view! { <p class="rail-group">{step.main().title()}</p> });
                    let class = move || {
                        let (current, done) =
                            wizard.with(|w| (w.current() == step, w.is_completed(step)));
                        if current {
                            "rail-step active"
                        } else if done {
                            "rail-step done"
                        } else {
                            "rail-step"
                        }
                    };
                    // Clicks only land on completed earlier steps; the
                    // state machine ignores everything else.
                    view! {
                        {group}
                        <button
                            class=class
                            on:click=move |_| wizard.update(|w| {
                                let _ = w.go_to(step);
                            })
                        >
                            {step.title()}
                        </button>
                    }
                })
                .collect_view()}
        </aside>
    }
}

#[component]
fn DonePanel() -> impl IntoView {
    let session = Session::load(&BrowserStore);
    let organization = session
        .organization_name
        .clone()
        .unwrap_or_else(|| "your organization".into());
    let team = session.team_name.clone().unwrap_or_else(|| "your team".into());

    let posts = RwSignal::new(Vec::<JobPost>::new());
    if let Some(team_id) = session.last_team_id {
        spawn_local(async move {
            let client = authed_client();
            match client.job_posts_by_team(team_id).await {
                Ok(list) => posts.set(list),
                Err(err) => alert(&err.to_string()),
            }
        });
    }

    view! {
        <div class="done-panel">
            <h2 class="step-title">"You're set up"</h2>
            <p class="done-summary">
                {format!("{organization} and {team} are live, and your first job post is out.")}
            </p>
            <div class="done-posts">
                {move || {
                    posts
                        .get()
                        .into_iter()
                        .map(|post| {
                            view! {
                                <article class="done-post">
                                    <span class="done-post-title">{post.title}</span>
                                    <span class="done-post-meta">
                                        {post.timeline.unwrap_or_default()}
                                    </span>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <a href="/" class="btn btn-primary">"Back to home"</a>
        </div>
    }
}

fn submit_organization(wizard: RwSignal<Wizard>, busy: RwSignal<bool>) {
    let payload = wizard.with(|w| w.form().organization.to_payload());
    busy.set(true);
    spawn_local(async move {
        let store = BrowserStore;
        let mut session = Session::load(&store);
        let client = ApiClient::with_token(ApiConfig::default(), session.auth_token.clone());

        // Re-running the phase updates the row created the first time.
        let result = match session.last_organization_id {
            Some(id) => client.update_organization(id, &payload).await,
            None => client.create_organization(&payload).await,
        };

        match result {
            Ok(org) => {
                session.last_organization_id = Some(org.id);
                session.organization_name = Some(org.name.clone());
                // Move the profile's onboarding flags; best-effort, the
                // wizard does not block on it.
                if let Ok(user) = client
                    .update_me(
                        &UserPatch {
                            onboarding_stage: Some("organization".into()),
                            organization_complete: Some(true),
                            ..Default::default()
                        },
                        session.current_user.as_ref(),
                    )
                    .await
                {
                    session.current_user = Some(user);
                }
                session.save(&store);
                wizard.update(|w| {
                    let _ = w.try_advance();
                });
            }
            Err(err) => alert(&err.to_string()),
        }
        busy.set(false);
    });
}

fn submit_team(wizard: RwSignal<Wizard>, busy: RwSignal<bool>) {
    let store = BrowserStore;
    let session = Session::load(&store);
    let Some(organization_id) = session.last_organization_id else {
        alert("Complete the organization steps first");
        return;
    };
    let payload = wizard.with(|w| w.form().team.to_payload(organization_id));
    busy.set(true);
    spawn_local(async move {
        let mut session = Session::load(&store);
        let client = ApiClient::with_token(ApiConfig::default(), session.auth_token.clone());

        let result = match session.last_team_id {
            Some(id) => {
                let patch = TeamPatch {
                    title: Some(payload.title.clone()),
                    function: payload.function.clone(),
                    location_mode: payload.location_mode.clone(),
                    pace: payload.pace.clone(),
                    collaboration: payload.collaboration.clone(),
                    values: Some(payload.values.clone()),
                    culture_summary: payload.culture_summary.clone(),
                };
                client.update_team(id, &patch).await
            }
            None => client.create_team(&payload).await,
        };

        match result {
            Ok(team) => {
                session.last_team_id = Some(team.id);
                session.team_name = Some(team.title.clone());
                if let Ok(user) = client
                    .update_me(
                        &UserPatch {
                            onboarding_stage: Some("team".into()),
                            team_complete: Some(true),
                            ..Default::default()
                        },
                        session.current_user.as_ref(),
                    )
                    .await
                {
                    session.current_user = Some(user);
                }
                session.save(&store);
                wizard.update(|w| {
                    let _ = w.try_advance();
                });
            }
            Err(err) => alert(&err.to_string()),
        }
        busy.set(false);
    });
}

/// Hiring intent has no backend resource of its own; the draft rides in the
/// session until the job post is created.
fn save_hiring_intent(wizard: RwSignal<Wizard>) {
    let store = BrowserStore;
    let mut session = Session::load(&store);
    session.hiring_intent_draft = Some(wizard.with(|w| w.form().hiring_intent.clone()));
    session.save(&store);
    wizard.update(|w| {
        let _ = w.try_advance();
    });
}

fn submit_job_post(wizard: RwSignal<Wizard>, busy: RwSignal<bool>) {
    let store = BrowserStore;
    let session = Session::load(&store);
    let Some(team_id) = session.last_team_id else {
        alert("Complete the team steps first");
        return;
    };
    let payload = wizard.with(|w| w.form().job_post_payload(team_id));
    busy.set(true);
    spawn_local(async move {
        let mut session = Session::load(&store);
        let client = ApiClient::with_token(ApiConfig::default(), session.auth_token.clone());

        match client.create_job_post(&payload).await {
            Ok(post) => {
                session.role_selection = Some(RoleSelection {
                    role_id: post.role_id.unwrap_or_default(),
                    title: post.title.clone(),
                });
                session.complete_role_selection = true;
                if let Ok(user) = client
                    .update_me(
                        &UserPatch {
                            onboarding_stage: Some("complete".into()),
                            ..Default::default()
                        },
                        session.current_user.as_ref(),
                    )
                    .await
                {
                    session.current_user = Some(user);
                }
                session.save(&store);
                storage::clear_wizard_draft();
                wizard.update(|w| {
                    let _ = w.try_advance();
                });
            }
            Err(err) => alert(&err.to_string()),
        }
        busy.set(false);
    });
}
