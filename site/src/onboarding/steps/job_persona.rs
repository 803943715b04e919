use hireframe::model::Role;
use hireframe::wizard::form::JobPersonaPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{SelectField, TagListField};
use crate::onboarding::authed_client;

const SENIORITY: &[&str] = &["Junior", "Mid-level", "Senior", "Staff", "Lead"];

#[component]
pub fn JobPersonaStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: JobPersonaPatch| {
        wizard.update(|w| w.update_section(SectionPatch::JobPersona(p)));
    };

    let roles = RwSignal::new(Vec::<Role>::new());
    spawn_local(async move {
        if let Ok(catalog) = authed_client().list_roles().await {
            roles.set(catalog);
        }
    });

    let pick_role = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let Ok(role_id) = raw.parse::<i64>() else {
            return;
        };
        let Some(role) = roles.get().into_iter().find(|r| r.id == role_id) else {
            return;
        };
        // Seed the title from the catalog unless the user already typed one.
        let title_blank = wizard.with(|w| w.form().job_persona.title.trim().is_empty());
        patch(JobPersonaPatch {
            role_id: Some(role.id),
            title: title_blank.then(|| role.title.clone()),
            ..Default::default()
        });
    };

    view! {
        <div class="step-form">
            <label class="field">
                <span class="field-label">"Start from a role"</span>
                <select
                    prop:value=move || {
                        wizard
                            .with(|w| w.form().job_persona.role_id)
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    }
                    on:change=pick_role
                >
                    <option value="" disabled=true selected=move || {
                        wizard.with(|w| w.form().job_persona.role_id.is_none())
                    }>
                        "Pick from the catalog"
                    </option>
                    {move || {
                        roles
                            .get()
                            .into_iter()
                            .map(|role| {
                                let label = format!("{} — {}", role.title, role.category);
                                view! {
                                    <option value=role.id.to_string()>{label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="field">
                <span class="field-label">"Role title"</span>
                <input
                    type="text"
                    placeholder="Senior Backend Engineer"
                    prop:value=move || wizard.with(|w| w.form().job_persona.title.clone())
                    on:input=move |ev| patch(JobPersonaPatch {
                        title: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                />
            </label>

            <SelectField
                label="Seniority"
                prompt="How senior?"
                options=SENIORITY
                value=Signal::derive(move || wizard.with(|w| w.form().job_persona.seniority.clone()))
                on_change=Callback::new(move |seniority| patch(JobPersonaPatch {
                    seniority: Some(seniority),
                    ..Default::default()
                }))
            />

            <label class="field">
                <span class="field-label">"Compensation"</span>
                <input
                    type="text"
                    placeholder="$140k-$180k"
                    prop:value=move || wizard.with(|w| w.form().job_persona.compensation.clone())
                    on:input=move |ev| patch(JobPersonaPatch {
                        compensation: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                />
            </label>

            <TagListField
                label="Must-have skills"
                placeholder="e.g. Rust"
                items=Signal::derive(move || wizard.with(|w| w.form().job_persona.skills.clone()))
                on_change=Callback::new(move |skills| patch(JobPersonaPatch {
                    skills: Some(skills),
                    ..Default::default()
                }))
            />

            <TagListField
                label="Traits that thrive here"
                placeholder="e.g. Writes things down"
                items=Signal::derive(move || wizard.with(|w| w.form().job_persona.traits.clone()))
                on_change=Callback::new(move |traits| patch(JobPersonaPatch {
                    traits: Some(traits),
                    ..Default::default()
                }))
            />

            <label class="field">
                <span class="field-label">
                    "Persona summary " <span class="field-optional">"(optional)"</span>
                </span>
                <textarea
                    rows="4"
                    placeholder="The person we're missing is..."
                    prop:value=move || wizard.with(|w| w.form().job_persona.summary.clone())
                    on:input=move |ev| patch(JobPersonaPatch {
                        summary: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                ></textarea>
            </label>
        </div>
    }
}
