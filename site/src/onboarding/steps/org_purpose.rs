use hireframe::wizard::form::OrganizationPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::TagListField;

#[component]
pub fn OrgPurposeStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: OrganizationPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Organization(p)));
    };

    view! {
        <div class="step-form">
            <label class="field">
                <span class="field-label">"Mission"</span>
                <textarea
                    rows="3"
                    placeholder="One sentence. What does the world get if you win?"
                    prop:value=move || wizard.with(|w| w.form().organization.mission.clone())
                    on:input=move |ev| patch(OrganizationPatch {
                        mission: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                ></textarea>
            </label>

            <label class="field">
                <span class="field-label">
                    "Founding story " <span class="field-optional">"(optional)"</span>
                </span>
                <textarea
                    rows="5"
                    placeholder="How this started, in your own words. Candidates read this."
                    prop:value=move || wizard.with(|w| w.form().organization.story.clone())
                    on:input=move |ev| patch(OrganizationPatch {
                        story: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                ></textarea>
            </label>

            <TagListField
                label="Company values"
                placeholder="e.g. Ship weekly"
                items=Signal::derive(move || wizard.with(|w| w.form().organization.values.clone()))
                on_change=Callback::new(move |values| patch(OrganizationPatch {
                    values: Some(values),
                    ..Default::default()
                }))
            />
        </div>
    }
}
