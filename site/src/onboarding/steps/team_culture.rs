use hireframe::wizard::form::TeamPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::TagListField;

#[component]
pub fn TeamCultureStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: TeamPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Team(p)));
    };

    view! {
        <div class="step-form">
            <TagListField
                label="Team values"
                placeholder="e.g. Ownership"
                items=Signal::derive(move || wizard.with(|w| w.form().team.values.clone()))
                on_change=Callback::new(move |values| patch(TeamPatch {
                    values: Some(values),
                    ..Default::default()
                }))
            />

            <label class="field">
                <span class="field-label">
                    "Culture in one paragraph " <span class="field-optional">"(optional)"</span>
                </span>
                <textarea
                    rows="4"
                    placeholder="What would a new hire notice in their first two weeks?"
                    prop:value=move || wizard.with(|w| w.form().team.culture_summary.clone())
                    on:input=move |ev| patch(TeamPatch {
                        culture_summary: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                ></textarea>
            </label>
        </div>
    }
}
