use hireframe::wizard::form::TeamPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::SelectField;

const FUNCTIONS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Sales",
    "Marketing",
    "Customer Success",
    "Data",
    "Operations",
];

#[component]
pub fn TeamBasicsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: TeamPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Team(p)));
    };

    view! {
        <div class="step-form">
            <p class="step-hint">
                "This is the team the new hire joins — not the org chart, the actual people."
            </p>

            <label class="field">
                <span class="field-label">"Team name"</span>
                <input
                    type="text"
                    placeholder="Platform"
                    prop:value=move || wizard.with(|w| w.form().team.title.clone())
                    on:input=move |ev| patch(TeamPatch {
                        title: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                />
            </label>

            <SelectField
                label="Function"
                prompt="What does this team do?"
                options=FUNCTIONS
                value=Signal::derive(move || wizard.with(|w| w.form().team.function.clone()))
                on_change=Callback::new(move |function| patch(TeamPatch {
                    function: Some(function),
                    ..Default::default()
                }))
            />
        </div>
    }
}
