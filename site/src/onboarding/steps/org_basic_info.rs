use hireframe::wizard::form::OrganizationPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::SelectField;

const INDUSTRIES: &[&str] = &[
    "Software",
    "Robotics",
    "Healthcare",
    "Logistics",
    "Finance",
    "Education",
    "Manufacturing",
    "Retail",
    "Other",
];

const SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];

#[component]
pub fn OrgBasicInfoStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: OrganizationPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Organization(p)));
    };

    view! {
        <div class="step-form">
            <label class="field">
                <span class="field-label">"Organization name"</span>
                <input
                    type="text"
                    placeholder="Acme Robotics"
                    prop:value=move || wizard.with(|w| w.form().organization.name.clone())
                    on:input=move |ev| patch(OrganizationPatch {
                        name: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                />
            </label>

            <SelectField
                label="Industry"
                prompt="Select an industry"
                options=INDUSTRIES
                value=Signal::derive(move || wizard.with(|w| w.form().organization.industry.clone()))
                on_change=Callback::new(move |industry| patch(OrganizationPatch {
                    industry: Some(industry),
                    ..Default::default()
                }))
            />

            <label class="field">
                <span class="field-label">"Website " <span class="field-optional">"(optional)"</span></span>
                <input
                    type="url"
                    placeholder="https://acme.dev"
                    prop:value=move || wizard.with(|w| w.form().organization.website.clone())
                    on:input=move |ev| patch(OrganizationPatch {
                        website: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                />
            </label>

            <SelectField
                label="Company size"
                prompt="How many people work here?"
                options=SIZES
                value=Signal::derive(move || wizard.with(|w| w.form().organization.size.clone()))
                on_change=Callback::new(move |size| patch(OrganizationPatch {
                    size: Some(size),
                    ..Default::default()
                }))
            />
        </div>
    }
}
