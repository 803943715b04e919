use hireframe::wizard::form::OrganizationPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::SelectField;

const FUNDING: &[&str] = &[
    "Bootstrapped",
    "Pre-seed",
    "Seed",
    "Series A",
    "Series B+",
    "Public",
];

const REVENUE: &[&str] = &["Pre-revenue", "<$1M", "$1M-$5M", "$5M-$20M", "$20M+"];

const PROFITABILITY: &[&str] = &["Yes", "Not yet"];

#[component]
pub fn OrgFinancialStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: OrganizationPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Organization(p)));
    };

    let profitable_value = Signal::derive(move || {
        wizard.with(|w| match w.form().organization.profitable {
            Some(true) => "Yes".to_string(),
            Some(false) => "Not yet".to_string(),
            None => String::new(),
        })
    });

    view! {
        <div class="step-form">
            <p class="step-hint">
                "Candidates ask about runway in the first call anyway. Answering here saves everyone a week."
            </p>

            <SelectField
                label="Funding status"
                prompt="Where does the money come from?"
                options=FUNDING
                value=Signal::derive(move || {
                    wizard.with(|w| w.form().organization.funding_status.clone())
                })
                on_change=Callback::new(move |funding_status| patch(OrganizationPatch {
                    funding_status: Some(funding_status),
                    ..Default::default()
                }))
            />

            <SelectField
                label="Revenue band"
                prompt="Annual revenue, roughly"
                options=REVENUE
                value=Signal::derive(move || {
                    wizard.with(|w| w.form().organization.revenue_band.clone())
                })
                on_change=Callback::new(move |revenue_band| patch(OrganizationPatch {
                    revenue_band: Some(revenue_band),
                    ..Default::default()
                }))
            />

            <SelectField
                label="Profitability"
                prompt="Profitable today?"
                options=PROFITABILITY
                value=profitable_value
                on_change=Callback::new(move |answer: String| patch(OrganizationPatch {
                    profitable: Some(answer == "Yes"),
                    ..Default::default()
                }))
            />
        </div>
    }
}
