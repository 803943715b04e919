use hireframe::wizard::form::HiringIntentPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::SelectField;

const TIMELINES: &[&str] = &["0-3 months", "3-6 months", "6-12 months", "exploratory"];

#[component]
pub fn HiringIntentStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: HiringIntentPatch| {
        wizard.update(|w| w.update_section(SectionPatch::HiringIntent(p)));
    };

    view! {
        <div class="step-form">
            <label class="field">
                <span class="field-label">
                    "Why are you hiring? " <span class="field-optional">"(optional)"</span>
                </span>
                <textarea
                    rows="3"
                    placeholder="New product line, backfill, too much on-call..."
                    prop:value=move || wizard.with(|w| w.form().hiring_intent.reason.clone())
                    on:input=move |ev| patch(HiringIntentPatch {
                        reason: Some(event_target_value(&ev)),
                        ..Default::default()
                    })
                ></textarea>
            </label>

            <label class="field">
                <span class="field-label">"Number of hires"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || {
                        let headcount = wizard.with(|w| w.form().hiring_intent.headcount);
                        if headcount == 0 { String::new() } else { headcount.to_string() }
                    }
                    on:input=move |ev| patch(HiringIntentPatch {
                        headcount: Some(event_target_value(&ev).parse().unwrap_or(0)),
                        ..Default::default()
                    })
                />
            </label>

            <SelectField
                label="Hire timeline"
                prompt="When do they start?"
                options=TIMELINES
                value=Signal::derive(move || wizard.with(|w| w.form().hiring_intent.timeline.clone()))
                on_change=Callback::new(move |timeline| patch(HiringIntentPatch {
                    timeline: Some(timeline),
                    ..Default::default()
                }))
            />
        </div>
    }
}
