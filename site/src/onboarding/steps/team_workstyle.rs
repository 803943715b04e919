use hireframe::wizard::form::TeamPatch;
use hireframe::wizard::{SectionPatch, Wizard};
use leptos::prelude::*;

use super::SelectField;

const LOCATION_MODES: &[&str] = &["remote", "hybrid", "onsite"];

const PACES: &[&str] = &["steady", "sprint-heavy", "deadline-driven"];

const COLLABORATION: &[&str] = &[
    "async-first",
    "meeting-light",
    "pair-often",
    "heads-down",
];

#[component]
pub fn TeamWorkstyleStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let patch = move |p: TeamPatch| {
        wizard.update(|w| w.update_section(SectionPatch::Team(p)));
    };

    view! {
        <div class="step-form">
            <p class="step-hint">
                "\"Fast-paced\" means something different on every team. Pick the words that are true."
            </p>

            <SelectField
                label="Location mode"
                prompt="Where does the work happen?"
                options=LOCATION_MODES
                value=Signal::derive(move || wizard.with(|w| w.form().team.location_mode.clone()))
                on_change=Callback::new(move |location_mode| patch(TeamPatch {
                    location_mode: Some(location_mode),
                    ..Default::default()
                }))
            />

            <SelectField
                label="Pace"
                prompt="How does a normal week feel?"
                options=PACES
                value=Signal::derive(move || wizard.with(|w| w.form().team.pace.clone()))
                on_change=Callback::new(move |pace| patch(TeamPatch {
                    pace: Some(pace),
                    ..Default::default()
                }))
            />

            <SelectField
                label="Collaboration style"
                prompt="How do you work together?"
                options=COLLABORATION
                value=Signal::derive(move || wizard.with(|w| w.form().team.collaboration.clone()))
                on_change=Callback::new(move |collaboration| patch(TeamPatch {
                    collaboration: Some(collaboration),
                    ..Default::default()
                }))
            />
        </div>
    }
}
