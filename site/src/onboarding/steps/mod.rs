// Wizard step forms. Each step binds its inputs to the aggregate held by
// the controller and writes edits back as section patches, so nothing is
// lost when the user walks backward.

mod hiring_intent;
mod job_persona;
mod org_basic_info;
mod org_financial;
mod org_purpose;
mod team_basics;
mod team_culture;
mod team_workstyle;

pub use hiring_intent::HiringIntentStep;
pub use job_persona::JobPersonaStep;
pub use org_basic_info::OrgBasicInfoStep;
pub use org_financial::OrgFinancialStep;
pub use org_purpose::OrgPurposeStep;
pub use team_basics::TeamBasicsStep;
pub use team_culture::TeamCultureStep;
pub use team_workstyle::TeamWorkstyleStep;

use leptos::prelude::*;

/// Add/remove chip editor for list fields (values, skills, traits).
#[component]
pub fn TagListField(
    label: &'static str,
    placeholder: &'static str,
    items: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add = move |_| {
        let value = draft.get().trim().to_string();
        if value.is_empty() {
            return;
        }
        let mut next = items.get();
        if !next.contains(&value) {
            next.push(value);
            on_change.run(next);
        }
        set_draft.set(String::new());
    };

    view! {
        <div class="field">
            <span class="field-label">{label}</span>
            <div class="tag-input-row">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="button" class="btn btn-secondary tag-add-btn" on:click=add>
                    "Add"
                </button>
            </div>
            <div class="tag-list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let remove = move |_| {
                                let mut next = items.get();
                                next.remove(index);
                                on_change.run(next);
                            };
                            view! {
                                <span class="chip">
                                    {item}
                                    <button type="button" class="chip-remove" on:click=remove>
                                        "x"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Labelled select over a fixed option list, with a disabled prompt row
/// while nothing is picked.
#[component]
pub fn SelectField(
    label: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {prompt}
                </option>
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
