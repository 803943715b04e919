// Onboarding wizard page
use crate::onboarding::OnboardingWizard;
use leptos::prelude::*;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <OnboardingWizard />
    }
}
