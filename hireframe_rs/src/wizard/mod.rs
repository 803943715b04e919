//! The onboarding wizard: step state machine, form aggregate, validation.
//!
//! [`Wizard`] is the controller state the UI renders from: the current
//! [`Step`], the set of completed steps, and the owned [`form::WizardForm`]
//! aggregate. Forward motion validates, backward motion never loses data.

pub mod form;
mod step;
mod validate;

use std::collections::BTreeSet;

pub use form::SectionPatch;
pub use step::{transition_target, MainStep, Step, Transition};
pub use validate::validate_step;

use crate::error::StepError;
use form::WizardForm;

/// Controller state for the onboarding flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wizard {
    current: Step,
    completed: BTreeSet<Step>,
    form: WizardForm,
}

impl Wizard {
    /// A fresh wizard on the first step with an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a saved aggregate (auto-save draft). Steps that already
    /// validate are marked completed and the wizard lands on the first step
    /// that does not. The final step is never assumed complete: a draft only
    /// exists while the job post has not been submitted.
    pub fn from_form(form: WizardForm) -> Self {
        let mut wizard = Self {
            current: Step::first(),
            completed: BTreeSet::new(),
            form,
        };
        for step in Step::ALL {
            wizard.current = step;
            if step.next().is_none() || validate_step(step, &wizard.form).is_err() {
                break;
            }
            wizard.completed.insert(step);
        }
        wizard
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn form(&self) -> &WizardForm {
        &self.form
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    /// Whether every step has passed validation (final submit done).
    pub fn is_finished(&self) -> bool {
        self.completed.len() == Step::ALL.len()
    }

    /// Merge a section patch into the aggregate. Editing a screen means its
    /// previous completion no longer vouches for the data, so the current
    /// step drops out of the completed set until it re-validates.
    pub fn update_section(&mut self, patch: SectionPatch) {
        self.completed.remove(&self.current);
        self.form.apply(patch);
    }

    /// Validate the current step without moving.
    pub fn validate_current(&self) -> Result<(), StepError> {
        validate_step(self.current, &self.form)
    }

    /// Validate, mark the current step completed, and move forward. On the
    /// last step the wizard stays put and only marks completion. Validation
    /// failure leaves the position and data untouched.
    pub fn try_advance(&mut self) -> Result<Step, StepError> {
        self.validate_current()?;
        self.completed.insert(self.current);
        if let Some(next) = transition_target(self.current, Transition::Next, &self.completed) {
            self.current = next;
        }
        Ok(self.current)
    }

    /// Move to the predecessor without validation; no-op on the first step.
    pub fn back(&mut self) -> Step {
        if let Some(prev) = transition_target(self.current, Transition::Back, &self.completed) {
            self.current = prev;
        }
        self.current
    }

    /// Jump to an already-completed earlier step. Returns whether the jump
    /// was taken; forward jumps never are.
    pub fn go_to(&mut self, target: Step) -> bool {
        match transition_target(self.current, Transition::JumpTo(target), &self.completed) {
            Some(step) => {
                self.current = step;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::form::{HiringIntentPatch, OrganizationPatch, TeamPatch};
    use super::*;
    use pretty_assertions::assert_eq;

    fn org_basic_info() -> SectionPatch {
        SectionPatch::Organization(OrganizationPatch {
            name: Some("Acme Robotics".into()),
            industry: Some("Robotics".into()),
            size: Some("11-50".into()),
            ..Default::default()
        })
    }

    #[test]
    fn new_wizard_starts_on_the_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current(), Step::OrgBasicInfo);
        assert!(!wizard.is_finished());
    }

    #[test]
    fn advance_is_blocked_until_required_fields_are_present() {
        let mut wizard = Wizard::new();
        let err = wizard.try_advance().unwrap_err();
        assert!(err.missing.contains(&"Organization name"));
        assert_eq!(wizard.current(), Step::OrgBasicInfo);

        wizard.update_section(org_basic_info());
        assert_eq!(wizard.try_advance().unwrap(), Step::OrgFinancial);
        assert!(wizard.is_completed(Step::OrgBasicInfo));
    }

    #[test]
    fn back_never_validates_and_keeps_entered_data() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        wizard.try_advance().unwrap();
        wizard.update_section(SectionPatch::Organization(OrganizationPatch {
            funding_status: Some("Seed".into()),
            ..Default::default()
        }));

        assert_eq!(wizard.back(), Step::OrgBasicInfo);
        assert_eq!(wizard.form().organization.funding_status, "Seed");
        assert_eq!(wizard.form().organization.name, "Acme Robotics");
    }

    #[test]
    fn jumps_follow_the_transition_table() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        wizard.try_advance().unwrap();

        assert!(!wizard.go_to(Step::TeamBasics), "forward jump must be blocked");
        assert_eq!(wizard.current(), Step::OrgFinancial);

        assert!(wizard.go_to(Step::OrgBasicInfo));
        assert_eq!(wizard.current(), Step::OrgBasicInfo);
    }

    #[test]
    fn editing_a_step_revokes_its_completion() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        wizard.try_advance().unwrap();
        wizard.go_to(Step::OrgBasicInfo);

        wizard.update_section(SectionPatch::Organization(OrganizationPatch {
            name: Some(String::new()),
            ..Default::default()
        }));
        assert!(!wizard.is_completed(Step::OrgBasicInfo));
        assert!(wizard.try_advance().is_err());
    }

    #[test]
    fn full_walk_reaches_finished() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::Organization(OrganizationPatch {
            funding_status: Some("Seed".into()),
            revenue_band: Some("<$1M".into()),
            profitable: Some(false),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::Organization(OrganizationPatch {
            mission: Some("Robots that assemble robots".into()),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::Team(TeamPatch {
            title: Some("Platform".into()),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::Team(TeamPatch {
            location_mode: Some("remote".into()),
            pace: Some("steady".into()),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::Team(TeamPatch {
            values: Some(vec!["Ownership".into()]),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        wizard.update_section(SectionPatch::HiringIntent(HiringIntentPatch {
            headcount: Some(2),
            timeline: Some("0-3 months".into()),
            ..Default::default()
        }));
        assert_eq!(wizard.try_advance().unwrap(), Step::JobPersona);

        wizard.update_section(SectionPatch::JobPersona(form::JobPersonaPatch {
            title: Some("Backend Engineer".into()),
            seniority: Some("Senior".into()),
            compensation: Some("$140k-$180k".into()),
            ..Default::default()
        }));
        assert_eq!(wizard.try_advance().unwrap(), Step::JobPersona);
        assert!(wizard.is_finished());
    }

    #[test]
    fn from_form_resumes_at_the_first_incomplete_step() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        wizard.try_advance().unwrap();
        wizard.update_section(SectionPatch::Organization(OrganizationPatch {
            funding_status: Some("Seed".into()),
            revenue_band: Some("<$1M".into()),
            profitable: Some(true),
            ..Default::default()
        }));
        wizard.try_advance().unwrap();

        let resumed = Wizard::from_form(wizard.form().clone());
        assert_eq!(resumed.current(), Step::OrgPurpose);
        assert!(resumed.is_completed(Step::OrgBasicInfo));
        assert!(resumed.is_completed(Step::OrgFinancial));
        assert_eq!(resumed.form(), wizard.form());
    }

    #[test]
    fn from_form_never_assumes_the_final_submit_happened() {
        let mut wizard = Wizard::new();
        wizard.update_section(org_basic_info());
        let mut form = wizard.form().clone();
        form.organization.funding_status = "Seed".into();
        form.organization.revenue_band = "<$1M".into();
        form.organization.profitable = Some(false);
        form.organization.mission = "Robots that assemble robots".into();
        form.team.title = "Platform".into();
        form.team.location_mode = "remote".into();
        form.team.pace = "steady".into();
        form.team.values = vec!["Ownership".into()];
        form.hiring_intent.headcount = 1;
        form.hiring_intent.timeline = "0-3 months".into();
        form.job_persona.title = "Backend Engineer".into();
        form.job_persona.seniority = "Senior".into();
        form.job_persona.compensation = "$140k-$180k".into();

        let resumed = Wizard::from_form(form);
        assert_eq!(resumed.current(), Step::JobPersona);
        assert!(!resumed.is_finished());
    }
}
