//! Per-step required-field checks.
//!
//! Run before every forward transition; a failure blocks advancement and
//! names the blank fields by their on-screen labels.

use crate::error::StepError;

use super::form::WizardForm;
use super::step::Step;

/// Validate one step against the aggregate.
pub fn validate_step(step: Step, form: &WizardForm) -> Result<(), StepError> {
    let mut missing = Vec::new();
    match step {
        Step::OrgBasicInfo => {
            require(&form.organization.name, "Organization name", &mut missing);
            require(&form.organization.industry, "Industry", &mut missing);
            require(&form.organization.size, "Company size", &mut missing);
        }
        Step::OrgFinancial => {
            require(&form.organization.funding_status, "Funding status", &mut missing);
            require(&form.organization.revenue_band, "Revenue band", &mut missing);
            if form.organization.profitable.is_none() {
                missing.push("Profitability");
            }
        }
        Step::OrgPurpose => {
            require(&form.organization.mission, "Mission", &mut missing);
        }
        Step::TeamBasics => {
            require(&form.team.title, "Team name", &mut missing);
        }
        Step::TeamWorkstyle => {
            require(&form.team.location_mode, "Location mode", &mut missing);
            require(&form.team.pace, "Pace", &mut missing);
        }
        Step::TeamCulture => {
            if form.team.values.is_empty() {
                missing.push("Team values");
            }
        }
        Step::HiringIntent => {
            if form.hiring_intent.headcount == 0 {
                missing.push("Number of hires");
            }
            require(&form.hiring_intent.timeline, "Hire timeline", &mut missing);
        }
        Step::JobPersona => {
            require(&form.job_persona.title, "Role title", &mut missing);
            require(&form.job_persona.seniority, "Seniority", &mut missing);
            require(&form.job_persona.compensation, "Compensation", &mut missing);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StepError { missing })
    }
}

fn require(value: &str, label: &'static str, missing: &mut Vec<&'static str>) {
    if value.trim().is_empty() {
        missing.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_aggregate_fails_the_first_step_with_all_labels() {
        let err = validate_step(Step::OrgBasicInfo, &WizardForm::default()).unwrap_err();
        assert_eq!(err.missing, vec!["Organization name", "Industry", "Company size"]);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = WizardForm::default();
        form.organization.name = "   ".into();
        form.organization.industry = "Robotics".into();
        form.organization.size = "11-50".into();
        let err = validate_step(Step::OrgBasicInfo, &form).unwrap_err();
        assert_eq!(err.missing, vec!["Organization name"]);
    }

    #[test]
    fn profitability_must_be_answered_not_just_truthy() {
        let mut form = WizardForm::default();
        form.organization.funding_status = "Bootstrapped".into();
        form.organization.revenue_band = "$1M-$5M".into();
        assert!(validate_step(Step::OrgFinancial, &form).is_err());
        form.organization.profitable = Some(false);
        assert!(validate_step(Step::OrgFinancial, &form).is_ok());
    }

    #[test]
    fn hiring_intent_needs_a_nonzero_headcount() {
        let mut form = WizardForm::default();
        form.hiring_intent.timeline = "0-3 months".into();
        let err = validate_step(Step::HiringIntent, &form).unwrap_err();
        assert_eq!(err.missing, vec!["Number of hires"]);
        form.hiring_intent.headcount = 2;
        assert!(validate_step(Step::HiringIntent, &form).is_ok());
    }

    #[test]
    fn team_culture_needs_at_least_one_value() {
        let mut form = WizardForm::default();
        assert!(validate_step(Step::TeamCulture, &form).is_err());
        form.team.values.push("Ownership".into());
        assert!(validate_step(Step::TeamCulture, &form).is_ok());
    }
}
