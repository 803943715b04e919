//! The step aggregate: everything the wizard has collected so far.
//!
//! Sections are plain records with every field defaulting to empty, so a
//! partially-saved aggregate deserializes cleanly and step components never
//! see a missing section. Edits arrive as all-`Option` patches that merge
//! into a section without touching sibling fields.

use serde::{Deserialize, Serialize};

use crate::model::{NewJobPost, NewOrganization, NewTeam};

/// Combined form data accumulated across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardForm {
    pub organization: OrganizationForm,
    pub team: TeamForm,
    pub hiring_intent: HiringIntentForm,
    pub job_persona: JobPersonaForm,
}

impl WizardForm {
    /// Merge one section's edits into the aggregate.
    pub fn apply(&mut self, patch: SectionPatch) {
        match patch {
            SectionPatch::Organization(p) => p.apply(&mut self.organization),
            SectionPatch::Team(p) => p.apply(&mut self.team),
            SectionPatch::HiringIntent(p) => p.apply(&mut self.hiring_intent),
            SectionPatch::JobPersona(p) => p.apply(&mut self.job_persona),
        }
    }

    /// Create payload for the job post, combining the persona section with
    /// the hire timeline collected in the hiring-intent section.
    pub fn job_post_payload(&self, team_id: i64) -> NewJobPost {
        let persona = &self.job_persona;
        NewJobPost {
            team_id,
            role_id: persona.role_id,
            title: persona.title.trim().to_string(),
            seniority: opt(&persona.seniority),
            timeline: opt(&self.hiring_intent.timeline),
            compensation: opt(&persona.compensation),
            skills: persona.skills.clone(),
            traits: persona.traits.clone(),
            summary: opt(&persona.summary),
        }
    }
}

/// A single section's edits. Only `Some` fields are written.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPatch {
    Organization(OrganizationPatch),
    Team(TeamPatch),
    HiringIntent(HiringIntentPatch),
    JobPersona(JobPersonaPatch),
}

/// Organization section: basic info, financial snapshot, purpose & identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationForm {
    pub name: String,
    pub industry: String,
    pub website: String,
    /// Employee-count band, e.g. "11-50".
    pub size: String,
    pub funding_status: String,
    pub revenue_band: String,
    pub profitable: Option<bool>,
    pub mission: String,
    pub story: String,
    pub values: Vec<String>,
}

impl OrganizationForm {
    /// Create/update payload for the organization resource.
    pub fn to_payload(&self) -> NewOrganization {
        NewOrganization {
            name: self.name.trim().to_string(),
            industry: opt(&self.industry),
            website: opt(&self.website),
            size: opt(&self.size),
            funding_status: opt(&self.funding_status),
            revenue_band: opt(&self.revenue_band),
            profitable: self.profitable,
            mission: opt(&self.mission),
            story: opt(&self.story),
            values: self.values.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub size: Option<String>,
    pub funding_status: Option<String>,
    pub revenue_band: Option<String>,
    pub profitable: Option<bool>,
    pub mission: Option<String>,
    pub story: Option<String>,
    pub values: Option<Vec<String>>,
}

impl OrganizationPatch {
    pub fn apply(self, form: &mut OrganizationForm) {
        merge(&mut form.name, self.name);
        merge(&mut form.industry, self.industry);
        merge(&mut form.website, self.website);
        merge(&mut form.size, self.size);
        merge(&mut form.funding_status, self.funding_status);
        merge(&mut form.revenue_band, self.revenue_band);
        if let Some(profitable) = self.profitable {
            form.profitable = Some(profitable);
        }
        merge(&mut form.mission, self.mission);
        merge(&mut form.story, self.story);
        merge(&mut form.values, self.values);
    }
}

/// Team section: basics, workstyle, culture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamForm {
    pub title: String,
    pub function: String,
    /// "remote" | "hybrid" | "onsite".
    pub location_mode: String,
    pub pace: String,
    pub collaboration: String,
    pub values: Vec<String>,
    pub culture_summary: String,
}

impl TeamForm {
    /// Create payload for the team resource.
    pub fn to_payload(&self, organization_id: i64) -> NewTeam {
        NewTeam {
            organization_id,
            title: self.title.trim().to_string(),
            function: opt(&self.function),
            location_mode: opt(&self.location_mode),
            pace: opt(&self.pace),
            collaboration: opt(&self.collaboration),
            values: self.values.clone(),
            culture_summary: opt(&self.culture_summary),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamPatch {
    pub title: Option<String>,
    pub function: Option<String>,
    pub location_mode: Option<String>,
    pub pace: Option<String>,
    pub collaboration: Option<String>,
    pub values: Option<Vec<String>>,
    pub culture_summary: Option<String>,
}

impl TeamPatch {
    pub fn apply(self, form: &mut TeamForm) {
        merge(&mut form.title, self.title);
        merge(&mut form.function, self.function);
        merge(&mut form.location_mode, self.location_mode);
        merge(&mut form.pace, self.pace);
        merge(&mut form.collaboration, self.collaboration);
        merge(&mut form.values, self.values);
        merge(&mut form.culture_summary, self.culture_summary);
    }
}

/// Hiring-intent section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringIntentForm {
    pub reason: String,
    pub headcount: u32,
    /// Hire timeline, e.g. "0-3 months".
    pub timeline: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HiringIntentPatch {
    pub reason: Option<String>,
    pub headcount: Option<u32>,
    pub timeline: Option<String>,
}

impl HiringIntentPatch {
    pub fn apply(self, form: &mut HiringIntentForm) {
        merge(&mut form.reason, self.reason);
        if let Some(headcount) = self.headcount {
            form.headcount = headcount;
        }
        merge(&mut form.timeline, self.timeline);
    }
}

/// Job-persona section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPersonaForm {
    /// Catalog role the persona was seeded from, if any.
    pub role_id: Option<i64>,
    pub title: String,
    pub seniority: String,
    pub compensation: String,
    pub skills: Vec<String>,
    pub traits: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPersonaPatch {
    pub role_id: Option<i64>,
    pub title: Option<String>,
    pub seniority: Option<String>,
    pub compensation: Option<String>,
    pub skills: Option<Vec<String>>,
    pub traits: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl JobPersonaPatch {
    pub fn apply(self, form: &mut JobPersonaForm) {
        if let Some(role_id) = self.role_id {
            form.role_id = Some(role_id);
        }
        merge(&mut form.title, self.title);
        merge(&mut form.seniority, self.seniority);
        merge(&mut form.compensation, self.compensation);
        merge(&mut form.skills, self.skills);
        merge(&mut form.traits, self.traits);
        merge(&mut form.summary, self.summary);
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aggregate_deserializes_with_missing_sections() {
        let form: WizardForm =
            serde_json::from_str(r#"{"organization": {"name": "Acme"}}"#).unwrap();
        assert_eq!(form.organization.name, "Acme");
        assert_eq!(form.organization.industry, "");
        assert_eq!(form.team, TeamForm::default());
        assert!(form.job_persona.skills.is_empty());
    }

    #[test]
    fn patch_round_trips_through_the_aggregate() {
        let mut form = WizardForm::default();
        form.apply(SectionPatch::Organization(OrganizationPatch {
            name: Some("Acme Robotics".into()),
            industry: Some("Robotics".into()),
            website: Some("https://acme.dev".into()),
            ..Default::default()
        }));
        assert_eq!(form.organization.name, "Acme Robotics");
        assert_eq!(form.organization.industry, "Robotics");
        assert_eq!(form.organization.website, "https://acme.dev");
    }

    #[test]
    fn patch_leaves_sibling_fields_untouched() {
        let mut form = WizardForm::default();
        form.apply(SectionPatch::Team(TeamPatch {
            title: Some("Platform".into()),
            values: Some(vec!["Ownership".into()]),
            ..Default::default()
        }));
        form.apply(SectionPatch::Team(TeamPatch {
            pace: Some("steady".into()),
            ..Default::default()
        }));
        assert_eq!(form.team.title, "Platform");
        assert_eq!(form.team.values, vec!["Ownership".to_string()]);
        assert_eq!(form.team.pace, "steady");
    }

    #[test]
    fn patching_one_section_never_touches_another() {
        let mut form = WizardForm::default();
        form.apply(SectionPatch::Organization(OrganizationPatch {
            name: Some("Acme".into()),
            ..Default::default()
        }));
        form.apply(SectionPatch::HiringIntent(HiringIntentPatch {
            headcount: Some(2),
            ..Default::default()
        }));
        assert_eq!(form.organization.name, "Acme");
        assert_eq!(form.hiring_intent.headcount, 2);
        assert_eq!(form.team, TeamForm::default());
    }

    #[test]
    fn organization_payload_drops_blank_optionals() {
        let form = OrganizationForm {
            name: "  Acme  ".into(),
            industry: "Robotics".into(),
            website: "   ".into(),
            ..Default::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.name, "Acme");
        assert_eq!(payload.industry.as_deref(), Some("Robotics"));
        assert_eq!(payload.website, None);
    }

    #[test]
    fn job_post_payload_takes_timeline_from_hiring_intent() {
        let mut form = WizardForm::default();
        form.hiring_intent.timeline = "0-3 months".into();
        form.job_persona.title = "Backend Engineer".into();
        form.job_persona.skills = vec!["Rust".into()];
        let payload = form.job_post_payload(3);
        assert_eq!(payload.team_id, 3);
        assert_eq!(payload.timeline.as_deref(), Some("0-3 months"));
        assert_eq!(payload.skills, vec!["Rust".to_string()]);
    }
}
