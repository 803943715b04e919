//! Named wizard states and the transition table.
//!
//! Step gating is a finite-state machine: forward motion goes through
//! validation one step at a time, back is always allowed, and arbitrary
//! jumps are only allowed backward onto steps already completed. The policy
//! lives in [`transition_target`] so it is testable without any UI.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Top-level wizard phase, used for the progress rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainStep {
    Organization,
    Team,
    HiringIntent,
    JobPersona,
}

impl MainStep {
    pub fn title(self) -> &'static str {
        match self {
            MainStep::Organization => "Organization",
            MainStep::Team => "Team",
            MainStep::HiringIntent => "Hiring Intent",
            MainStep::JobPersona => "Job Persona",
        }
    }
}

/// One wizard screen. Variant order is the flow order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Step {
    OrgBasicInfo,
    OrgFinancial,
    OrgPurpose,
    TeamBasics,
    TeamWorkstyle,
    TeamCulture,
    HiringIntent,
    JobPersona,
}

impl Default for Step {
    fn default() -> Self {
        Step::first()
    }
}

impl Step {
    /// Every step in flow order.
    pub const ALL: [Step; 8] = [
        Step::OrgBasicInfo,
        Step::OrgFinancial,
        Step::OrgPurpose,
        Step::TeamBasics,
        Step::TeamWorkstyle,
        Step::TeamCulture,
        Step::HiringIntent,
        Step::JobPersona,
    ];

    pub fn first() -> Step {
        Step::ALL[0]
    }

    /// Zero-based position in the flow.
    pub fn index(self) -> usize {
        Step::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Step::ALL[i])
    }

    /// Whether this is the last screen of its main phase, i.e. advancing
    /// past it submits that phase to the backend.
    pub fn is_phase_boundary(self) -> bool {
        self.next().map(Step::main) != Some(self.main())
    }

    pub fn main(self) -> MainStep {
        match self {
            Step::OrgBasicInfo | Step::OrgFinancial | Step::OrgPurpose => MainStep::Organization,
            Step::TeamBasics | Step::TeamWorkstyle | Step::TeamCulture => MainStep::Team,
            Step::HiringIntent => MainStep::HiringIntent,
            Step::JobPersona => MainStep::JobPersona,
        }
    }

    /// Zero-based position within the main phase.
    pub fn sub_index(self) -> usize {
        match self {
            Step::OrgBasicInfo | Step::TeamBasics | Step::HiringIntent | Step::JobPersona => 0,
            Step::OrgFinancial | Step::TeamWorkstyle => 1,
            Step::OrgPurpose | Step::TeamCulture => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::OrgBasicInfo => "Basic Info",
            Step::OrgFinancial => "Financial Snapshot",
            Step::OrgPurpose => "Purpose & Identity",
            Step::TeamBasics => "Team Basics",
            Step::TeamWorkstyle => "Workstyle",
            Step::TeamCulture => "Culture",
            Step::HiringIntent => "Hiring Intent",
            Step::JobPersona => "Job Persona",
        }
    }
}

/// A requested move through the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Advance to the successor (callers validate first).
    Next,
    /// Return to the predecessor, no validation.
    Back,
    /// Jump directly to a step, e.g. from the progress rail.
    JumpTo(Step),
}

/// The transition table: where `transition` leads from `current`, or `None`
/// when the move is not allowed.
///
/// Jumps are backward-only and only onto completed steps; forward jumps must
/// go through `Next` so validation cannot be skipped.
pub fn transition_target(
    current: Step,
    transition: Transition,
    completed: &BTreeSet<Step>,
) -> Option<Step> {
    match transition {
        Transition::Next => current.next(),
        Transition::Back => current.prev(),
        Transition::JumpTo(target) => {
            if target.index() < current.index() && completed.contains(&target) {
                Some(target)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_through(step: Step) -> BTreeSet<Step> {
        Step::ALL.iter().copied().take_while(|&s| s != step).collect()
    }

    #[test]
    fn steps_are_ordered_and_linked() {
        for pair in Step::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].prev(), Some(pair[0]));
        }
        assert_eq!(Step::first().prev(), None);
        assert_eq!(Step::JobPersona.next(), None);
    }

    #[test]
    fn sub_indices_restart_at_each_main_phase() {
        assert_eq!(Step::OrgBasicInfo.sub_index(), 0);
        assert_eq!(Step::OrgPurpose.sub_index(), 2);
        assert_eq!(Step::TeamBasics.sub_index(), 0);
        assert_eq!(Step::HiringIntent.sub_index(), 0);
    }

    #[test]
    fn phase_boundaries_are_the_submit_screens() {
        let boundaries: Vec<Step> = Step::ALL
            .iter()
            .copied()
            .filter(|s| s.is_phase_boundary())
            .collect();
        assert_eq!(
            boundaries,
            vec![
                Step::OrgPurpose,
                Step::TeamCulture,
                Step::HiringIntent,
                Step::JobPersona
            ]
        );
    }

    #[test]
    fn backward_jump_onto_completed_step_is_allowed() {
        let completed = completed_through(Step::TeamWorkstyle);
        assert_eq!(
            transition_target(
                Step::TeamWorkstyle,
                Transition::JumpTo(Step::OrgBasicInfo),
                &completed
            ),
            Some(Step::OrgBasicInfo)
        );
    }

    #[test]
    fn forward_jump_is_blocked_even_past_completed_steps() {
        let completed = completed_through(Step::TeamWorkstyle);
        assert_eq!(
            transition_target(
                Step::OrgBasicInfo,
                Transition::JumpTo(Step::TeamBasics),
                &completed
            ),
            None
        );
        assert_eq!(
            transition_target(
                Step::TeamWorkstyle,
                Transition::JumpTo(Step::JobPersona),
                &completed
            ),
            None
        );
    }

    #[test]
    fn backward_jump_onto_uncompleted_step_is_blocked() {
        // Completed set can have holes after a backward jump and re-edit.
        let mut completed = completed_through(Step::TeamWorkstyle);
        completed.remove(&Step::OrgFinancial);
        assert_eq!(
            transition_target(
                Step::TeamWorkstyle,
                Transition::JumpTo(Step::OrgFinancial),
                &completed
            ),
            None
        );
    }

    #[test]
    fn back_walks_one_step_and_stops_at_the_start() {
        let none = BTreeSet::new();
        assert_eq!(
            transition_target(Step::OrgFinancial, Transition::Back, &none),
            Some(Step::OrgBasicInfo)
        );
        assert_eq!(transition_target(Step::OrgBasicInfo, Transition::Back, &none), None);
    }
}
