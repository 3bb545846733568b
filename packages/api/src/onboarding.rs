//! # Onboarding decision table
//!
//! A new account goes through three screens in a fixed order: company setup,
//! plan selection, then the dashboard. Which one the user may see is decided
//! from the two flags of [`SetupStatus`]:
//!
//! | hasCompanyInfo | hasActivePlan | setup | plan-selection | dashboard |
//! |---|---|---|---|---|
//! | false | false | allow | → setup | → setup |
//! | false | true  | allow | → setup | → setup |
//! | true  | false | → plan-selection | allow | → plan-selection |
//! | true  | true  | → dashboard | → dashboard | allow |
//!
//! Company info gates everything; the plan flag only counts once company info
//! exists. The whole table collapses to one function,
//! [`resolve_onboarding_target`], which both the route guards and the
//! post-login redirect use. [`decide`] allows a target iff it is the resolved
//! step and otherwise redirects there.
//!
//! When the status cannot be fetched, [`fallback`] applies: setup is always
//! safe to show, everything else goes back to setup.

use crate::models::SetupStatus;

/// The three screens of the onboarding flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    Setup,
    PlanSelection,
    Dashboard,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 3] = [
        OnboardingStep::Setup,
        OnboardingStep::PlanSelection,
        OnboardingStep::Dashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            OnboardingStep::Setup => "/setup",
            OnboardingStep::PlanSelection => "/plan-selection",
            OnboardingStep::Dashboard => "/dashboard",
        }
    }
}

/// Whether navigation to a step may proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(OnboardingStep),
}

impl Access {
    pub fn may_proceed(self) -> bool {
        matches!(self, Access::Allow)
    }

    pub fn redirect(self) -> Option<OnboardingStep> {
        match self {
            Access::Allow => None,
            Access::Redirect(step) => Some(step),
        }
    }
}

/// The one screen a user with this status belongs on.
pub fn resolve_onboarding_target(status: &SetupStatus) -> OnboardingStep {
    if !status.has_company_info {
        OnboardingStep::Setup
    } else if !status.has_active_plan {
        OnboardingStep::PlanSelection
    } else {
        OnboardingStep::Dashboard
    }
}

/// Decide navigation to `target` for a fetched status.
pub fn decide(target: OnboardingStep, status: &SetupStatus) -> Access {
    let resolved = resolve_onboarding_target(status);
    if resolved == target {
        Access::Allow
    } else {
        Access::Redirect(resolved)
    }
}

/// Decision when the status query failed.
pub fn fallback(target: OnboardingStep) -> Access {
    match target {
        OnboardingStep::Setup => Access::Allow,
        OnboardingStep::PlanSelection | OnboardingStep::Dashboard => {
            Access::Redirect(OnboardingStep::Setup)
        }
    }
}
