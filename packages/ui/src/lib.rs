//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    mark_expired, mark_signed_out, note_api_error, state_after_login, use_api, use_app_config,
    use_provide_session, use_session_state, LogoutButton, SessionProvider, SessionState,
};

mod gate;
pub use gate::{OnboardingGate, SignInGate};

pub mod validation;

#[cfg(test)]
mod test_support;

pub mod views;
pub use views::{
    CreateUserView, DashboardView, ForgotPasswordView, LoginView, PlanSelectionView, SetupView,
};
