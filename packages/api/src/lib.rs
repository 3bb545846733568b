//! # API crate: billing API client and onboarding guards
//!
//! This crate is everything the Billdesk frontend needs to talk to the remote
//! billing API and to decide where a user may navigate. It has no UI code, so
//! every decision here is testable natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: login, registration, password reset, setup status, plans, company setup; clears the session on 401 |
//! | [`error`] | [`ApiError`] taxonomy and user-facing messages |
//! | [`guard`] | [`AuthGate`], onboarding guard evaluation with timeout and cancellation, post-login redirect |
//! | [`models`] | Wire models (`SetupStatus`, `Plan`, `CompanyInfo`, ...) |
//! | [`onboarding`] | The single onboarding decision table shared by every guard |

pub mod client;
pub mod error;
pub mod guard;
pub mod models;
pub mod onboarding;

pub use client::ApiClient;
pub use error::ApiError;
pub use guard::{
    evaluate, evaluate_cancellable, fetch_status, post_login_target, AuthGate, Destination,
    GuardOutcome, SetupStatusProvider, LOGIN_PATH,
};
pub use models::{Attachment, CompanyInfo, NewUser, Plan, SetupStatus};
pub use onboarding::{decide, fallback, resolve_onboarding_target, Access, OnboardingStep};

pub use store::{AppConfig, AuthTokens, Session};
