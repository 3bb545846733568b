mod root;
pub use root::{NotFound, Root};

mod auth;
pub use auth::{CreateUser, ForgotPassword, Login};

mod guards;
pub use guards::{AuthGuard, OnboardingGuard};

mod onboarding;
pub use onboarding::{PlanSelection, Setup};

mod dashboard;
pub use dashboard::{Dashboard, DashboardSection};
