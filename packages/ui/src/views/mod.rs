mod auth_card;
pub use auth_card::{AuthCard, ErrorBanner};

mod login;
pub use login::LoginView;

mod create_user;
pub use create_user::CreateUserView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod setup;
pub use setup::SetupView;

mod plan_selection;
pub use plan_selection::PlanSelectionView;

mod dashboard;
pub use dashboard::{section_title, DashboardView, DASHBOARD_SECTIONS};
