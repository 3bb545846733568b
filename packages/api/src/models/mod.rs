//! Wire models for the billing API.

mod account;
mod company;
mod plan;
mod setup;

pub use account::{ErrorBody, LoginResponse, NewUser, PasswordResetRequest};
pub use company::{Attachment, CompanyInfo};
pub use plan::{AssignPlanRequest, Plan};
pub use setup::SetupStatus;
