//! # Setup status: the onboarding snapshot
//!
//! [`SetupStatus`] is what `GET /users/me/setup-status` returns for the caller:
//! whether the company/tax-registration step is done and whether a billing plan
//! is assigned. The frontend never computes or mutates it; both flags flip
//! server-side when the corresponding step completes. Guards fetch it fresh on
//! every navigation.

use serde::{Deserialize, Serialize};

/// Onboarding progress of the authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupStatus {
    #[serde(default)]
    pub has_company_info: bool,
    #[serde(default)]
    pub has_active_plan: bool,
}

impl SetupStatus {
    pub fn new(has_company_info: bool, has_active_plan: bool) -> Self {
        Self {
            has_company_info,
            has_active_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_payload() {
        let status: SetupStatus =
            serde_json::from_str(r#"{"hasActivePlan":true,"hasCompanyInfo":false}"#).unwrap();
        assert_eq!(status, SetupStatus::new(false, true));
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let status: SetupStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, SetupStatus::default());
    }
}
