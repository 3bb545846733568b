use serde::{Deserialize, Serialize};
use store::AuthTokens;

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<LoginResponse> for AuthTokens {
    fn from(response: LoginResponse) -> Self {
        AuthTokens {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Account registration payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/forgot-password`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Error envelope the API attaches to rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
