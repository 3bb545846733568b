//! # Billing API client
//!
//! [`ApiClient`] is the only place the frontend talks HTTP. It wraps a
//! [`reqwest::Client`] (the browser `fetch` API on WASM), the configured base URL
//! and the injected [`Session`] holding the bearer token.
//!
//! ## Endpoints
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`login`](ApiClient::login) | `POST /auth/login` | Basic `email:password` |
//! | [`create_user`](ApiClient::create_user) | `POST /users` | none |
//! | [`forgot_password`](ApiClient::forgot_password) | `POST /auth/forgot-password` | none |
//! | [`setup_status`](ApiClient::setup_status) | `GET /users/me/setup-status` | Bearer |
//! | [`list_plans`](ApiClient::list_plans) | `GET /plans` | Bearer |
//! | [`assign_plan`](ApiClient::assign_plan) | `POST /users/me/plan` | Bearer |
//! | [`complete_setup`](ApiClient::complete_setup) | `POST /companies/setup` (multipart) | Bearer |
//!
//! ## Expired sessions
//!
//! Every authenticated call goes through one response check: a 401 clears both
//! stored tokens and yields [`ApiError::Unauthorized`]. The next protected
//! navigation then finds no token and lands on the login page.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use store::{AppConfig, AuthTokens, Session};

use crate::error::ApiError;
use crate::models::{
    AssignPlanRequest, Attachment, CompanyInfo, ErrorBody, LoginResponse, NewUser,
    PasswordResetRequest, Plan, SetupStatus,
};

const SETUP_STATUS_PATH: &str = "/users/me/setup-status";

/// HTTP client for the remote billing API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn from_config(config: &AppConfig, session: Session) -> Self {
        Self::new(&config.api.base_url, session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a token pair and store it in the session.
    ///
    /// The email is sent as typed apart from surrounding whitespace; matching it
    /// is the API's job.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
        let email = email.trim();
        let request = self
            .http
            .post(self.url("/auth/login"))
            .basic_auth(email, Some(password));

        tracing::debug!("POST /auth/login");
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::info!("login refused for {email}");
            return Err(ApiError::InvalidCredentials);
        }
        let response = ensure_success(response).await?;
        let tokens: AuthTokens = decode::<LoginResponse>(response).await?.into();

        self.session.store(&tokens);
        tracing::info!("signed in as {email}");
        Ok(tokens)
    }

    /// Forget the stored tokens. The API keeps no server-side session to end.
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("signed out");
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        tracing::debug!("POST /users");
        let request = self.http.post(self.url("/users")).json(user);
        send_public(request).await?;
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        tracing::debug!("POST /auth/forgot-password");
        let body = PasswordResetRequest {
            email: email.trim().to_lowercase(),
        };
        let request = self
            .http
            .post(self.url("/auth/forgot-password"))
            .json(&body);
        send_public(request).await?;
        Ok(())
    }

    /// Onboarding progress of the signed-in user.
    pub async fn setup_status(&self) -> Result<SetupStatus, ApiError> {
        tracing::debug!("GET {SETUP_STATUS_PATH}");
        let request = self.http.get(self.url(SETUP_STATUS_PATH));
        let response = self.send_authorized(request).await?;
        decode(response).await
    }

    pub async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        tracing::debug!("GET /plans");
        let request = self.http.get(self.url("/plans"));
        let response = self.send_authorized(request).await?;
        decode(response).await
    }

    /// Assign a plan to the signed-in user. Flips `hasActivePlan` server-side.
    pub async fn assign_plan(&self, plan_id: &str) -> Result<(), ApiError> {
        tracing::debug!("POST /users/me/plan ({plan_id})");
        let body = AssignPlanRequest {
            plan_id: plan_id.to_string(),
        };
        let request = self.http.post(self.url("/users/me/plan")).json(&body);
        self.send_authorized(request).await?;
        Ok(())
    }

    /// Submit company data, signing certificate and optional logo.
    /// Flips `hasCompanyInfo` server-side.
    pub async fn complete_setup(
        &self,
        company: &CompanyInfo,
        certificate: &Attachment,
        logo: Option<&Attachment>,
    ) -> Result<(), ApiError> {
        tracing::debug!(
            "POST /companies/setup ({}, logo: {})",
            certificate.file_name,
            logo.is_some()
        );
        let company_json =
            serde_json::to_string(company).map_err(|e| ApiError::Decode(e.to_string()))?;

        let mut form = Form::new()
            .part(
                "company",
                Part::text(company_json).mime_str("application/json")?,
            )
            .part("certificate", file_part(certificate)?);
        if let Some(logo) = logo {
            form = form.part("logo", file_part(logo)?);
        }

        let request = self.http.post(self.url("/companies/setup")).multipart(form);
        self.send_authorized(request).await?;
        Ok(())
    }

    async fn send_authorized(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let Some(token) = self.session.access_token() else {
            return Err(ApiError::NotAuthenticated);
        };

        let response = request.bearer_auth(token).send().await.inspect_err(|e| {
            tracing::warn!("request failed: {e}");
        })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("API answered 401, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        ensure_success(response).await
    }
}

async fn send_public(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.inspect_err(|e| {
        tracing::warn!("request failed: {e}");
    })?;
    ensure_success(response).await
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    tracing::warn!("API rejected request with {status}: {message}");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn file_part(attachment: &Attachment) -> Result<Part, ApiError> {
    Ok(Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(attachment.mime())?)
}
