//! # Route guards
//!
//! Guards run before a protected screen is shown and either let navigation
//! proceed or name exactly one place to go instead.
//!
//! * [`AuthGate`]: synchronous token-presence check on the [`Session`].
//! * [`evaluate`]: onboarding check for one [`OnboardingStep`]: one status
//!   query, then the shared decision table from [`crate::onboarding`].
//! * [`post_login_target`]: the first screen after a successful login, from
//!   the same decision table.
//!
//! Status queries are bounded by an optional timeout. A timed-out or failed
//! query takes the target's [`fallback`]; a 401 sends the user to login since
//! the client has already cleared the session. Errors never escape a guard.
//!
//! [`evaluate_cancellable`] wraps an evaluation in an abortable future so the
//! UI can drop an in-flight check when the user navigates elsewhere.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{abortable, select, AbortHandle, Either};
use store::Session;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::SetupStatus;
use crate::onboarding::{decide, fallback, resolve_onboarding_target, Access, OnboardingStep};

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/auth/login";

/// Source of the current user's onboarding status.
pub trait SetupStatusProvider {
    fn setup_status(&self) -> impl Future<Output = Result<SetupStatus, ApiError>>;
}

impl SetupStatusProvider for ApiClient {
    async fn setup_status(&self) -> Result<SetupStatus, ApiError> {
        ApiClient::setup_status(self).await
    }
}

impl<P: SetupStatusProvider + ?Sized> SetupStatusProvider for &P {
    async fn setup_status(&self) -> Result<SetupStatus, ApiError> {
        (**self).setup_status().await
    }
}

/// Where a refused navigation goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Step(OnboardingStep),
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => LOGIN_PATH,
            Destination::Step(step) => step.path(),
        }
    }
}

/// Result of running a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(Destination),
}

impl GuardOutcome {
    pub fn may_proceed(self) -> bool {
        matches!(self, GuardOutcome::Proceed)
    }

    pub fn redirect(self) -> Option<Destination> {
        match self {
            GuardOutcome::Proceed => None,
            GuardOutcome::Redirect(destination) => Some(destination),
        }
    }
}

/// Entry check for every protected route subtree.
pub struct AuthGate;

impl AuthGate {
    /// Any non-empty token lets the user through; the API validates it.
    pub fn check(session: &Session) -> GuardOutcome {
        if session.is_authenticated() {
            GuardOutcome::Proceed
        } else {
            tracing::debug!("no session token, redirecting to {LOGIN_PATH}");
            GuardOutcome::Redirect(Destination::Login)
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Query the setup status, giving up after `timeout` when one is set.
pub async fn fetch_status<P: SetupStatusProvider + ?Sized>(
    provider: &P,
    timeout: Option<Duration>,
) -> Result<SetupStatus, ApiError> {
    let Some(limit) = timeout else {
        return provider.setup_status().await;
    };

    let query = pin!(provider.setup_status());
    let timer = pin!(sleep(limit));
    match select(query, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            tracing::warn!("setup status query timed out after {limit:?}");
            Err(ApiError::Timeout)
        }
    }
}

/// Decide whether navigation to `target` may proceed.
pub async fn evaluate<P: SetupStatusProvider + ?Sized>(
    provider: &P,
    target: OnboardingStep,
    timeout: Option<Duration>,
) -> GuardOutcome {
    let outcome = match fetch_status(provider, timeout).await {
        Ok(status) => match decide(target, &status) {
            Access::Allow => GuardOutcome::Proceed,
            Access::Redirect(step) => GuardOutcome::Redirect(Destination::Step(step)),
        },
        Err(e) if e.requires_login() => GuardOutcome::Redirect(Destination::Login),
        Err(e) => {
            let access = fallback(target);
            tracing::warn!(
                "setup status unavailable for {}: {e}; falling back to {access:?}",
                target.path()
            );
            match access {
                Access::Allow => GuardOutcome::Proceed,
                Access::Redirect(step) => GuardOutcome::Redirect(Destination::Step(step)),
            }
        }
    };

    tracing::debug!("guard {} -> {outcome:?}", target.path());
    outcome
}

/// Like [`evaluate`], but abortable through the returned handle.
///
/// An aborted evaluation resolves to `None`; its result must not be acted on.
pub fn evaluate_cancellable<P: SetupStatusProvider>(
    provider: P,
    target: OnboardingStep,
    timeout: Option<Duration>,
) -> (impl Future<Output = Option<GuardOutcome>>, AbortHandle) {
    let (check, handle) =
        abortable(async move { evaluate(&provider, target, timeout).await });

    let future = async move {
        match check.await {
            Ok(outcome) => Some(outcome),
            Err(_aborted) => {
                tracing::debug!("guard {} aborted", target.path());
                None
            }
        }
    };
    (future, handle)
}

/// First screen to show right after a successful login.
pub async fn post_login_target<P: SetupStatusProvider + ?Sized>(
    provider: &P,
    timeout: Option<Duration>,
) -> Destination {
    match fetch_status(provider, timeout).await {
        Ok(status) => Destination::Step(resolve_onboarding_target(&status)),
        Err(e) if e.requires_login() => Destination::Login,
        Err(e) => {
            tracing::warn!("setup status unavailable after login: {e}");
            Destination::Step(OnboardingStep::Setup)
        }
    }
}
