//! Route gates: the sign-in check and the onboarding check.

use std::cell::RefCell;
use std::rc::Rc;

use api::{evaluate_cancellable, AuthGate, Destination, GuardOutcome, OnboardingStep};
use dioxus::prelude::*;
use futures::future::AbortHandle;

use crate::session::{mark_expired, use_api, use_app_config, use_session_state};

/// Renders `children` while a session token is stored, otherwise reports
/// [`Destination::Login`] through `on_redirect`.
///
/// Reads the session state so a sign-out or a rejected token re-runs the check.
#[component]
pub fn SignInGate(on_redirect: EventHandler<Destination>, children: Element) -> Element {
    let client = use_api();
    let session_state = use_session_state();

    use_effect({
        let client = client.clone();
        move || {
            let _ = session_state();
            if let Some(destination) = AuthGate::check(client.session()).redirect() {
                tracing::debug!("not signed in, redirecting to {}", destination.path());
                on_redirect.call(destination);
            }
        }
    });

    let _ = session_state();
    if AuthGate::check(client.session()).may_proceed() {
        rsx! {
            {children}
        }
    } else {
        rsx! {}
    }
}

/// A finished onboarding check and the location it was made for.
#[derive(Clone, Debug, PartialEq)]
struct Checked {
    step: OnboardingStep,
    path: String,
    /// `None` when the check was aborted.
    outcome: Option<GuardOutcome>,
}

/// The outcome that applies to the current location, if its check has finished.
///
/// A resource keeps its last value while the next check runs, so a result for
/// another location must not be reused.
fn outcome_for(
    checked: Option<&Checked>,
    step: OnboardingStep,
    path: &str,
) -> Option<GuardOutcome> {
    checked
        .filter(|c| c.step == step && c.path == path)
        .and_then(|c| c.outcome)
}

/// Renders `children` only once the onboarding check for `step` allows it.
///
/// The check runs again whenever `step` or `path` changes, so every navigation
/// queries the status afresh, and nothing is shown until that check finishes.
/// A newer check aborts the one still in flight, and unmounting aborts whatever
/// is pending. Refusals are reported through `on_redirect`; the platform router
/// decides how to get there.
#[component]
pub fn OnboardingGate(
    step: OnboardingStep,
    /// Current location, e.g. `/dashboard/invoices`.
    path: String,
    on_redirect: EventHandler<Destination>,
    children: Element,
) -> Element {
    let client = use_api();
    let timeout = use_app_config().onboarding.status_timeout();
    let mut session_state = use_session_state();
    let in_flight: Rc<RefCell<Option<AbortHandle>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_drop({
        let in_flight = in_flight.clone();
        move || {
            if let Some(pending) = in_flight.borrow_mut().take() {
                pending.abort();
            }
        }
    });

    let checked = use_resource({
        let path = path.clone();
        use_reactive!(|(step, path)| {
            let client = client.clone();
            let in_flight = in_flight.clone();
            async move {
                if let Some(previous) = in_flight.borrow_mut().take() {
                    previous.abort();
                }
                tracing::debug!("checking onboarding access to {path}");
                let (check, handle) = evaluate_cancellable(client, step, timeout);
                *in_flight.borrow_mut() = Some(handle);
                let outcome = check.await;
                Checked {
                    step,
                    path,
                    outcome,
                }
            }
        })
    });

    use_effect({
        let path = path.clone();
        use_reactive!(|(step, path)| {
            let current = checked.read().clone();
            let redirect =
                outcome_for(current.as_ref(), step, &path).and_then(GuardOutcome::redirect);
            if let Some(destination) = redirect {
                if destination == Destination::Login {
                    mark_expired(&mut session_state);
                }
                tracing::debug!("redirecting to {}", destination.path());
                on_redirect.call(destination);
            }
        })
    });

    let current = checked.read().clone();
    match outcome_for(current.as_ref(), step, &path) {
        Some(GuardOutcome::Proceed) => rsx! {
            {children}
        },
        Some(GuardOutcome::Redirect(_)) => rsx! {},
        None => rsx! {
            div {
                class: "gate-loading",
                "Checking your account..."
            }
        },
    }
}
