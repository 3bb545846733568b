//! Route layouts that keep users where their session and onboarding allow.

use api::Destination;
use dioxus::prelude::*;
use ui::{OnboardingGate, SignInGate};

use crate::Route;

/// Sends visitors without a stored token to login.
#[component]
pub fn AuthGuard() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInGate {
            on_redirect: move |destination: Destination| {
                nav.replace(Route::from(destination));
            },
            Outlet::<Route> {}
        }
    }
}

/// Holds the onboarding routes until the setup status says the user belongs there.
#[component]
pub fn OnboardingGuard() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    let Some(step) = route.onboarding_step() else {
        return rsx! {
            Outlet::<Route> {}
        };
    };

    rsx! {
        OnboardingGate {
            step,
            path: route.to_string(),
            on_redirect: move |destination: Destination| {
                nav.replace(Route::from(destination));
            },
            Outlet::<Route> {}
        }
    }
}
