//! Public auth pages.

use api::Destination;
use dioxus::prelude::*;
use ui::{CreateUserView, ForgotPasswordView, LoginView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_authenticated: move |destination: Destination| {
                nav.replace(Route::from(destination));
            },
        }
    }
}

#[component]
pub fn CreateUser() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateUserView {
            on_created: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! {
        ForgotPasswordView {}
    }
}
