//! Sign-in view with email/password form.

use api::{post_login_target, Destination};
use dioxus::prelude::*;

use super::{AuthCard, ErrorBanner};
use crate::session::{state_after_login, use_api, use_app_config, use_session_state};
use crate::validation::validate_login;

/// Sign-in form.
///
/// After the credential exchange the onboarding status is checked once and the
/// resulting screen is handed to `on_authenticated`.
#[component]
pub fn LoginView(on_authenticated: EventHandler<Destination>) -> Element {
    let client = use_api();
    let timeout = use_app_config().onboarding.status_timeout();
    let mut session_state = use_session_state();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(message) = validate_login(&e, &p) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(_) => {
                    let destination = post_login_target(&client, timeout).await;
                    session_state.set(state_after_login(destination));
                    loading.set(false);
                    if destination == Destination::Login {
                        error.set(Some(
                            "Your session ended right after signing in. Please try again."
                                .to_string(),
                        ));
                    } else {
                        on_authenticated.call(destination);
                    }
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Billdesk",
            subtitle: "Sign in to manage your invoices",

            if session_state().expired {
                div {
                    class: "px-2.5 py-2.5 bg-amber-50 border border-amber-200 rounded text-amber-700 text-[0.8125rem]",
                    "Your session has expired. Please sign in again."
                }
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                input {
                    class: "form-input w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            div {
                class: "flex justify-between mt-4 text-sm text-neutral-600",
                Link { to: "/auth/forgot-password", "Forgot your password?" }
                Link { to: "/auth/create-user", "Create an account" }
            }
        }
    }
}
