//! Registration view with email/password form.

use api::NewUser;
use dioxus::prelude::*;

use super::{AuthCard, ErrorBanner};
use crate::session::use_api;
use crate::validation::validate_new_user;

/// Account registration form. `on_created` fires once the API accepted it.
#[component]
pub fn CreateUserView(on_created: EventHandler<()>) -> Element {
    let client = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_lowercase();
            let p = password();
            let cp = confirm_password();
            if let Err(message) = validate_new_user(&n, &e, &p, &cp) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            let user = NewUser {
                name: n,
                email: e,
                password: p,
            };
            match client.create_user(&user).await {
                Ok(()) => {
                    tracing::info!("account created for {}", user.email);
                    loading.set(false);
                    on_created.call(());
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
            title: "Create Account",
            subtitle: "Start invoicing with Billdesk",

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                input {
                    class: "form-input w-full",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "form-input w-full",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link { to: "/auth/login", "Sign in" }
            }
        }
    }
}
