use dioxus::prelude::*;

use super::{AuthCard, ErrorBanner};
use crate::session::use_api;
use crate::validation::validate_email;

/// Password reset request form.
#[component]
pub fn ForgotPasswordView() -> Element {
    let client = use_api();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            if let Err(message) = validate_email(&e) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match client.forgot_password(&e).await {
                Ok(()) => sent.set(true),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    let sent_to = email().trim().to_string();

    rsx! {
        AuthCard {
            title: "Reset Password",
            subtitle: "We will email you a link to choose a new password",

            if sent() {
                div {
                    class: "px-2.5 py-2.5 bg-green-50 border border-green-200 rounded text-green-700 text-[0.8125rem]",
                    "If an account exists for {sent_to}, a reset link is on its way."
                }
            } else {
                form {
                    onsubmit: handle_submit,
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

                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending..." } else { "Send reset link" }
                    }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                Link { to: "/auth/login", "Back to sign in" }
            }
        }
    }
}
