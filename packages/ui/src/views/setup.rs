//! Company setup: fiscal data, signing certificate and logo.

use api::{Attachment, CompanyInfo};
use dioxus::prelude::*;

use super::ErrorBanner;
use crate::session::{note_api_error, use_api, use_session_state};
use crate::validation::validate_company;

/// Read the first file picked in a file input.
async fn read_selected(evt: &FormEvent) -> Option<Attachment> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    Some(Attachment::new(name, bytes))
}

#[component]
fn Field(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
) -> Element {
    rsx! {
        label {
            class: "flex flex-col gap-1 text-sm text-neutral-700",
            "{label}"
            input {
                class: "form-input w-full",
                r#type: "{kind}",
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Company setup form. `on_complete` fires after the API stored the company.
#[component]
pub fn SetupView(on_complete: EventHandler<()>) -> Element {
    let client = use_api();
    let mut session_state = use_session_state();
    let mut company = use_signal(CompanyInfo::default);
    let mut certificate = use_signal(|| Option::<Attachment>::None);
    let mut logo = use_signal(|| Option::<Attachment>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let info = company();
            if let Err(message) = validate_company(&info, certificate.peek().is_some()) {
                error.set(Some(message));
                return;
            }
            let Some(cert) = certificate() else {
                return;
            };

            saving.set(true);
            let result = client.complete_setup(&info, &cert, logo().as_ref()).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("company {} set up", info.tax_id);
                    on_complete.call(());
                }
                Err(err) => {
                    note_api_error(&mut session_state, &err);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    let optional = |value: String| {
        let value = value.trim().to_string();
        (!value.is_empty()).then_some(value)
    };

    rsx! {
        div {
            class: "flex flex-col items-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Set up your company"
            }
            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "We need your fiscal details before you can issue invoices."
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3 w-full max-w-[480px]",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                Field {
                    label: "Business name",
                    value: company().business_name,
                    oninput: move |v: String| company.write().business_name = v,
                }
                Field {
                    label: "Trade name (optional)",
                    value: company().trade_name.unwrap_or_default(),
                    oninput: move |v: String| company.write().trade_name = optional(v),
                }
                Field {
                    label: "Tax ID",
                    value: company().tax_id,
                    oninput: move |v: String| company.write().tax_id = v,
                }
                Field {
                    label: "Address",
                    value: company().address,
                    oninput: move |v: String| company.write().address = v,
                }
                Field {
                    label: "Phone (optional)",
                    kind: "tel",
                    value: company().phone.unwrap_or_default(),
                    oninput: move |v: String| company.write().phone = optional(v),
                }
                Field {
                    label: "Billing email",
                    kind: "email",
                    value: company().email,
                    oninput: move |v: String| company.write().email = v,
                }

                label {
                    class: "flex flex-col gap-1 text-sm text-neutral-700",
                    "Signing certificate (.p12)"
                    input {
                        r#type: "file",
                        accept: ".p12,.pfx",
                        onchange: move |evt: FormEvent| async move {
                            certificate.set(read_selected(&evt).await);
                        },
                    }
                    if let Some(cert) = certificate() {
                        span { class: "text-xs text-neutral-500", "{cert.file_name}" }
                    }
                }

                Field {
                    label: "Certificate password",
                    kind: "password",
                    value: company().certificate_password,
                    oninput: move |v: String| company.write().certificate_password = v,
                }

                label {
                    class: "flex flex-col gap-1 text-sm text-neutral-700",
                    "Logo (optional)"
                    input {
                        r#type: "file",
                        accept: "image/png,image/jpeg,image/svg+xml,image/webp",
                        onchange: move |evt: FormEvent| async move {
                            logo.set(read_selected(&evt).await);
                        },
                    }
                }

                button {
                    class: "btn btn-primary w-full mt-2",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Continue" }
                }
            }
        }
    }
}
