use api::Plan;
use dioxus::prelude::*;

use super::ErrorBanner;
use crate::session::{note_api_error, use_api, use_session_state};

/// Lists the available plans and assigns the chosen one.
#[component]
pub fn PlanSelectionView(on_assigned: EventHandler<()>) -> Element {
    let client = use_api();
    let mut session_state = use_session_state();
    let mut selected = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut assigning = use_signal(|| false);

    let plans = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_plans().await }
        }
    });

    // A 401 while listing ends the session like any other call.
    use_effect(move || {
        let failed = plans
            .read()
            .as_ref()
            .and_then(|r| r.as_ref().err().cloned());
        if let Some(err) = failed {
            note_api_error(&mut session_state, &err);
        }
    });

    let handle_assign = move |_| {
        let Some(plan_id) = selected() else {
            error.set(Some("Choose a plan to continue".to_string()));
            return;
        };
        let client = client.clone();
        spawn(async move {
            error.set(None);
            assigning.set(true);
            let result = client.assign_plan(&plan_id).await;
            assigning.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("plan {plan_id} assigned");
                    on_assigned.call(());
                }
                Err(err) => {
                    note_api_error(&mut session_state, &err);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    let body = match &*plans.read() {
        None => rsx! {
            p { class: "text-neutral-500", "Loading plans..." }
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.user_message() }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-neutral-500", "No plans are available right now." }
        },
        Some(Ok(list)) => {
            let list: Vec<Plan> = list.clone();
            rsx! {
                div {
                    class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                    for plan in list {
                        PlanCard {
                            key: "{plan.id}",
                            selected: selected().as_deref() == Some(plan.id.as_str()),
                            on_select: move |id: String| selected.set(Some(id)),
                            plan: plan.clone(),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Choose your plan"
            }
            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "You can change it later from your account settings."
            }

            div {
                class: "flex flex-col gap-4 w-full max-w-[960px]",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                {body}

                button {
                    class: "btn btn-primary self-end",
                    disabled: assigning() || selected().is_none(),
                    onclick: handle_assign,
                    if assigning() { "Activating..." } else { "Continue" }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Plan, selected: bool, on_select: EventHandler<String>) -> Element {
    let border = if selected {
        "border-blue-600 ring-2 ring-blue-200"
    } else {
        "border-neutral-200"
    };
    let id = plan.id.clone();
    let price = plan.price_label();
    let limit = plan.limit_label();

    rsx! {
        button {
            class: "flex flex-col gap-2 p-4 text-left border rounded-lg {border}",
            r#type: "button",
            onclick: move |_| on_select.call(id.clone()),

            span { class: "font-semibold text-neutral-800", "{plan.name}" }
            span { class: "text-lg text-neutral-900", "{price}" }
            span { class: "text-sm text-neutral-500", "{limit}" }
            if let Some(description) = &plan.description {
                p { class: "text-sm text-neutral-600", "{description}" }
            }
        }
    }
}
