use dioxus::prelude::*;

/// Centered card used by the sign-in, sign-up and password reset screens.
#[component]
pub fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "{title}"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "{subtitle}"
            }

            div {
                class: "flex flex-col gap-3 w-full max-w-[320px]",
                {children}
            }
        }
    }
}

/// Red banner for form errors.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
            "{message}"
        }
    }
}
