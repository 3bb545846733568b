use api::AuthGate;
use dioxus::prelude::*;
use ui::use_api;

use crate::Route;

/// Redirect `/` to the dashboard, or to login without a session.
/// The onboarding guard takes it from there.
#[component]
pub fn Root() -> Element {
    let client = use_api();
    let nav = use_navigator();

    match AuthGate::check(client.session()).redirect() {
        Some(destination) => nav.replace(Route::from(destination)),
        None => nav.replace(Route::Dashboard {}),
    };
    rsx! {}
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("no route for /{path}");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "Page not found" }
            p { class: "text-neutral-500", "/{path}" }
            Link { to: Route::Root {}, "Go home" }
        }
    }
}
