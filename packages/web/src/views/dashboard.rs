use dioxus::prelude::*;
use ui::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardSection { segments: Vec::new() }
    }
}

/// Any path under `/dashboard`; unknown sections render as not found inside the shell.
#[component]
pub fn DashboardSection(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let section = (!segments.is_empty()).then(|| segments.join("/"));

    rsx! {
        DashboardView {
            section,
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
