use dioxus::prelude::*;
use ui::{PlanSelectionView, SetupView};

use crate::Route;

#[component]
pub fn Setup() -> Element {
    let nav = use_navigator();

    rsx! {
        SetupView {
            on_complete: move |_| {
                nav.push(Route::PlanSelection {});
            },
        }
    }
}

#[component]
pub fn PlanSelection() -> Element {
    let nav = use_navigator();

    rsx! {
        PlanSelectionView {
            on_assigned: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
