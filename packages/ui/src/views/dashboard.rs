//! Dashboard shell with section navigation.

use dioxus::prelude::*;

use crate::icons::{FaBoxOpen, FaFileInvoice, FaGauge, FaReceipt, FaRightFromBracket, FaUsers};
use crate::session::LogoutButton;
use crate::Icon;

/// Sub-paths under `/dashboard`, in menu order.
pub const DASHBOARD_SECTIONS: [&str; 4] = ["clients", "products", "invoices", "receipts"];

/// Heading for a dashboard section; `None` is the overview.
pub fn section_title(section: Option<&str>) -> &'static str {
    match section {
        None | Some("") => "Overview",
        Some("clients") => "Clients",
        Some("products") => "Products",
        Some("invoices") => "Invoices",
        Some("receipts") => "Receipts",
        Some(_) => "Not found",
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[component]
fn SectionIcon(section: &'static str) -> Element {
    match section {
        "clients" => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        "products" => rsx! { Icon { icon: FaBoxOpen, width: 14, height: 14 } },
        "invoices" => rsx! { Icon { icon: FaFileInvoice, width: 14, height: 14 } },
        "receipts" => rsx! { Icon { icon: FaReceipt, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
    }
}

/// Main application screen once onboarding is complete.
#[component]
pub fn DashboardView(section: Option<String>, on_logout: EventHandler<()>) -> Element {
    let current = section.as_deref().filter(|s| !s.is_empty());
    let title = section_title(current);

    rsx! {
        div {
            class: "flex min-h-screen",

            nav {
                class: "flex flex-col gap-1 w-56 p-4 border-r border-neutral-200 bg-neutral-50",

                span { class: "mb-4 font-bold text-neutral-800", "Billdesk" }

                Link {
                    class: nav_class(current.is_none()),
                    to: "/dashboard",
                    SectionIcon { section: "" }
                    span { "Overview" }
                }
                for s in DASHBOARD_SECTIONS {
                    Link {
                        key: "{s}",
                        class: nav_class(current == Some(s)),
                        to: "/dashboard/{s}",
                        SectionIcon { section: s }
                        span { {section_title(Some(s))} }
                    }
                }

                div { class: "flex-1" }

                div {
                    class: "flex items-center gap-2 text-neutral-600",
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    LogoutButton {
                        class: "text-sm",
                        on_logout: move |_| on_logout.call(()),
                    }
                }
            }

            main {
                class: "flex-1 p-8",
                h1 { class: "mb-4 text-neutral-800 font-bold text-2xl", "{title}" }
                p {
                    class: "text-neutral-500",
                    "Nothing here yet."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_titles() {
        assert_eq!(section_title(None), "Overview");
        assert_eq!(section_title(Some("")), "Overview");
        assert_eq!(section_title(Some("invoices")), "Invoices");
        assert_eq!(section_title(Some("payroll")), "Not found");
    }

    #[test]
    fn test_every_section_has_a_title() {
        for s in DASHBOARD_SECTIONS {
            assert_ne!(section_title(Some(s)), "Not found", "{s}");
        }
    }
}
