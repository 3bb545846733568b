use api::{Destination, OnboardingStep};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use views::{
    AuthGuard, CreateUser, Dashboard, DashboardSection, ForgotPassword, Login, NotFound,
    OnboardingGuard, PlanSelection, Root, Setup,
};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/")]
    Root {},
    #[nest("/auth")]
        #[route("/login")]
        Login {},
        #[route("/create-user")]
        CreateUser {},
        #[route("/forgot-password")]
        ForgotPassword {},
    #[end_nest]
    #[layout(AuthGuard)]
        #[layout(OnboardingGuard)]
            #[route("/setup")]
            Setup {},
            #[route("/plan-selection")]
            PlanSelection {},
            #[route("/dashboard")]
            Dashboard {},
            #[route("/dashboard/:..segments")]
            DashboardSection { segments: Vec<String> },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Onboarding step guarding this route, if any.
    pub(crate) fn onboarding_step(&self) -> Option<OnboardingStep> {
        match self {
            Route::Setup {} => Some(OnboardingStep::Setup),
            Route::PlanSelection {} => Some(OnboardingStep::PlanSelection),
            Route::Dashboard {} | Route::DashboardSection { .. } => Some(OnboardingStep::Dashboard),
            _ => None,
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Step(OnboardingStep::Setup) => Route::Setup {},
            Destination::Step(OnboardingStep::PlanSelection) => Route::PlanSelection {},
            Destination::Step(OnboardingStep::Dashboard) => Route::Dashboard {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_map_to_matching_routes() {
        let destinations = [
            Destination::Login,
            Destination::Step(OnboardingStep::Setup),
            Destination::Step(OnboardingStep::PlanSelection),
            Destination::Step(OnboardingStep::Dashboard),
        ];
        for destination in destinations {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::CreateUser {}.to_string(), "/auth/create-user");
        assert_eq!(Route::ForgotPassword {}.to_string(), "/auth/forgot-password");
        assert_eq!(
            "/dashboard/invoices".parse::<Route>().ok(),
            Some(Route::DashboardSection {
                segments: vec!["invoices".to_string()]
            })
        );
    }

    #[test]
    fn test_onboarding_steps() {
        assert_eq!(Route::Setup {}.onboarding_step(), Some(OnboardingStep::Setup));
        assert_eq!(
            Route::PlanSelection {}.onboarding_step(),
            Some(OnboardingStep::PlanSelection)
        );
        assert_eq!(
            Route::DashboardSection {
                segments: vec!["clients".to_string()]
            }
            .onboarding_step(),
            Some(OnboardingStep::Dashboard)
        );
        assert_eq!(Route::Login {}.onboarding_step(), None);
        assert_eq!(Route::Root {}.onboarding_step(), None);
    }
}
