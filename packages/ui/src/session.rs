//! Session context and hooks for the UI.

use api::{ApiClient, ApiError, AppConfig, Destination, Session};
use dioxus::prelude::*;

/// Client-visible session state.
///
/// The tokens themselves live in the [`Session`] inside the [`ApiClient`]; this
/// signal only exists so components re-render when the user signs in or out
/// or the API ends the session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    /// Set when the API rejected the token; the login page shows a notice.
    pub expired: bool,
}

/// The shared API client, carrying the session.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Get the session state signal.
pub fn use_session_state() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Session state once the first screen after login is known.
///
/// [`Destination::Login`] means the API rejected the fresh token, so the
/// session is already gone.
pub fn state_after_login(destination: Destination) -> SessionState {
    let rejected = destination == Destination::Login;
    SessionState {
        authenticated: !rejected,
        expired: rejected,
    }
}

pub fn mark_signed_out(state: &mut Signal<SessionState>) {
    state.set(SessionState::default());
}

pub fn mark_expired(state: &mut Signal<SessionState>) {
    if state.peek().authenticated || !state.peek().expired {
        tracing::info!("session expired");
        state.set(SessionState {
            authenticated: false,
            expired: true,
        });
    }
}

/// Record an API failure; ends the session when the API asked for a new login.
pub fn note_api_error(state: &mut Signal<SessionState>, err: &ApiError) {
    if err.requires_login() {
        mark_expired(state);
    }
}

fn platform_session() -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorageTokenStore::with_prefix("billdesk."))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::in_memory()
    }
}

/// Provide the API client, the session state signal and `config` to every
/// descendant. `session` is only called on the first render.
pub fn use_provide_session(config: &AppConfig, session: impl FnOnce() -> Session) -> ApiClient {
    let client = use_context_provider(|| ApiClient::from_config(config, session()));
    use_context_provider(|| {
        Signal::new(SessionState {
            authenticated: client.session().is_authenticated(),
            expired: false,
        })
    });
    use_context_provider(|| config.clone());
    client
}

/// Provider component that owns the session and the API client.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    use_provide_session(&config, platform_session);

    rsx! {
        {children}
    }
}

/// Button to sign the current user out.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();
    let mut state = use_session_state();

    let onclick = move |_| {
        client.logout();
        mark_signed_out(&mut state);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
