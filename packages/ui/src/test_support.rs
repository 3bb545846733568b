//! Helpers for rendering gates in a headless `VirtualDom` against a scripted
//! setup-status server.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api::{AppConfig, Destination, OnboardingStep, Session, SetupStatus};
use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::gate::{OnboardingGate, SignInGate};
use crate::session::{mark_expired, use_provide_session, use_session_state, SessionState};

/// How the server answers one status request.
#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Status(SetupStatus),
    After(Duration, SetupStatus),
    Unauthorized,
    /// Accept the connection and never answer.
    Hang,
}

/// Answers the n-th connection with the n-th reply; the last one repeats.
pub(crate) struct StatusServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StatusServer {
    pub async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let reply = replies
                    .get(n)
                    .or(replies.last())
                    .cloned()
                    .unwrap_or(Reply::Hang);
                tokio::spawn(answer(socket, reply));
            }
        });

        Self { url, hits }
    }

    /// Number of status requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn answer(mut socket: TcpStream, reply: Reply) {
    let mut request = [0u8; 4096];
    let _ = socket.read(&mut request).await;

    let (status_line, body) = match reply {
        Reply::Hang => {
            std::future::pending::<()>().await;
            return;
        }
        Reply::Unauthorized => ("401 Unauthorized", String::new()),
        Reply::Status(status) => ("200 OK", status_json(status)),
        Reply::After(delay, status) => {
            tokio::time::sleep(delay).await;
            ("200 OK", status_json(status))
        }
    };

    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn status_json(status: SetupStatus) -> String {
    format!(
        r#"{{"hasCompanyInfo":{},"hasActivePlan":{}}}"#,
        status.has_company_info, status.has_active_plan
    )
}

#[derive(Clone, Copy)]
struct Controls {
    step: Signal<OnboardingStep>,
    path: Signal<String>,
    mounted: Signal<bool>,
    state: Signal<SessionState>,
}

#[derive(Clone, Copy, Debug)]
enum GateKind {
    SignIn,
    Onboarding(OnboardingStep),
}

#[derive(Clone)]
struct RootProps {
    config: AppConfig,
    session: Session,
    gate: GateKind,
    controls: Rc<RefCell<Option<Controls>>>,
    redirects: Rc<RefCell<Vec<Destination>>>,
}

fn root(props: RootProps) -> Element {
    let session = props.session.clone();
    use_provide_session(&props.config, move || session);

    let initial = match props.gate {
        GateKind::Onboarding(step) => step,
        GateKind::SignIn => OnboardingStep::Dashboard,
    };
    let step = use_signal(|| initial);
    let path = use_signal(|| initial.path().to_string());
    let mounted = use_signal(|| true);
    let state = use_session_state();

    let controls = props.controls.clone();
    use_hook(move || {
        *controls.borrow_mut() = Some(Controls {
            step,
            path,
            mounted,
            state,
        });
    });

    let redirects = props.redirects.clone();
    let on_redirect = EventHandler::new(move |destination: Destination| {
        redirects.borrow_mut().push(destination);
    });

    match props.gate {
        GateKind::SignIn => rsx! {
            SignInGate {
                on_redirect,
                div { "signed-in content" }
            }
        },
        GateKind::Onboarding(_) => {
            let label = format!("content for {}", path());
            rsx! {
                if mounted() {
                    OnboardingGate {
                        step: step(),
                        path: path(),
                        on_redirect,
                        div { "{label}" }
                    }
                }
            }
        }
    }
}

/// A headless app with one gate mounted under a session provider.
pub(crate) struct TestApp {
    dom: VirtualDom,
    controls: Rc<RefCell<Option<Controls>>>,
    redirects: Rc<RefCell<Vec<Destination>>>,
}

impl TestApp {
    fn new(config: AppConfig, session: Session, gate: GateKind) -> Self {
        let controls = Rc::new(RefCell::new(None));
        let redirects = Rc::new(RefCell::new(Vec::new()));
        let props = RootProps {
            config,
            session,
            gate,
            controls: controls.clone(),
            redirects: redirects.clone(),
        };
        Self {
            dom: VirtualDom::new_with_props(root, props),
            controls,
            redirects,
        }
    }

    /// Onboarding gate for `step`, talking to `base_url` without a status timeout.
    pub fn onboarding(base_url: &str, session: Session, step: OnboardingStep) -> Self {
        let config = AppConfig::default()
            .with_base_url(base_url)
            .with_status_timeout_ms(0);
        Self::new(config, session, GateKind::Onboarding(step))
    }

    pub fn sign_in(session: Session) -> Self {
        Self::new(AppConfig::default(), session, GateKind::SignIn)
    }

    pub fn rebuild(&mut self) -> String {
        self.dom.rebuild_in_place();
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn controls(&self) -> Controls {
        (*self.controls.borrow()).expect("root component not rendered yet")
    }

    /// Move the gate to another location, as the router would.
    pub fn navigate(&mut self, step: OnboardingStep, path: &str) {
        let mut controls = self.controls();
        let path = path.to_string();
        self.dom.in_runtime(move || {
            controls.step.set(step);
            controls.path.set(path);
        });
    }

    pub fn unmount_gate(&mut self) {
        let mut controls = self.controls();
        self.dom.in_runtime(move || controls.mounted.set(false));
    }

    pub fn expire_session(&mut self) {
        let mut controls = self.controls();
        self.dom
            .in_runtime(move || mark_expired(&mut controls.state));
    }

    pub fn session_state(&self) -> SessionState {
        let controls = self.controls();
        self.dom.in_runtime(move || *controls.state.peek())
    }

    pub fn redirects(&self) -> Vec<Destination> {
        self.redirects.borrow().clone()
    }
}

/// Run tasks, effects and renders for `duration`.
pub(crate) async fn settle(app: &mut TestApp, duration: Duration) {
    let dom = &mut app.dom;
    let _ = tokio::time::timeout(duration, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}

/// Run the app until the rendered HTML satisfies `done`, giving up after two
/// seconds. Returns the last rendered HTML either way.
pub(crate) async fn settle_until(app: &mut TestApp, done: impl Fn(&str) -> bool) -> String {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let html = app.render();
        if done(&html) || tokio::time::Instant::now() >= deadline {
            return html;
        }
        settle(app, Duration::from_millis(20)).await;
    }
}
