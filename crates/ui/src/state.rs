//! Application shell state
//!
//! The shell owns the [`Session`] and the requested [`Route`]. Both live in
//! signals handed to the component tree through Dioxus context; pages read
//! them and ask the shell to navigate, sign in or sign out.

use dioxus::prelude::*;
use procurex_client::{ApiClient, AuthClient, Credentials, SignUpRequest};
use procurex_controller::{Route, Session};

// ============================================================================
// Shell
// ============================================================================

/// Handle to the session, the route and the shared API client
#[derive(Clone, Copy, PartialEq)]
pub struct Shell {
    session: Signal<Session>,
    route: Signal<Route>,
    api: Signal<ApiClient>,
}

impl Shell {
    pub fn session(&self) -> Signal<Session> {
        self.session
    }

    pub fn api(&self) -> ApiClient {
        self.api.cloned()
    }

    pub fn requested_route(&self) -> Route {
        self.route.cloned()
    }

    /// The view to render after the session gate
    pub fn current_route(&self) -> Route {
        self.session.read().resolve(&self.route.read())
    }

    pub fn navigate(&self, route: Route) {
        let mut target = self.route;
        tracing::debug!("Navigating to {}", route);
        target.set(route);
    }

    pub fn sign_in(&self, email: String, password: String) {
        let mut session = self.session;
        if !session.write().begin_request() {
            return;
        }
        let client = AuthClient::new(self.api());
        let shell = *self;

        spawn(async move {
            let credentials = Credentials::new(email, password);
            match client.sign_in(&credentials).await {
                Ok(()) => {
                    session.write().sign_in_succeeded(credentials.email);
                    shell.navigate(Route::Home);
                }
                Err(err) => {
                    tracing::warn!("Sign in failed: {}", err);
                    session.write().sign_in_failed(&err);
                }
            }
        });
    }

    pub fn sign_up(&self, request: SignUpRequest) {
        let mut session = self.session;
        if !session.write().begin_request() {
            return;
        }
        let client = AuthClient::new(self.api());
        let shell = *self;

        spawn(async move {
            match client.sign_up(&request).await {
                Ok(()) => {
                    session.write().sign_up_succeeded();
                    shell.navigate(Route::SignIn);
                }
                Err(err) => {
                    tracing::warn!("Sign up failed: {}", err);
                    session.write().sign_up_failed(&err);
                }
            }
        });
    }

    pub fn sign_out(&self) {
        let mut session = self.session;
        session.write().sign_out();
        self.navigate(Route::SignIn);
    }
}

// ============================================================================
// Context
// ============================================================================

/// Create the shell; call once from the root component
pub fn use_shell_provider() -> Shell {
    let api: ApiClient = use_context();
    let session = use_signal(Session::new);
    let route = use_signal(Route::default);
    let api = use_signal(move || api);
    use_context_provider(|| Shell {
        session,
        route,
        api,
    })
}

/// The shell provided by the root component
pub fn use_shell() -> Shell {
    use_context()
}
