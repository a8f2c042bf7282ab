//! Authentication gate and routes
//!
//! A [`Session`] starts out unauthenticated on every launch; nothing is
//! persisted. Only the application shell mutates it.

use std::fmt;

use procurex_core::{ConsoleError, RecordId};

use crate::notification::Notification;

// ============================================================================
// Routes
// ============================================================================

/// Every view of the console
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    SignIn,
    SignUp,
    /// Product launcher
    Home,
    Products,
    ProductDetail(RecordId),
    ProductNotes(RecordId),
    ProductGrowth(RecordId),
    VendorDetail(RecordId),
}

impl Route {
    /// Views reachable without signing in
    pub fn is_public(&self) -> bool {
        matches!(self, Route::SignIn | Route::SignUp)
    }

    pub fn requires_auth(&self) -> bool {
        !self.is_public()
    }

    /// URL-style path of the view
    pub fn path(&self) -> String {
        match self {
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{id}"),
            Route::ProductNotes(id) => format!("/products/notes/{id}"),
            Route::ProductGrowth(id) => format!("/products/growth/{id}"),
            Route::VendorDetail(id) => format!("/vendors/{id}"),
        }
    }

    /// Parse a path produced by [`Route::path`]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["signin"] => Some(Route::SignIn),
            ["signup"] => Some(Route::SignUp),
            ["products"] => Some(Route::Products),
            ["products", "notes", id] => RecordId::parse(id).map(Route::ProductNotes),
            ["products", "growth", id] => RecordId::parse(id).map(Route::ProductGrowth),
            ["products", id] => RecordId::parse(id).map(Route::ProductDetail),
            ["vendors", id] => RecordId::parse(id).map(Route::VendorDetail),
            _ => None,
        }
    }

    /// Title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Home => "Launch a Product",
            Route::Products => "Products",
            Route::ProductDetail(_) => "Product",
            Route::ProductNotes(_) => "Notes",
            Route::ProductGrowth(_) => "Growth",
            Route::VendorDetail(_) => "Vendor",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated {
        email: String,
    },
}

/// Authentication state plus the message of the last auth attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    state: AuthState,
    notification: Option<Notification>,
    busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { email } => Some(email),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// A sign-in or sign-up request is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark an auth request as started; false if one is already running
    pub fn begin_request(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.notification = None;
        true
    }

    pub fn sign_in_succeeded(&mut self, email: impl Into<String>) {
        let email = email.into();
        tracing::info!("Session opened for {}", email);
        self.busy = false;
        self.notification = None;
        self.state = AuthState::Authenticated { email };
    }

    /// Stay signed out and show the server's reason
    pub fn sign_in_failed(&mut self, err: &ConsoleError) {
        self.busy = false;
        self.notification = Some(Notification::error(err.user_message()));
        self.state = AuthState::Unauthenticated;
    }

    pub fn sign_up_succeeded(&mut self) {
        self.busy = false;
        self.notification = Some(Notification::success(
            "Account created. Please sign in.",
        ));
    }

    pub fn sign_up_failed(&mut self, err: &ConsoleError) {
        self.busy = false;
        self.notification = Some(Notification::error(err.user_message()));
    }

    /// Client-side only; no request is made
    pub fn sign_out(&mut self) {
        tracing::info!("Session closed");
        *self = Self::default();
    }

    /// The view actually shown for a requested route
    ///
    /// Protected routes fall back to sign-in while signed out; the auth views
    /// send a signed-in user home.
    pub fn resolve(&self, requested: &Route) -> Route {
        match (self.is_authenticated(), requested.is_public()) {
            (false, false) => Route::SignIn,
            (true, true) => Route::Home,
            _ => requested.clone(),
        }
    }
}
