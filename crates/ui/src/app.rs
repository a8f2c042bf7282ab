//! Main Application Component for ProcureX
//!
//! The root component provides the shell and renders the view the session
//! gate allows: the auth pages while signed out, the console otherwise.

use dioxus::prelude::*;
use procurex_controller::Route;

use crate::pages::{
    GrowthPage, HomePage, NotesPage, ProductDetailPage, ProductsPage, SignInPage, SignUpPage,
    VendorDetailPage,
};
use crate::state::{use_shell, use_shell_provider};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let shell = use_shell_provider();

    use_effect(|| {
        tracing::info!("ProcureX UI initialized");
    });

    let signed_in = shell.session().read().is_authenticated();

    rsx! {
        div {
            class: "app-container",

            if signed_in {
                Navbar {}
            }

            MainContent {}
        }
    }
}

// ============================================================================
// Navbar Component
// ============================================================================

#[component]
fn Navbar() -> Element {
    let shell = use_shell();
    let route = shell.current_route();
    let email = shell.session().read().email().unwrap_or_default().to_string();

    rsx! {
        header {
            class: "navbar",

            div {
                class: "navbar-brand",
                span { class: "brand-mark", "PX" }
                span { class: "brand-name", "ProcureX" }
            }

            nav {
                class: "navbar-links",
                NavLink { target: Route::Home, active: route == Route::Home }
                NavLink { target: Route::Products, active: route == Route::Products }
            }

            div { class: "navbar-spacer" }

            span { class: "navbar-user", "{email}" }

            button {
                r#type: "button",
                class: "btn btn-secondary btn-small",
                onclick: move |_| shell.sign_out(),
                "Sign out"
            }
        }
    }
}

#[component]
fn NavLink(target: Route, active: bool) -> Element {
    let shell = use_shell();
    let title = target.title();

    rsx! {
        button {
            r#type: "button",
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| shell.navigate(target.clone()),
            "{title}"
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Renders the page for the gated route
///
/// Detail pages are keyed by path so that switching ids mounts a fresh page.
#[component]
fn MainContent() -> Element {
    let shell = use_shell();
    let route = shell.current_route();
    let path = route.path();

    rsx! {
        main {
            class: "main-content",

            match route {
                Route::SignIn => rsx! { SignInPage {} },
                Route::SignUp => rsx! { SignUpPage {} },
                Route::Home => rsx! { HomePage {} },
                Route::Products => rsx! { ProductsPage {} },
                Route::ProductDetail(id) => rsx! { ProductDetailPage { key: "{path}", id } },
                Route::ProductNotes(id) => rsx! { NotesPage { key: "{path}", id } },
                Route::ProductGrowth(id) => rsx! { GrowthPage { key: "{path}", id } },
                Route::VendorDetail(id) => rsx! { VendorDetailPage { key: "{path}", id } },
            }
        }
    }
}
