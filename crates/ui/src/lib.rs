//! # ProcureX UI
//!
//! Dioxus Desktop UI for the ProcureX procurement console.
//!
//! ## Views
//!
//! - Sign in / sign up behind an explicit session gate
//! - Product launcher and product list
//! - Product detail with vendors, finalized vendors and allotments
//! - Vendor detail with receipts, shipments and payments
//! - Notes and growth (status, monthly metrics, yearly dashboard)
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use procurex_controller;
pub use procurex_core;

pub use app::App;
pub use components::{
    Checkbox, ConfirmDeleteDialog, CrudSection, EntityForm, EntityTable, NotificationBanner,
    Select, TextArea, TextInput,
};
pub use hooks::{UseCrud, UseGrowth, UseSingleton, use_crud, use_growth, use_singleton};
pub use state::{Shell, use_shell};

use procurex_client::ApiClient;
use procurex_core::{ConsoleConfig, ConsoleResult};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "ProcureX";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the ProcureX desktop application
///
/// The API client is built from `config` up front so that a bad base URL is
/// reported before any window opens.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = ConsoleConfig::load()?;
///     procurex_ui::launch(&config)?;
///     Ok(())
/// }
/// ```
pub fn launch(config: &ConsoleConfig) -> ConsoleResult<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let api = ApiClient::from_config(&config.api)?;
    tracing::info!("Backend: {}", api.base_url());

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);
    let window = &config.window;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.as_str())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(api)
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
