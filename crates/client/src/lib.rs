//! # ProcureX Client
//!
//! Typed access to the ProcureX REST backend.
//!
//! - [`ApiClient`]: shared `reqwest` client bound to a base URL
//! - [`ResourceClient`]: list/create/update/remove for one entity schema,
//!   behind the [`ResourceApi`] trait so controllers can run against fakes
//! - [`AuthClient`]: sign-in and sign-up
//! - [`MetricsClient`]: year options and monthly revenue/expense rows
//!
//! Every call is a single attempt. Transport failures become
//! `ConsoleError::Network`; non-success statuses become
//! `ConsoleError::Server` carrying the server's own message when it sent one.

pub mod auth;
pub mod http;
pub mod metrics;
pub mod resource;

pub use auth::{AuthClient, Credentials, SignUpRequest};
pub use http::ApiClient;
pub use metrics::{MetricsClient, MonthlyEntry};
pub use resource::{ResourceApi, ResourceClient};
