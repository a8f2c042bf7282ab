//! # ProcureX Controller
//!
//! UI-independent state for the console.
//!
//! Network operations are modelled as explicit transitions: a `begin_*`
//! call moves an operation to `Pending` and hands out a [`Ticket`] plus
//! the request to perform; the matching `complete_*` call applies the
//! outcome. Completions carrying a stale ticket are dropped, so a response
//! that arrives after the view moved on changes nothing.
//!
//! - **crud**: `CrudState`, the list/form/delete workflow for one schema
//! - **controller**: `CrudController`, `CrudState` driven by a `ResourceApi`
//! - **singleton**: `SingletonState` for one-record-per-parent resources
//! - **session**: the authentication gate and routes
//! - **growth**: yearly revenue and expense series
//!

pub mod controller;
pub mod crud;
pub mod growth;
pub mod notification;
pub mod op;
pub mod session;
pub mod singleton;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::CrudController;
pub use crud::{
    CrudState, DeleteRequest, LoadRequest, SubmitAction, SubmitOutcome, SubmitRequest,
    ToggleRequest,
};
pub use growth::{GrowthDashboard, GrowthSeries};
pub use notification::{Notification, NotificationLevel};
pub use op::{OpState, Ticket};
pub use session::{AuthState, Route, Session};
pub use singleton::SingletonState;
