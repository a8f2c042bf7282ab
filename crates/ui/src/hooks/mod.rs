//! # UI Hooks
//!
//! Hooks binding the controller state machines to the API:
//! - `use_crud`: list, form and delete workflow for one schema
//! - `use_singleton`: one-record-per-parent resources
//! - `use_growth`: yearly metrics dashboard
//!
//! Each hook spawns the request and applies the response through the
//! controller's `complete_*` call, which ignores responses the view no
//! longer waits for.

pub mod use_crud;
pub mod use_growth;
pub mod use_singleton;

pub use use_crud::{UseCrud, use_crud};
pub use use_growth::{UseGrowth, use_growth};
pub use use_singleton::{UseSingleton, use_singleton};

use dioxus::prelude::*;
use procurex_core::ConsoleResult;

/// Apply a response to a state signal, if the view still exists
///
/// Returns what `apply` produced when it succeeded.
pub(crate) fn settle<T: 'static, R>(
    mut state: Signal<T>,
    what: &str,
    apply: impl FnOnce(&mut T) -> ConsoleResult<R>,
) -> Option<R> {
    match state.try_write() {
        Ok(mut current) => match apply(&mut *current) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("{} failed: {}", what, err);
                None
            }
        },
        Err(_) => {
            tracing::debug!("Dropping {} response for a closed view", what);
            None
        }
    }
}
