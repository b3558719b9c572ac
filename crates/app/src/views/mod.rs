//! Views
//!
//! Load and submit workflows behind each screen of the order desk. Views talk
//! to the backend through [`OrdersBackend`](crate::api::OrdersBackend) and
//! turn failures into the messages shown to the user.

use thiserror::Error;

use orderdesk::validation::Violations;

use crate::api::ApiError;

pub mod catalog;
pub mod edit_order;
pub mod form;
pub mod new_order;
pub mod orders;
pub mod schedule;

pub use catalog::CatalogView;
pub use edit_order::{DeleteOutcome, EditOrderForm, EditOrderLoad};
pub use form::OrderForm;
pub use new_order::NewOrderForm;
pub use orders::OrdersView;
pub use schedule::ScheduleView;

/// Prefix of the message shown when a list cannot be fetched.
pub const BACKEND_OFFLINE: &str = "The backend is offline for now...";

/// Shown when the product catalog cannot be fetched.
pub const ERROR_FETCHING_PRODUCTS: &str = "Error fetching products";

/// A view failed to load; the message is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ViewError(String);

impl ViewError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub(crate) fn offline(error: &ApiError) -> Self {
        Self(format!("{BACKEND_OFFLINE}{error}"))
    }

    /// Message shown to the user.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Result of submitting an order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked(Violations),

    /// The backend accepted the order.
    Saved(String),

    /// The backend rejected the order or could not be reached.
    Failed(String),
}

impl SubmitOutcome {
    pub(crate) fn failed(error: &ApiError, fallback: &str) -> Self {
        Self::Failed(error.backend_message().unwrap_or(fallback).to_string())
    }
}
