//! Orders List View

use tracing::warn;

use orderdesk::orders::OrderSummary;

use crate::{
    api::{ApiError, OrdersBackend},
    views::ViewError,
};

/// Shown when the order list body has an unknown shape.
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format";

/// Shown when there are no orders yet.
pub const NO_ORDERS: &str = "No order found, create a new one";

/// The order list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersView {
    /// Orders, in backend order
    pub orders: Vec<OrderSummary>,
}

impl OrdersView {
    /// Fetch the order list.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when the backend is unreachable or answers with an
    /// unknown body.
    pub async fn load(backend: &dyn OrdersBackend) -> Result<Self, ViewError> {
        let listing = backend.list_orders().await.map_err(|error| {
            warn!(%error, "failed to fetch orders");

            match error {
                ApiError::UnexpectedResponse(_) => ViewError::new(UNEXPECTED_FORMAT),
                error => ViewError::offline(&error),
            }
        })?;

        let orders = listing.into_orders().map_err(|error| {
            warn!(%error, "unexpected order list");

            ViewError::new(UNEXPECTED_FORMAT)
        })?;

        Ok(Self { orders })
    }
}
