//! Edit Order View

use jiff::civil::Date;
use tracing::{info, warn};

use orderdesk::{drafts::OrderDraft, orders::OrderId, products::ProductCatalog};

use crate::{
    api::OrdersBackend,
    views::{ERROR_FETCHING_PRODUCTS, OrderForm, SubmitOutcome, ViewError},
};

/// Shown when an order cannot be fetched for a reason other than 404.
pub const ERROR_FETCHING_ORDER: &str = "Error fetching order details";

/// Shown after a successful update.
pub const ORDER_UPDATED: &str = "Order updated successfully!";

/// Shown when an update fails without a backend message.
pub const ERROR_UPDATING_ORDER: &str = "Error updating order";

/// Shown after a successful delete.
pub const ORDER_DELETED: &str = "Order deleted successfully!";

/// Result of loading the edit screen.
#[derive(Debug, Clone)]
pub enum EditOrderLoad {
    /// The order exists and is ready to edit.
    Loaded(EditOrderForm),

    /// The order does not exist; go back to the order list.
    RedirectToList,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,

    /// The order was deleted; go back to the order list.
    Deleted(String),

    /// The backend rejected the delete or could not be reached.
    Failed(String),
}

/// Form for editing or deleting an existing order.
#[derive(Debug, Clone)]
pub struct EditOrderForm {
    order: OrderId,
    form: OrderForm,
}

impl EditOrderForm {
    /// Create a form for an order that has already been fetched.
    pub fn new(order: OrderId, form: OrderForm) -> Self {
        Self { order, form }
    }

    /// Fetch an order and the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when either request fails, except for a missing
    /// order, which yields [`EditOrderLoad::RedirectToList`].
    pub async fn load(
        backend: &dyn OrdersBackend,
        order: OrderId,
    ) -> Result<EditOrderLoad, ViewError> {
        let details = match backend.get_order(order).await {
            Ok(details) => details,
            Err(error) if error.is_not_found() => {
                info!(%order, "order not found, redirecting to order list");

                return Ok(EditOrderLoad::RedirectToList);
            }
            Err(error) => {
                warn!(%order, %error, "failed to fetch order");

                return Err(ViewError::new(ERROR_FETCHING_ORDER));
            }
        };

        let products = backend.list_products().await.map_err(|error| {
            warn!(%error, "failed to fetch products");

            ViewError::new(ERROR_FETCHING_PRODUCTS)
        })?;

        Ok(EditOrderLoad::Loaded(Self::new(
            order,
            OrderForm::new(ProductCatalog::new(products), OrderDraft::from(details)),
        )))
    }

    /// Id of the edited order.
    pub fn order(&self) -> OrderId {
        self.order
    }

    /// The underlying form.
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// The underlying form, for editing.
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Validate the draft and, if it passes, replace the order.
    pub async fn submit(&mut self, backend: &dyn OrdersBackend, today: Date) -> SubmitOutcome {
        let violations = self.form.validate(today);

        if !violations.is_empty() {
            warn!(order = %self.order, violations = violations.len(), "order draft blocked");

            return SubmitOutcome::Blocked(violations);
        }

        match backend
            .update_order(self.order, self.form.draft().to_payload())
            .await
        {
            Ok(()) => {
                info!(order = %self.order, "updated order");

                SubmitOutcome::Saved(ORDER_UPDATED.to_string())
            }
            Err(error) => {
                warn!(order = %self.order, %error, "failed to update order");

                SubmitOutcome::failed(&error, ERROR_UPDATING_ORDER)
            }
        }
    }

    /// Text of the delete confirmation question.
    pub fn delete_prompt(&self) -> String {
        format!("Are you sure you want to delete order ID {}?", self.order)
    }

    /// Delete the order once `confirm` agrees to the prompt.
    pub async fn delete(
        &self,
        backend: &dyn OrdersBackend,
        confirm: impl FnOnce(&str) -> bool,
    ) -> DeleteOutcome {
        if !confirm(&self.delete_prompt()) {
            return DeleteOutcome::Cancelled;
        }

        match backend.delete_order(self.order).await {
            Ok(()) => {
                info!(order = %self.order, "deleted order");

                DeleteOutcome::Deleted(ORDER_DELETED.to_string())
            }
            Err(error) => {
                warn!(order = %self.order, %error, "failed to delete order");

                DeleteOutcome::Failed(format!(
                    "Error deleting order: {}",
                    error.backend_message().unwrap_or("Unknown error")
                ))
            }
        }
    }
}
