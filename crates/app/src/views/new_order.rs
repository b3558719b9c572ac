//! New Order View

use jiff::civil::Date;
use tracing::{info, warn};

use orderdesk::{drafts::OrderDraft, products::ProductCatalog};

use crate::{
    api::OrdersBackend,
    views::{ERROR_FETCHING_PRODUCTS, OrderForm, SubmitOutcome, ViewError},
};

/// Shown after a successful create.
pub const ORDER_CREATED: &str = "Order created successfully!";

/// Shown when a create fails without a backend message.
pub const ERROR_CREATING_ORDER: &str = "Error creating order";

/// Form for creating an order.
#[derive(Debug, Clone)]
pub struct NewOrderForm {
    form: OrderForm,
}

impl NewOrderForm {
    /// Fetch the catalog and start a blank draft.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when the catalog cannot be fetched; the form is
    /// unusable without it.
    pub async fn load(backend: &dyn OrdersBackend) -> Result<Self, ViewError> {
        let products = backend.list_products().await.map_err(|error| {
            warn!(%error, "failed to fetch products");

            ViewError::new(ERROR_FETCHING_PRODUCTS)
        })?;

        Ok(Self::from(OrderForm::new(
            ProductCatalog::new(products),
            OrderDraft::new(),
        )))
    }

    /// The underlying form.
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// The underlying form, for editing.
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Validate the draft and, if it passes, create the order.
    ///
    /// The draft is reset after a successful create.
    pub async fn submit(&mut self, backend: &dyn OrdersBackend, today: Date) -> SubmitOutcome {
        let violations = self.form.validate(today);

        if !violations.is_empty() {
            warn!(violations = violations.len(), "order draft blocked");

            return SubmitOutcome::Blocked(violations);
        }

        let payload = self.form.draft().to_payload();
        let items_count = payload.items.len();

        match backend.create_order(payload).await {
            Ok(()) => {
                info!(items_count, "created order");

                self.form.draft_mut().reset();

                SubmitOutcome::Saved(ORDER_CREATED.to_string())
            }
            Err(error) => {
                warn!(%error, "failed to create order");

                SubmitOutcome::failed(&error, ERROR_CREATING_ORDER)
            }
        }
    }
}

impl From<OrderForm> for NewOrderForm {
    fn from(form: OrderForm) -> Self {
        Self { form }
    }
}
