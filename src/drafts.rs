//! Order Drafts
//!
//! In-memory state of an order being created or edited, before it is sent to
//! the backend.

use thiserror::Error;

use crate::{
    fields::FieldValue,
    orders::{OrderDetails, OrderItem, OrderPayload},
    products::{ProductCatalog, ProductId},
};

/// Errors editing a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The index does not address an item (index, item count).
    #[error("item {0} is out of range for a draft with {1} items")]
    ItemOutOfRange(usize, usize),

    /// A draft always keeps at least one item.
    #[error("the last item of an order cannot be removed")]
    LastItem,
}

/// One line of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineItem {
    /// Selected product
    pub product_id: FieldValue,

    /// Entered quantity
    pub quantity: FieldValue,

    /// Advisory product-type hint; never sent to the backend.
    pub error: Option<String>,
}

impl LineItem {
    /// A line with nothing selected.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A complete line.
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id: FieldValue::Number(product_id.get()),
            quantity: FieldValue::Number(quantity),
            error: None,
        }
    }

    /// The selected product id, if one is set and numeric.
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id.as_number().map(ProductId::new)
    }

    /// Type of the selected product, if the catalog knows it.
    pub fn product_type<'c>(&self, catalog: &'c ProductCatalog) -> Option<&'c str> {
        self.product_id().and_then(|id| catalog.product_type(id))
    }

    /// The backend representation of this line, if it is complete.
    ///
    /// Lines with a missing, non-numeric or zero product or quantity are skipped.
    pub fn to_order_item(&self) -> Option<OrderItem> {
        let product_id = self.product_id.as_number().filter(|&id| id != 0)?;
        let quantity = self.quantity.as_number().filter(|&qty| qty != 0)?;

        Some(OrderItem {
            product_id: ProductId::new(product_id),
            quantity,
        })
    }
}

impl From<OrderItem> for LineItem {
    fn from(item: OrderItem) -> Self {
        Self::new(item.product_id, item.quantity)
    }
}

/// Record a product selection on one item and refresh its type hint.
///
/// The hint compares the new product's type with the first resolvable type
/// among the other items. It is left untouched when the new selection is
/// empty or not in the catalog.
///
/// # Errors
///
/// Returns `DraftError::ItemOutOfRange` when `index` does not address an item.
pub fn on_item_product_change(
    items: &mut [LineItem],
    index: usize,
    product_id: FieldValue,
    catalog: &ProductCatalog,
) -> Result<(), DraftError> {
    let len = items.len();

    let selected_type = product_id
        .as_number()
        .and_then(|id| catalog.product_type(ProductId::new(id)));

    let existing_type = items
        .iter()
        .enumerate()
        .filter(|&(position, _)| position != index)
        .find_map(|(_, item)| item.product_type(catalog));

    let item = items
        .get_mut(index)
        .ok_or(DraftError::ItemOutOfRange(index, len))?;

    item.product_id = product_id;

    if let Some(selected_type) = selected_type {
        item.error = match existing_type {
            Some(existing) if existing != selected_type => Some(format!(
                "Product type mismatch. Current type is {existing}."
            )),
            _ => None,
        };
    }

    Ok(())
}

/// Order Draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    need_by: String,
    items: Vec<LineItem>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// An empty draft with a single blank line.
    pub fn new() -> Self {
        Self {
            need_by: String::new(),
            items: vec![LineItem::blank()],
        }
    }

    /// A draft with the given date and lines.
    pub fn with_items(need_by: impl Into<String>, items: impl Into<Vec<LineItem>>) -> Self {
        Self {
            need_by: need_by.into(),
            items: items.into(),
        }
    }

    /// Requested fulfilment date, as entered.
    pub fn need_by(&self) -> &str {
        &self.need_by
    }

    /// Lines of the draft.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Set the requested fulfilment date.
    pub fn set_need_by(&mut self, need_by: impl Into<String>) {
        self.need_by = need_by.into();
    }

    /// Append a blank line.
    pub fn add_item(&mut self) {
        self.items.push(LineItem::blank());
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns a `DraftError` when the index is out of range or the draft has a
    /// single line left.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, DraftError> {
        if index >= self.items.len() {
            return Err(DraftError::ItemOutOfRange(index, self.items.len()));
        }

        if self.items.len() == 1 {
            return Err(DraftError::LastItem);
        }

        Ok(self.items.remove(index))
    }

    /// Store raw quantity input for a line.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::ItemOutOfRange` when `index` does not address an item.
    pub fn set_quantity(&mut self, index: usize, quantity: FieldValue) -> Result<(), DraftError> {
        let len = self.items.len();

        let item = self
            .items
            .get_mut(index)
            .ok_or(DraftError::ItemOutOfRange(index, len))?;

        item.quantity = quantity;

        Ok(())
    }

    /// Select a product for a line, refreshing its type hint.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::ItemOutOfRange` when `index` does not address an item.
    pub fn change_product(
        &mut self,
        index: usize,
        product_id: FieldValue,
        catalog: &ProductCatalog,
    ) -> Result<(), DraftError> {
        on_item_product_change(&mut self.items, index, product_id, catalog)
    }

    /// Request body for this draft; incomplete lines are left out.
    pub fn to_payload(&self) -> OrderPayload {
        OrderPayload {
            need_by: self.need_by.clone(),
            items: self
                .items
                .iter()
                .filter_map(LineItem::to_order_item)
                .collect(),
        }
    }

    /// Clear the draft back to a single blank line.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl From<OrderDetails> for OrderDraft {
    fn from(order: OrderDetails) -> Self {
        Self {
            need_by: order.need_by,
            items: order.order_items.into_iter().map(LineItem::from).collect(),
        }
    }
}
