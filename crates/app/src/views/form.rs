//! Order Form

use jiff::{civil::Date, tz::TimeZone};

use orderdesk::{
    drafts::{DraftError, OrderDraft},
    fields::FieldValue,
    products::ProductCatalog,
    validation::{OrderDraftValidator, Violations},
};

/// Catalog and draft shared by the create and edit screens.
#[derive(Debug, Clone)]
pub struct OrderForm {
    catalog: ProductCatalog,
    draft: OrderDraft,
    time_zone: TimeZone,
}

impl OrderForm {
    /// Create a form over a catalog, reading dates in the system time zone.
    pub fn new(catalog: ProductCatalog, draft: OrderDraft) -> Self {
        Self {
            catalog,
            draft,
            time_zone: TimeZone::system(),
        }
    }

    /// Read need-by dates in the given time zone instead.
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Products offered by the form.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Current draft.
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Current draft, for edits that need no catalog.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Select a product on a line, refreshing its type hint.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::ItemOutOfRange` when `index` does not address an item.
    pub fn change_product(&mut self, index: usize, product_id: FieldValue) -> Result<(), DraftError> {
        self.draft.change_product(index, product_id, &self.catalog)
    }

    /// Validate the draft as of `today`.
    pub fn validate(&self, today: Date) -> Violations {
        OrderDraftValidator::with_time_zone(&self.catalog, self.time_zone.clone())
            .validate_draft(&self.draft, today)
    }
}
