//! Orderdesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    dates::{NeedByError, parse_need_by, start_of_day, today_in},
    drafts::{DraftError, LineItem, OrderDraft, on_item_product_change},
    durations::format_production_time,
    fields::FieldValue,
    orders::{
        NO_ORDER_FOUND, OrderDetails, OrderId, OrderItem, OrderListing, OrderPayload,
        OrderSummary, UnexpectedListing,
    },
    products::{Product, ProductCatalog, ProductId},
    schedule::ScheduleEntry,
    validation::{OrderDraftValidator, Violation, Violations, validate},
};
