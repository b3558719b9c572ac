//! Orders
//!
//! Order payloads exchanged with the scheduling backend.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use thiserror::Error;

use crate::products::ProductId;

/// Message the backend sends instead of an empty order list.
pub const NO_ORDER_FOUND: &str = "No order found";

/// Order identifier, as assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wrap a raw backend id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw backend id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for OrderId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order id
    pub id: OrderId,

    /// Number of line items in the order
    pub order_items_count: u64,

    /// Requested fulfilment date, as sent by the backend
    pub need_by: String,
}

/// Body of the order list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrderListing {
    /// A list of orders; null entries are tolerated and skipped.
    Orders(Vec<Option<OrderSummary>>),

    /// A bare message, sent when there is nothing to list.
    Message {
        /// Backend message
        message: String,
    },
}

/// The order list body was neither a list nor the empty-list message.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected order list message: {0}")]
pub struct UnexpectedListing(pub String);

impl OrderListing {
    /// Resolve the listing into orders.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedListing` for any message other than [`NO_ORDER_FOUND`].
    pub fn into_orders(self) -> Result<Vec<OrderSummary>, UnexpectedListing> {
        match self {
            Self::Orders(orders) => Ok(orders.into_iter().flatten().collect()),
            Self::Message { message } if message == NO_ORDER_FOUND => Ok(Vec::new()),
            Self::Message { message } => Err(UnexpectedListing(message)),
        }
    }
}

/// A (product, quantity) pair as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product id
    pub product_id: ProductId,

    /// Ordered quantity
    pub quantity: i64,
}

/// A single order, as returned by the order detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Requested fulfilment date
    pub need_by: String,

    /// Line items; a missing or malformed list reads as empty.
    #[serde(default, deserialize_with = "lenient_items")]
    pub order_items: Vec<OrderItem>,
}

/// Create and update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Requested fulfilment date, passed through as entered
    pub need_by: String,

    /// Complete line items
    pub items: Vec<OrderItem>,
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<OrderItem>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeItems {
        Items(Vec<OrderItem>),
        Other(IgnoredAny),
    }

    Ok(match MaybeItems::deserialize(deserializer)? {
        MaybeItems::Items(items) => items,
        MaybeItems::Other(_) => Vec::new(),
    })
}
