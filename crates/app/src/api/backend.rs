//! Backend service.

use async_trait::async_trait;
use mockall::automock;

use orderdesk::{
    orders::{OrderDetails, OrderId, OrderListing, OrderPayload},
    products::Product,
    schedule::ScheduleEntry,
};

use crate::api::ApiError;

/// Operations offered by the scheduling backend.
#[automock]
#[async_trait]
pub trait OrdersBackend: Send + Sync {
    /// Retrieves the product catalog.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Retrieves the order list.
    async fn list_orders(&self) -> Result<OrderListing, ApiError>;

    /// Retrieves a single order.
    async fn get_order(&self, order: OrderId) -> Result<OrderDetails, ApiError>;

    /// Creates an order.
    async fn create_order(&self, payload: OrderPayload) -> Result<(), ApiError>;

    /// Replaces an order's date and items.
    async fn update_order(&self, order: OrderId, payload: OrderPayload) -> Result<(), ApiError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderId) -> Result<(), ApiError>;

    /// Retrieves the production schedule.
    async fn get_schedule(&self) -> Result<Vec<ScheduleEntry>, ApiError>;
}
