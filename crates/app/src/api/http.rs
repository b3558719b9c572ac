//! HTTP client for the scheduling backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use orderdesk::{
    orders::{OrderDetails, OrderId, OrderListing, OrderPayload},
    products::Product,
    schedule::ScheduleEntry,
};

use crate::api::{ApiError, OrdersBackend};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "API_KEY";

/// Configuration for connecting to the backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base URI, e.g. `"http://localhost:8000"`.
    pub base_uri: String,

    /// Value sent in the [`API_KEY_HEADER`] header.
    pub api_key: String,
}

/// reqwest-backed [`OrdersBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: BackendConfig,
    http: Client,
}

impl HttpBackend {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_uri.trim_end_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();

        debug!(%status, url = %response.url(), "backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();

        Err(ApiError::from_status(status, &text))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| ApiError::UnexpectedResponse(error.to_string()))
    }
}

#[async_trait]
impl OrdersBackend for HttpBackend {
    #[tracing::instrument(name = "backend.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products").await
    }

    #[tracing::instrument(name = "backend.list_orders", skip(self), err)]
    async fn list_orders(&self) -> Result<OrderListing, ApiError> {
        self.get_json("/api/orders").await
    }

    #[tracing::instrument(name = "backend.get_order", skip(self), err)]
    async fn get_order(&self, order: OrderId) -> Result<OrderDetails, ApiError> {
        self.get_json(&format!("/api/get-order/{order}")).await
    }

    #[tracing::instrument(
        name = "backend.create_order",
        skip(self, payload),
        fields(items_count = payload.items.len()),
        err
    )]
    async fn create_order(&self, payload: OrderPayload) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/api/order")).json(&payload))
            .await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "backend.update_order",
        skip(self, payload),
        fields(items_count = payload.items.len()),
        err
    )]
    async fn update_order(&self, order: OrderId, payload: OrderPayload) -> Result<(), ApiError> {
        self.send(
            self.http
                .put(self.url(&format!("/api/order/{order}")))
                .json(&payload),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(name = "backend.delete_order", skip(self), err)]
    async fn delete_order(&self, order: OrderId) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/api/order/{order}"))))
            .await?;

        Ok(())
    }

    #[tracing::instrument(name = "backend.get_schedule", skip(self), err)]
    async fn get_schedule(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.get_json("/api/schedule").await
    }
}
