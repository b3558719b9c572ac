//! Product Catalog View

use tracing::warn;

use orderdesk::products::ProductCatalog;

use crate::{
    api::OrdersBackend,
    views::{ERROR_FETCHING_PRODUCTS, ViewError},
};

/// The product catalog.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Products, in backend order
    pub catalog: ProductCatalog,
}

impl CatalogView {
    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when the catalog cannot be fetched.
    pub async fn load(backend: &dyn OrdersBackend) -> Result<Self, ViewError> {
        let products = backend.list_products().await.map_err(|error| {
            warn!(%error, "failed to fetch products");

            ViewError::new(ERROR_FETCHING_PRODUCTS)
        })?;

        Ok(Self {
            catalog: ProductCatalog::new(products),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use orderdesk::products::{Product, ProductId};

    use crate::api::{ApiError, MockOrdersBackend};

    use super::*;

    fn backend(products: Result<Vec<Product>, ApiError>) -> MockOrdersBackend {
        let mut backend = MockOrdersBackend::new();

        backend.expect_list_products().once().return_once(|| products);
        backend.expect_list_orders().never();
        backend.expect_get_order().never();
        backend.expect_get_schedule().never();

        backend
    }

    #[tokio::test]
    async fn indexes_fetched_products() -> TestResult {
        let view = CatalogView::load(&backend(Ok(vec![Product {
            id: ProductId::new(2),
            name: "Oak plank".to_string(),
            product_type: "wood".to_string(),
        }])))
        .await?;

        assert_eq!(view.catalog.len(), 1);
        assert_eq!(view.catalog.product_type(ProductId::new(2)), Some("wood"));

        Ok(())
    }

    #[tokio::test]
    async fn failure_reports_generic_message() {
        let result = CatalogView::load(&backend(Err(ApiError::UnexpectedResponse(
            "truncated".to_string(),
        ))))
        .await;

        assert_eq!(
            result.map_err(|error| error.message().to_string()).map(|view| view.catalog.len()),
            Err("Error fetching products".to_string())
        );
    }
}
