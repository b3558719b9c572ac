//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Product identifier, as assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw backend id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw backend id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product type; every item of an order must share it.
    #[serde(rename = "type")]
    pub product_type: String,
}

/// Product catalog, in backend order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl ProductCatalog {
    /// Build a catalog from the products returned by the backend.
    ///
    /// When an id appears more than once the first product wins.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products: Vec<Product> = products.into_iter().collect();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            index.entry(product.id).or_insert(position);
        }

        Self { products, index }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// Check whether the catalog lists the given product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Type of the given product, if the catalog lists it.
    pub fn product_type(&self, id: ProductId) -> Option<&str> {
        self.get(id).map(|product| product.product_type.as_str())
    }

    /// Iterate products in backend order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: i64, name: &str, product_type: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            product_type: product_type.to_string(),
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = ProductCatalog::new([
            product(1, "Widget", "metal"),
            product(2, "Gadget", "plastic"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.product_type(ProductId::new(2)), Some("plastic"));
        assert!(catalog.contains(ProductId::new(1)));
        assert!(!catalog.contains(ProductId::new(3)));
        assert!(catalog.get(ProductId::new(3)).is_none());
    }

    #[test]
    fn duplicate_ids_keep_first_product() {
        let catalog: ProductCatalog = [product(1, "First", "metal"), product(1, "Second", "wood")]
            .into_iter()
            .collect();

        assert_eq!(
            catalog.get(ProductId::new(1)).map(|p| p.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn deserializes_type_field() -> TestResult {
        let products: Vec<Product> =
            serde_json::from_str(r#"[{"id": 4, "name": "Bolt", "type": "metal"}]"#)?;

        assert_eq!(products, vec![product(4, "Bolt", "metal")]);

        Ok(())
    }

    #[test]
    fn parses_id_with_whitespace() -> TestResult {
        let id: ProductId = " 12 ".parse()?;

        assert_eq!(id.get(), 12);

        Ok(())
    }
}
