//! Order Draft Validation
//!
//! Checks a draft before it is submitted. Every failed rule yields one
//! [`Violation`]; a non-empty result blocks submission.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{civil::Date, tz::TimeZone};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{
    dates::{parse_need_by, start_of_day, today_in},
    drafts::{LineItem, OrderDraft},
    fields::FieldValue,
    products::{ProductCatalog, ProductId},
};

/// A rule a draft breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The need-by date is missing, unreadable, or not after today's midnight.
    NeedByNotInFuture,

    /// A quantity is missing, non-numeric or below one.
    QuantityBelowOne,

    /// A product id is missing or not in the catalog.
    UnknownProduct,

    /// Items resolve to more than one product type.
    MixedProductTypes,
}

impl Violation {
    /// Message shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NeedByNotInFuture => "Date must be a date in the future.",
            Self::QuantityBelowOne => "All quantities must be greater than or equal to 1.",
            Self::UnknownProduct => "Product ID must be in the list.",
            Self::MixedProductTypes => "All items in an order must have the same product type.",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message())
    }
}

/// Violations found in one pass, in rule order.
pub type Violations = SmallVec<[Violation; 4]>;

/// Validates drafts against a product catalog.
#[derive(Debug, Clone)]
pub struct OrderDraftValidator<'a> {
    catalog: &'a ProductCatalog,
    time_zone: TimeZone,
}

impl<'a> OrderDraftValidator<'a> {
    /// Create a validator that reads dates in the system time zone.
    pub fn new(catalog: &'a ProductCatalog) -> Self {
        Self::with_time_zone(catalog, TimeZone::system())
    }

    /// Create a validator that reads dates in the given time zone.
    pub fn with_time_zone(catalog: &'a ProductCatalog, time_zone: TimeZone) -> Self {
        Self { catalog, time_zone }
    }

    /// Validate items and a need-by date as of `today`.
    pub fn validate(&self, items: &[LineItem], need_by: &str, today: Date) -> Violations {
        let mut violations = Violations::new();

        if !self.need_by_in_future(need_by, today) {
            violations.push(Violation::NeedByNotInFuture);
        }

        if items.iter().any(|item| !quantity_is_valid(&item.quantity)) {
            violations.push(Violation::QuantityBelowOne);
        }

        if items
            .iter()
            .any(|item| !self.product_is_listed(&item.product_id))
        {
            violations.push(Violation::UnknownProduct);
        }

        let product_types: FxHashSet<&str> = items
            .iter()
            .filter_map(|item| item.product_type(self.catalog))
            .collect();

        if product_types.len() > 1 {
            violations.push(Violation::MixedProductTypes);
        }

        violations
    }

    /// Validate a draft as of `today`.
    pub fn validate_draft(&self, draft: &OrderDraft, today: Date) -> Violations {
        self.validate(draft.items(), draft.need_by(), today)
    }

    /// Validate a draft as of the current date in the validator's time zone.
    pub fn validate_now(&self, draft: &OrderDraft) -> Violations {
        self.validate_draft(draft, today_in(&self.time_zone))
    }

    fn need_by_in_future(&self, need_by: &str, today: Date) -> bool {
        parse_need_by(need_by, &self.time_zone)
            .is_ok_and(|selected| selected > start_of_day(today))
    }

    fn product_is_listed(&self, product_id: &FieldValue) -> bool {
        product_id
            .as_number()
            .is_some_and(|id| self.catalog.contains(ProductId::new(id)))
    }
}

fn quantity_is_valid(quantity: &FieldValue) -> bool {
    quantity.as_number().is_some_and(|qty| qty >= 1)
}

/// Validate items against a catalog as of `today`, reading dates in the system
/// time zone.
pub fn validate(
    items: &[LineItem],
    need_by: &str,
    catalog: &ProductCatalog,
    today: Date,
) -> Violations {
    OrderDraftValidator::new(catalog).validate(items, need_by, today)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::products::Product;

    use super::*;

    const TODAY: Date = date(2026, 10, 19);

    fn catalog() -> ProductCatalog {
        [(1, "metal"), (2, "metal"), (7, "wood")]
            .into_iter()
            .map(|(id, product_type)| Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                product_type: product_type.to_string(),
            })
            .collect()
    }

    fn item(product_id: &str, quantity: &str) -> LineItem {
        LineItem {
            product_id: FieldValue::parse(product_id),
            quantity: FieldValue::parse(quantity),
            error: None,
        }
    }

    fn check(items: &[LineItem], need_by: &str) -> Violations {
        let catalog = catalog();

        OrderDraftValidator::with_time_zone(&catalog, TimeZone::UTC).validate(items, need_by, TODAY)
    }

    #[test]
    fn valid_single_item_passes() {
        let violations = check(&[item("1", "2")], "2026-10-20T10:00");

        assert!(violations.is_empty(), "unexpected {violations:?}");
    }

    #[test]
    fn need_by_at_or_before_midnight_is_rejected() {
        for need_by in ["2026-10-19T00:00", "2026-10-19", "2026-10-18T23:59", "2025-01-01"] {
            let violations = check(&[item("1", "2")], need_by);

            assert_eq!(
                violations.as_slice(),
                &[Violation::NeedByNotInFuture],
                "{need_by}"
            );
        }
    }

    #[test]
    fn need_by_later_today_is_accepted() {
        let violations = check(&[item("1", "2")], "2026-10-19T00:01");

        assert!(violations.is_empty(), "unexpected {violations:?}");
    }

    #[test]
    fn unreadable_need_by_is_rejected() {
        for need_by in ["", "soon"] {
            let violations = check(&[item("1", "2")], need_by);

            assert_eq!(violations.as_slice(), &[Violation::NeedByNotInFuture]);
        }
    }

    #[test]
    fn bad_quantities_are_reported_once() {
        for quantity in ["0", "-1", "abc", ""] {
            let violations = check(&[item("1", quantity), item("2", "0")], "2026-10-21");

            assert_eq!(
                violations.as_slice(),
                &[Violation::QuantityBelowOne],
                "{quantity}"
            );
        }
    }

    #[test]
    fn product_must_be_in_catalog() {
        for product_id in ["3", "0", "", "bolt"] {
            let violations = check(&[item("1", "1"), item(product_id, "1")], "2026-10-21");

            assert_eq!(
                violations.as_slice(),
                &[Violation::UnknownProduct],
                "{product_id}"
            );
        }
    }

    #[test]
    fn catalog_ids_outside_legacy_range_are_accepted() {
        let violations = check(&[item("7", "1")], "2026-10-21");

        assert!(violations.is_empty(), "unexpected {violations:?}");
    }

    #[test]
    fn mixed_product_types_are_rejected() {
        let violations = check(&[item("1", "1"), item("2", "1"), item("7", "1")], "2026-10-21");

        assert_eq!(violations.as_slice(), &[Violation::MixedProductTypes]);
    }

    #[test]
    fn violations_accumulate_in_rule_order() {
        let violations = check(&[item("1", "0"), item("9", "x"), item("7", "1")], "2020-01-01");

        assert_eq!(
            violations.as_slice(),
            &[
                Violation::NeedByNotInFuture,
                Violation::QuantityBelowOne,
                Violation::UnknownProduct,
                Violation::MixedProductTypes,
            ]
        );
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            Violation::MixedProductTypes.to_string(),
            "All items in an order must have the same product type."
        );
        assert_eq!(
            Violation::NeedByNotInFuture.to_string(),
            "Date must be a date in the future."
        );
    }
}
