//! Terminal rendering for orders, products and the schedule.

use std::io;

use jiff::tz::TimeZone;
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use orderdesk::{
    drafts::OrderDraft,
    orders::{OrderId, OrderSummary},
    products::ProductCatalog,
    schedule::ScheduleEntry,
    validation::Violation,
};

use crate::views::orders::NO_ORDERS;

/// Format an integer with comma thousands separators, e.g. `12,500`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

/// Write the order list.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_orders(out: &mut impl io::Write, orders: &[OrderSummary]) -> io::Result<()> {
    if orders.is_empty() {
        return writeln!(out, "{NO_ORDERS}");
    }

    let mut builder = Builder::default();

    builder.push_record(["Order ID", "Number of Items", "Deadline"]);

    for order in orders {
        builder.push_record([
            order.id.to_string(),
            order.order_items_count.to_string(),
            order.need_by.clone(),
        ]);
    }

    let mut table = builder.build();

    table.modify(Columns::new(1..2), Alignment::right());

    write_table(out, table)
}

/// Write one order's date and lines, naming products from the catalog.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_order(
    out: &mut impl io::Write,
    order: OrderId,
    draft: &OrderDraft,
    catalog: &ProductCatalog,
) -> io::Result<()> {
    writeln!(out, "Order ID: {order}")?;
    writeln!(out, "Need by: {}", draft.need_by())?;

    let mut builder = Builder::default();

    builder.push_record(["Product", "Type", "Quantity"]);

    for item in draft.items() {
        let product = item.product_id().and_then(|id| catalog.get(id));

        builder.push_record([
            product.map_or_else(|| item.product_id.to_string(), |p| p.name.clone()),
            product.map_or_else(String::new, |p| p.product_type.clone()),
            item.quantity
                .as_number()
                .map_or_else(|| item.quantity.to_string(), group_thousands),
        ]);
    }

    let mut table = builder.build();

    table.modify(Columns::new(2..3), Alignment::right());

    write_table(out, table)
}

/// Write the product catalog.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_products(out: &mut impl io::Write, catalog: &ProductCatalog) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Type"]);

    for product in catalog.iter() {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.product_type.clone(),
        ]);
    }

    write_table(out, builder.build())
}

/// Write the production schedule, marking late need-by dates red and the
/// rest green.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_schedule(
    out: &mut impl io::Write,
    entries: &[ScheduleEntry],
    tz: &TimeZone,
) -> io::Result<()> {
    let mut builder = Builder::default();
    let mut need_by_colors = Vec::with_capacity(entries.len());

    builder.push_record([
        "Order ID",
        "Product",
        "Quantity",
        "Start",
        "End",
        "Need by",
        "Time needed",
    ]);

    for (position, entry) in entries.iter().enumerate() {
        builder.push_record([
            entry.order_id.to_string(),
            entry.product_name.clone(),
            group_thousands(entry.quantity),
            entry.start_time.clone(),
            entry.end_time.clone(),
            entry.need_by.clone(),
            entry.production_time_display(),
        ]);

        let color = if entry.is_late(tz) {
            Color::FG_RED
        } else {
            Color::FG_GREEN
        };

        need_by_colors.push((position + 1, color));
    }

    let mut table = builder.build();

    table.modify(Columns::new(2..3), Alignment::right());

    for (row, color) in need_by_colors {
        table.modify((row, 5), color);
    }

    write_table(out, table)
}

/// Write violations as a bulleted list.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_violations(out: &mut impl io::Write, violations: &[Violation]) -> io::Result<()> {
    for violation in violations {
        writeln!(out, "  - {violation}")?;
    }

    Ok(())
}

fn write_table(out: &mut impl io::Write, mut table: Table) -> io::Result<()> {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use orderdesk::{
        drafts::LineItem,
        products::{Product, ProductId},
    };

    use super::*;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> TestResult<String> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-12_500), "-12,500");
    }

    #[test]
    fn empty_order_list_suggests_creating_one() -> TestResult {
        let output = render(|out| write_orders(out, &[]))?;

        assert_eq!(output, "No order found, create a new one\n");

        Ok(())
    }

    #[test]
    fn order_list_shows_each_order() -> TestResult {
        let orders = [
            OrderSummary {
                id: OrderId::new(7),
                order_items_count: 2,
                need_by: "2026-11-01".to_string(),
            },
            OrderSummary {
                id: OrderId::new(8),
                order_items_count: 11,
                need_by: "2026-12-24".to_string(),
            },
        ];

        let output = render(|out| write_orders(out, &orders))?;

        assert!(output.contains("Deadline"), "{output}");
        assert!(output.contains("2026-11-01"), "{output}");
        assert!(output.contains("2026-12-24"), "{output}");
        assert!(output.contains("11"), "{output}");

        Ok(())
    }

    #[test]
    fn order_lines_use_catalog_names() -> TestResult {
        let catalog = ProductCatalog::new([Product {
            id: ProductId::new(1),
            name: "Steel beam".to_string(),
            product_type: "metal".to_string(),
        }]);
        let draft = OrderDraft::with_items(
            "2026-11-01 09:00:00",
            [
                LineItem::new(ProductId::new(1), 12_000),
                LineItem::new(ProductId::new(9), 3),
            ],
        );

        let output = render(|out| write_order(out, OrderId::new(3), &draft, &catalog))?;

        assert!(output.starts_with("Order ID: 3\nNeed by: 2026-11-01 09:00:00\n"), "{output}");
        assert!(output.contains("Steel beam"), "{output}");
        assert!(output.contains("12,000"), "{output}");
        assert!(output.contains(" 9 "), "{output}");

        Ok(())
    }

    #[test]
    fn schedule_shows_formatted_times() -> TestResult {
        let entries = [ScheduleEntry {
            order_id: OrderId::new(4),
            product_name: "Oak plank".to_string(),
            quantity: 2_500,
            start_time: "2026-10-20 08:00:00".to_string(),
            end_time: "2026-10-22 08:00:00".to_string(),
            need_by: "2026-10-21 00:00:00".to_string(),
            production_time: 2_880.0,
        }];

        let output = render(|out| write_schedule(out, &entries, &TimeZone::UTC))?;

        assert!(output.contains("2,500"), "{output}");
        assert!(output.contains("2 days"), "{output}");
        assert!(output.contains("Oak plank"), "{output}");

        Ok(())
    }

    #[test]
    fn violations_are_bulleted() -> TestResult {
        let output = render(|out| {
            write_violations(
                out,
                &[Violation::NeedByNotInFuture, Violation::UnknownProduct],
            )
        })?;

        assert_eq!(
            output,
            "  - Date must be a date in the future.\n  - Product ID must be in the list.\n"
        );

        Ok(())
    }
}
