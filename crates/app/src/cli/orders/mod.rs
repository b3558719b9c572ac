use clap::{Args, Subcommand};

use orderdesk::{drafts::DraftError, fields::FieldValue, validation::Violation};
use orderdesk_app::{api::OrdersBackend, render, views::OrderForm};

mod create;
mod delete;
mod list;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List orders
    List,
    /// Show one order
    Show(show::ShowOrderArgs),
    /// Create an order
    Create(create::CreateOrderArgs),
    /// Update an order's date and items
    Update(update::UpdateOrderArgs),
    /// Delete an order
    Delete(delete::DeleteOrderArgs),
}

pub(crate) async fn run(backend: &dyn OrdersBackend, command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => list::run(backend).await,
        OrdersSubcommand::Show(args) => show::run(backend, args).await,
        OrdersSubcommand::Create(args) => create::run(backend, args).await,
        OrdersSubcommand::Update(args) => update::run(backend, args).await,
        OrdersSubcommand::Delete(args) => delete::run(backend, args).await,
    }
}

/// Raw `PRODUCT:QUANTITY` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemArg {
    product_id: FieldValue,
    quantity: FieldValue,
}

pub(crate) fn parse_item(raw: &str) -> Result<ItemArg, String> {
    let (product_id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT:QUANTITY, got {raw:?}"))?;

    Ok(ItemArg {
        product_id: FieldValue::parse(product_id),
        quantity: FieldValue::parse(quantity),
    })
}

/// Enter items into the form one line at a time, reusing the first line.
pub(crate) fn fill_items(form: &mut OrderForm, items: Vec<ItemArg>) -> Result<(), DraftError> {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            form.draft_mut().add_item();
        }

        form.change_product(index, item.product_id)?;
        form.draft_mut().set_quantity(index, item.quantity)?;
    }

    Ok(())
}

/// Print type hints left on the draft's lines.
pub(crate) fn print_hints(form: &OrderForm) {
    for (index, item) in form.draft().items().iter().enumerate() {
        if let Some(hint) = &item.error {
            println!("item {}: {hint}", index + 1);
        }
    }
}

/// Render violations into an error message.
pub(crate) fn blocked_message(violations: &[Violation]) -> String {
    let mut out = Vec::new();

    if render::write_violations(&mut out, violations).is_err() {
        return "order was not submitted".to_string();
    }

    format!(
        "order was not submitted:\n{}",
        String::from_utf8_lossy(&out).trim_end()
    )
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;
    use testresult::TestResult;

    use orderdesk::{
        drafts::{LineItem, OrderDraft},
        products::{Product, ProductCatalog, ProductId},
    };

    use super::*;

    #[test]
    fn parses_item_pairs() -> TestResult {
        assert_eq!(
            parse_item("3:250")?,
            ItemArg {
                product_id: FieldValue::Number(3),
                quantity: FieldValue::Number(250),
            }
        );
        assert_eq!(
            parse_item("3:abc")?,
            ItemArg {
                product_id: FieldValue::Number(3),
                quantity: FieldValue::Text("abc".to_string()),
            }
        );
        assert!(parse_item("3").is_err());

        Ok(())
    }

    #[test]
    fn fills_lines_in_order() -> TestResult {
        let catalog = ProductCatalog::new([Product {
            id: ProductId::new(1),
            name: "Steel beam".to_string(),
            product_type: "metal".to_string(),
        }]);
        let mut form = OrderForm::new(catalog, OrderDraft::new()).with_time_zone(TimeZone::UTC);

        fill_items(&mut form, vec![parse_item("1:5")?, parse_item("1:7")?])?;

        assert_eq!(
            form.draft().items(),
            &[
                LineItem::new(ProductId::new(1), 5),
                LineItem::new(ProductId::new(1), 7),
            ]
        );

        Ok(())
    }

    #[test]
    fn blocked_message_lists_violations() {
        assert_eq!(
            blocked_message(&[Violation::QuantityBelowOne]),
            "order was not submitted:\n  - All quantities must be greater than or equal to 1."
        );
    }
}
