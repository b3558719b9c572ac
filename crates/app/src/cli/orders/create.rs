use clap::Args;
use jiff::tz::TimeZone;

use orderdesk::dates::today_in;
use orderdesk_app::{
    api::OrdersBackend,
    views::{NewOrderForm, SubmitOutcome},
};

use super::{ItemArg, blocked_message, fill_items, parse_item, print_hints};

#[derive(Debug, Args)]
pub(crate) struct CreateOrderArgs {
    /// Requested fulfilment date, e.g. 2026-11-01T09:00
    #[arg(long)]
    need_by: String,

    /// Order line as PRODUCT:QUANTITY; repeat for more lines
    #[arg(long = "item", value_parser = parse_item, required = true)]
    items: Vec<ItemArg>,
}

pub(crate) async fn run(backend: &dyn OrdersBackend, args: CreateOrderArgs) -> Result<(), String> {
    let mut view = NewOrderForm::load(backend)
        .await
        .map_err(|error| error.to_string())?;

    view.form_mut().draft_mut().set_need_by(args.need_by);

    fill_items(view.form_mut(), args.items).map_err(|error| error.to_string())?;

    print_hints(view.form());

    let today = today_in(&TimeZone::system());

    match view.submit(backend, today).await {
        SubmitOutcome::Saved(message) => {
            println!("{message}");

            Ok(())
        }
        SubmitOutcome::Blocked(violations) => Err(blocked_message(&violations)),
        SubmitOutcome::Failed(message) => Err(message),
    }
}
