use clap::Args;
use jiff::tz::TimeZone;

use orderdesk::{dates::today_in, drafts::OrderDraft, orders::OrderId};
use orderdesk_app::{
    api::OrdersBackend,
    views::{EditOrderForm, EditOrderLoad, SubmitOutcome},
};

use super::{ItemArg, blocked_message, fill_items, parse_item, print_hints};

#[derive(Debug, Args)]
pub(crate) struct UpdateOrderArgs {
    /// Order id
    order: OrderId,

    /// New requested fulfilment date; keeps the current one when omitted
    #[arg(long)]
    need_by: Option<String>,

    /// Replacement order line as PRODUCT:QUANTITY; keeps the current lines when omitted
    #[arg(long = "item", value_parser = parse_item)]
    items: Vec<ItemArg>,
}

pub(crate) async fn run(backend: &dyn OrdersBackend, args: UpdateOrderArgs) -> Result<(), String> {
    let mut view = match EditOrderForm::load(backend, args.order)
        .await
        .map_err(|error| error.to_string())?
    {
        EditOrderLoad::Loaded(view) => view,
        EditOrderLoad::RedirectToList => return Err(format!("order {} not found", args.order)),
    };

    if let Some(need_by) = args.need_by {
        view.form_mut().draft_mut().set_need_by(need_by);
    }

    if !args.items.is_empty() {
        let need_by = view.form().draft().need_by().to_string();
        let draft = view.form_mut().draft_mut();

        *draft = OrderDraft::new();
        draft.set_need_by(need_by);

        fill_items(view.form_mut(), args.items).map_err(|error| error.to_string())?;
    }

    print_hints(view.form());

    match view.submit(backend, today_in(&TimeZone::system())).await {
        SubmitOutcome::Saved(message) => {
            println!("{message}");

            Ok(())
        }
        SubmitOutcome::Blocked(violations) => Err(blocked_message(&violations)),
        SubmitOutcome::Failed(message) => Err(message),
    }
}
