use std::io;

use clap::Args;

use orderdesk::orders::OrderId;
use orderdesk_app::{
    api::OrdersBackend,
    render,
    views::{EditOrderForm, EditOrderLoad},
};

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// Order id
    order: OrderId,
}

pub(crate) async fn run(backend: &dyn OrdersBackend, args: ShowOrderArgs) -> Result<(), String> {
    let form = match EditOrderForm::load(backend, args.order)
        .await
        .map_err(|error| error.to_string())?
    {
        EditOrderLoad::Loaded(form) => form,
        EditOrderLoad::RedirectToList => {
            println!("order {} not found", args.order);

            return super::list::run(backend).await;
        }
    };

    render::write_order(
        &mut io::stdout().lock(),
        form.order(),
        form.form().draft(),
        form.form().catalog(),
    )
    .map_err(|error| format!("failed to write order: {error}"))
}
