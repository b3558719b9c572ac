use std::io;

use orderdesk_app::{api::OrdersBackend, render, views::OrdersView};

pub(crate) async fn run(backend: &dyn OrdersBackend) -> Result<(), String> {
    let view = OrdersView::load(backend)
        .await
        .map_err(|error| error.to_string())?;

    println!("Orders List");

    render::write_orders(&mut io::stdout().lock(), &view.orders)
        .map_err(|error| format!("failed to write orders: {error}"))
}
