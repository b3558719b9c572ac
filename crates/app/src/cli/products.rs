use std::io;

use orderdesk_app::{api::OrdersBackend, render, views::CatalogView};

pub(crate) async fn run(backend: &dyn OrdersBackend) -> Result<(), String> {
    let view = CatalogView::load(backend)
        .await
        .map_err(|error| error.to_string())?;

    render::write_products(&mut io::stdout().lock(), &view.catalog)
        .map_err(|error| format!("failed to write products: {error}"))
}
