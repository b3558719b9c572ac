use std::io;

use jiff::tz::TimeZone;

use orderdesk_app::{api::OrdersBackend, render, views::ScheduleView};

pub(crate) async fn run(backend: &dyn OrdersBackend) -> Result<(), String> {
    let view = ScheduleView::load(backend)
        .await
        .map_err(|error| error.to_string())?;

    println!("Schedule of production");

    render::write_schedule(
        &mut io::stdout().lock(),
        &view.entries,
        &TimeZone::system(),
    )
    .map_err(|error| format!("failed to write schedule: {error}"))
}
