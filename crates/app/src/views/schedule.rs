//! Schedule View

use tracing::warn;

use orderdesk::schedule::ScheduleEntry;

use crate::{api::OrdersBackend, views::ViewError};

/// The production schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleView {
    /// Scheduled runs, in backend order
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleView {
    /// Fetch the production schedule.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when the backend cannot be reached.
    pub async fn load(backend: &dyn OrdersBackend) -> Result<Self, ViewError> {
        let entries = backend.get_schedule().await.map_err(|error| {
            warn!(%error, "failed to fetch schedule");

            ViewError::offline(&error)
        })?;

        Ok(Self { entries })
    }
}
