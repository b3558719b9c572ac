//! Production Schedule

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::{dates::parse_need_by, durations::format_production_time, orders::OrderId};

/// One scheduled production run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Order the run belongs to
    pub order_id: OrderId,

    /// Name of the produced product
    pub product_name: String,

    /// Produced quantity
    pub quantity: i64,

    /// Planned start
    pub start_time: String,

    /// Planned end
    pub end_time: String,

    /// Requested fulfilment date of the order
    pub need_by: String,

    /// Production time in minutes
    pub production_time: f64,
}

impl ScheduleEntry {
    /// Whether the run is planned to finish after the order's need-by date.
    ///
    /// Entries with unreadable dates are never reported late.
    pub fn is_late(&self, tz: &TimeZone) -> bool {
        match (
            parse_need_by(&self.end_time, tz),
            parse_need_by(&self.need_by, tz),
        ) {
            (Ok(end), Ok(need_by)) => end > need_by,
            _ => false,
        }
    }

    /// Human-readable production time.
    pub fn production_time_display(&self) -> String {
        format_production_time(self.production_time)
    }
}
