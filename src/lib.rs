//! Orderdesk
//!
//! Order drafts, draft validation and schedule display helpers for a
//! production-scheduling backend. All scheduling and persistence happens in the
//! backend; this crate only decides whether a draft may be submitted and how
//! backend data reads.

pub mod dates;
pub mod drafts;
pub mod durations;
pub mod fields;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod schedule;
pub mod validation;
