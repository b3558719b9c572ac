//! Scheduling backend API

mod backend;
mod errors;
pub mod http;

pub use backend::*;
pub use errors::ApiError;
pub use http::{BackendConfig, HttpBackend};
