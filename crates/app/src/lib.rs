//! Order desk application: backend client, order views and terminal
//! rendering.

pub mod api;
pub mod config;
pub mod observability;
pub mod render;
pub mod views;
