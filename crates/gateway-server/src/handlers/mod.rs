//! HTTP route handlers for the gateway.

pub mod generate;
pub mod status;
