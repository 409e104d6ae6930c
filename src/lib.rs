//! Lynqr link-in-bio service.
//!
//! `model` holds the JSON data transfer objects shared by every API surface; `server` holds the
//! HTTP layer, services, repositories, and startup wiring.

pub mod model;
pub mod server;
