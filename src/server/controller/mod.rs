//! HTTP controller endpoints for the Lynqr web API.
//!
//! Axum handlers for accounts, links, public profiles, and the icon catalog. Protected handlers
//! resolve the caller through the access guard first, then hand the user ID to a service.
//! Every handler carries a utoipa annotation for the OpenAPI document.

pub mod auth;
pub mod icon;
pub mod link;
pub mod profile;
pub mod user;
