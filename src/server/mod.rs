//! Server application core modules.
//!
//! This module contains all server-side functionality for Lynqr: HTTP routing and controllers,
//! session-based authentication, the link, profile, and analytics services, and the
//! repositories over the user, link, and click tables.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
