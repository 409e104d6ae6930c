//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a fixture
//! helper for one table:
//!
//! - `user` - Lynqr accounts, with or without a claimed username
//! - `link` - Links owned by a user
//! - `click` - Click records for a link
//!
//! `factory` holds pure functions building in-memory models for unit tests.

pub mod click;
pub mod factory;
pub mod link;
pub mod user;
