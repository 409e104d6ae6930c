//! Service layer for business logic.
//!
//! Services validate input, enforce ownership, and coordinate repositories. They receive the
//! caller's user ID from the controller after the access guard has run; only the access guard
//! itself looks at the session.

pub mod access;
pub mod analytics;
pub mod auth;
pub mod link;
pub mod profile;
pub mod user;
