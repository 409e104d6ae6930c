//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so services can run them against a plain connection or inside a
//! transaction.

pub mod click;
pub mod link;
pub mod user;
