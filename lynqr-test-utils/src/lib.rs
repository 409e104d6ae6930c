//! Test harness for the Lynqr workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares which tables the test needs,
//! then the resulting [`TestContext`] exposes the database, a session, and fixture helpers
//! for inserting users, links, and clicks.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD_HASH, TEST_USER_NAME},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
