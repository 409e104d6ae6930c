//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a `State` built from the test database and the test
//! context's in-memory session, then the status of the resulting response is asserted.

mod auth;
mod icon;
mod link;
mod profile;
mod user;

use lynqr_test_utils::prelude::*;

use crate::util::TestContextExt;
