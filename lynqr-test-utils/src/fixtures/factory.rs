//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of pure logic such as ownership checks and DTO conversion.

use chrono::Utc;

use crate::constant::{TEST_PASSWORD_HASH, TEST_USER_NAME};

/// Create a mock user model with the given ID and optional claimed username.
pub fn mock_user_model(id: i32, username: Option<&str>) -> entity::lynqr_user::Model {
    let now = Utc::now().naive_utc();
    entity::lynqr_user::Model {
        id,
        name: TEST_USER_NAME.to_string(),
        email: format!("user{}@example.com", id),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        link_username: username.map(str::to_string),
        has_username: username.is_some(),
        image: None,
        bio: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock active link model owned by `user_id`.
///
/// # Arguments
/// - `id` - Link ID
/// - `user_id` - ID of the owning user
/// - `url` - Destination URL
pub fn mock_link_model(id: i32, user_id: i32, url: &str) -> entity::lynqr_link::Model {
    let now = Utc::now().naive_utc();
    entity::lynqr_link::Model {
        id,
        user_id,
        title: "Test Link".to_string(),
        url: url.to_string(),
        icon: None,
        description: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
