//! Standard values shared by fixtures.

/// Display name given to every fixture user.
pub static TEST_USER_NAME: &str = "Test User";

/// Placeholder stored in `password_hash` for fixture users.
///
/// This is deliberately not a valid PHC string, so fixture users can never log in with a
/// password. Tests exercising login create their account through the signup service instead.
pub static TEST_PASSWORD_HASH: &str = "not-a-password-hash";
