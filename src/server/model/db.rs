//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures don't
//! need to spell out the generated `entity` crate paths.

/// Type alias for a Lynqr user account.
///
/// # Fields (from `entity::lynqr_user::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `email` - Unique login email
/// - `password_hash` - Argon2id PHC string
/// - `link_username` - Claimed public handle, unique when set
/// - `has_username` - Whether the handle has been claimed
/// - `image` - Profile image reference
/// - `bio` - Profile biography
pub type UserModel = entity::lynqr_user::Model;

/// Type alias for a link owned by a user.
///
/// # Fields (from `entity::lynqr_link::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user, immutable
/// - `title` - Display title
/// - `url` - Destination URL, unique per owner
/// - `icon` - Icon catalog tag as entered
/// - `description` - Optional description
/// - `is_active` - Whether the link is shown on the public profile
pub type LinkModel = entity::lynqr_link::Model;

/// Type alias for a single recorded click on a link.
pub type ClickModel = entity::lynqr_click::Model;
