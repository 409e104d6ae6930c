pub mod analytics;
pub mod api;
pub mod icon;
pub mod link;
pub mod profile;
pub mod user;
