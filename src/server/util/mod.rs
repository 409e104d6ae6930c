//! Utility functions shared by services.

pub mod password;
