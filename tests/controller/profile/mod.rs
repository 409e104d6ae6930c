mod follow_link;
mod get_profile;

use super::*;
