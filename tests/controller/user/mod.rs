mod update_profile;

use super::*;
