
use lynqr_test_utils::prelude::*;

use super::*;
