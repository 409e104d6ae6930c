
use lynqr_test_utils::prelude::*;

use super::*;

fn signup_dto(email: &str) -> SignupDto {
    SignupDto {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "analytical".to_string(),
    }
}
