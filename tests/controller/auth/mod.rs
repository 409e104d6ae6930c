mod logout;
mod signup;

use lynqr::model::user::SignupDto;

use super::*;

fn signup_dto(email: &str) -> SignupDto {
    SignupDto {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
    }
}
