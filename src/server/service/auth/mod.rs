//! Local email and password accounts.
//!
//! Signup creates an account but never signs it in. Login verifies the password and returns
//! the user; binding the user to a session is left to the controller.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, SignupDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, is_unique_violation, validation::ValidationError, Error},
        model::db::UserModel,
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `signup` - Name, email, and plain text password
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user, without a username
    /// - `Err(Error::ValidationError)` - One or more fields were rejected
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - The email is already registered
    /// - `Err(Error)` - Hashing or database failure
    pub async fn signup(&self, signup: SignupDto) -> Result<UserModel, Error> {
        let name = signup.name.trim().to_string();
        let email = normalize_email(&signup.email);

        let mut errors = ValidationError::new();
        errors.check_length("name", &name, 3, 50);
        if email.chars().count() < 5 || !is_valid_email(&email) {
            errors.push("email", "Must be a valid email address");
        }
        errors.check_length("password", &signup.password, 6, 100);
        errors.into_result()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = hash_password(&signup.password)?;

        match user_repo.create(name, email.clone(), password_hash).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Created new user");

                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(AuthError::EmailTaken(email).into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies an email and password pair.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, login: LoginDto) -> Result<UserModel, Error> {
        let email = normalize_email(&login.email);

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials(email).into());
        };

        if !verify_password(&login.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(email).into());
        }

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Minimal structural email check: one `@`, a non-empty local part, and a dotted domain with
/// no empty labels.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
