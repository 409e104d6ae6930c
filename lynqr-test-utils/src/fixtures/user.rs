use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_PASSWORD_HASH, TEST_USER_NAME},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { ctx: self }
    }
}

pub struct UserFixtures<'a> {
    ctx: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user that has not yet claimed a username.
    pub async fn insert_user(&self, email: &str) -> Result<entity::lynqr_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LynqrUser::insert(entity::lynqr_user::ActiveModel {
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                link_username: ActiveValue::Set(None),
                has_username: ActiveValue::Set(false),
                image: ActiveValue::Set(None),
                bio: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.ctx.db)
            .await?,
        )
    }

    /// Insert a user whose public username is already claimed.
    pub async fn insert_user_with_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<entity::lynqr_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LynqrUser::insert(entity::lynqr_user::ActiveModel {
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                link_username: ActiveValue::Set(Some(username.to_string())),
                has_username: ActiveValue::Set(true),
                image: ActiveValue::Set(None),
                bio: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.ctx.db)
            .await?,
        )
    }
}
