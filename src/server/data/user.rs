use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};

/// Profile columns to change; `None` leaves a column untouched.
///
/// The nullable columns take `Some(None)` to clear the stored value.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user without a claimed username
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<entity::lynqr_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::lynqr_user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            link_username: ActiveValue::Set(None),
            has_username: ActiveValue::Set(false),
            image: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::lynqr_user::Model>, DbErr> {
        entity::prelude::LynqrUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::lynqr_user::Model>, DbErr> {
        entity::prelude::LynqrUser::find()
            .filter(entity::lynqr_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds the user holding a public username, compared exactly as stored
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::lynqr_user::Model>, DbErr> {
        entity::prelude::LynqrUser::find()
            .filter(entity::lynqr_user::Column::LinkUsername.eq(username))
            .one(self.db)
            .await
    }

    /// Sets the username and `has_username` in one statement, only if no username is claimed yet
    ///
    /// # Returns
    /// - `Ok(true)` - The username was claimed
    /// - `Ok(false)` - The user does not exist or already holds a username
    /// - `Err(DbErr)` - Database error, including a unique violation if another user holds
    ///   the username
    pub async fn claim_username(&self, user_id: i32, username: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::LynqrUser::update_many()
            .col_expr(entity::lynqr_user::Column::LinkUsername, Expr::value(username))
            .col_expr(entity::lynqr_user::Column::HasUsername, Expr::value(true))
            .col_expr(
                entity::lynqr_user::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::lynqr_user::Column::Id.eq(user_id))
            .filter(entity::lynqr_user::Column::HasUsername.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Applies profile changes to a user
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_profile(
        &self,
        user_id: i32,
        changes: ProfileChanges,
    ) -> Result<Option<entity::lynqr_user::Model>, DbErr> {
        let Some(user) = entity::prelude::LynqrUser::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = changes.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(bio) = changes.bio {
            user_am.bio = ActiveValue::Set(bio);
        }
        if let Some(image) = changes.image {
            user_am.image = ActiveValue::Set(image);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
