//! User service layer.
//!
//! Users are provisioned by the identity provider, this service only reads them to resolve the
//! signed-in user and their role.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::Error,
        model::{actor::Actor, db::UserModel},
        service::retry::RetryContext,
    },
};

/// Service for reading user identities.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves user information.
    ///
    /// Uses automatic retry logic to handle transient database failures.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        Ok(self.get_user_model(user_id).await?.map(|user| UserDto {
            id: user.id,
            display_name: user.display_name,
            role: user.role.into(),
        }))
    }

    /// Resolves the identity a request acts as.
    ///
    /// # Returns
    /// - `Ok(Some(Actor))` - User found, with the role stored on their record
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_actor(&self, user_id: i32) -> Result<Option<Actor>, Error> {
        Ok(self
            .get_user_model(user_id)
            .await?
            .as_ref()
            .map(Actor::from))
    }

    async fn get_user_model(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let user_repo = UserRepository::new(&db);

                Ok(user_repo.get_by_id(user_id).await?)
            })
        })
        .await
    }
}
