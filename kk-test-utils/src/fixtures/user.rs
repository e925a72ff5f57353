use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user with a generated unique email.
    pub async fn insert_user(&self, role: UserRole) -> Result<entity::kk_user::Model, TestError> {
        let existing = entity::prelude::KkUser::find().count(&self.context.db).await?;
        let sequence = existing + 1;

        Ok(
            entity::prelude::KkUser::insert(entity::kk_user::ActiveModel {
                display_name: ActiveValue::Set(format!("Test User {}", sequence)),
                email: ActiveValue::Set(format!("user{}@example.test", sequence)),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_citizen(&self) -> Result<entity::kk_user::Model, TestError> {
        self.insert_user(UserRole::Citizen).await
    }

    pub async fn insert_administrator(&self) -> Result<entity::kk_user::Model, TestError> {
        self.insert_user(UserRole::Administrator).await
    }
}
