use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::UserModel;

/// Queries on `kk_user`.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        display_name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<UserModel, DbErr> {
        let user = entity::kk_user::ActiveModel {
            display_name: ActiveValue::Set(display_name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// User with the given ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::KkUser::find_by_id(user_id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::sea_orm_active_enums::UserRole;
        use kk_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_application_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository
                .create("Budi", "budi@example.test", UserRole::Administrator)
                .await;

            assert!(matches!(result, Ok(ref user) if user.role == UserRole::Administrator));

            Ok(())
        }

        /// Expect Error when creating a second user with the same email
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_application_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            user_repository
                .create("Budi", "budi@example.test", UserRole::Citizen)
                .await?;
            let result = user_repository
                .create("Budi Two", "budi@example.test", UserRole::Citizen)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use entity::sea_orm_active_enums::UserRole;
        use kk_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_application_tables().build().await?;
            let user_model = test.user().insert_user(UserRole::Citizen).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(user_model.id).await;

            assert!(matches!(result, Ok(Some(ref user)) if *user == user_model));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_application_tables().build().await?;

            let nonexistent_user_id = 1;
            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(nonexistent_user_id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
