use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{application::validation::MemberForm, db::FamilyMemberModel};

/// Queries on `kk_family_member`.
pub struct FamilyMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FamilyMemberRepository<'a, C> {
    /// Creates a new instance of [`FamilyMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the members listed on an application, in form order
    pub async fn create_many(
        &self,
        application_id: i32,
        members: &[MemberForm],
    ) -> Result<(), DbErr> {
        if members.is_empty() {
            return Ok(());
        }

        let members = members
            .iter()
            .map(|member| entity::kk_family_member::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                name: ActiveValue::Set(member.name.clone()),
                nik: ActiveValue::Set(member.nik.clone()),
                sex: ActiveValue::Set(member.sex),
                birth_place: ActiveValue::Set(member.birth_place.clone()),
                birth_date: ActiveValue::Set(member.birth_date),
                religion: ActiveValue::Set(member.religion.clone()),
                education: ActiveValue::Set(member.education.clone()),
                occupation: ActiveValue::Set(member.occupation.clone()),
                marital_status: ActiveValue::Set(member.marital_status.clone()),
                relationship: ActiveValue::Set(member.relationship.clone()),
                citizenship: ActiveValue::Set(member.citizenship.clone()),
                ..Default::default()
            });

        entity::prelude::KkFamilyMember::insert_many(members)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Members of an application in the order they were submitted
    pub async fn get_by_application_id(
        &self,
        application_id: i32,
    ) -> Result<Vec<FamilyMemberModel>, DbErr> {
        entity::prelude::KkFamilyMember::find()
            .filter(entity::kk_family_member::Column::ApplicationId.eq(application_id))
            .order_by_asc(entity::kk_family_member::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every member of an application
    pub async fn delete_by_application_id(
        &self,
        application_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::KkFamilyMember::delete_many()
            .filter(entity::kk_family_member::Column::ApplicationId.eq(application_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::sea_orm_active_enums::Sex;

    use crate::server::model::application::validation::MemberForm;

    fn member(name: &str) -> MemberForm {
        MemberForm {
            name: name.to_string(),
            nik: "3201010101800001".to_string(),
            sex: Sex::Female,
            birth_place: "Bogor".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            religion: "Islam".to_string(),
            education: "SMA".to_string(),
            occupation: "Wiraswasta".to_string(),
            marital_status: "Kawin".to_string(),
            relationship: "Istri".to_string(),
            citizenship: "WNI".to_string(),
        }
    }

    mod create_many {
        use entity::sea_orm_active_enums::ApplicationStatus;
        use kk_test_utils::prelude::*;

        use super::member;
        use crate::server::data::family_member::FamilyMemberRepository;

        /// Expect members to be returned in submission order
        #[tokio::test]
        async fn inserts_members_in_order() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_application_tables().build().await?;
            let owner = test.user().insert_citizen().await?;
            let application = test
                .application()
                .insert_application(owner.id, ApplicationStatus::Pending)
                .await?;

            let repo = FamilyMemberRepository::new(&test.db);
            repo.create_many(application.id, &[member("Siti"), member("Adi")])
                .await?;

            let names: Vec<String> = repo
                .get_by_application_id(application.id)
                .await?
                .into_iter()
                .map(|member| member.name)
                .collect();
            assert_eq!(names, vec!["Siti", "Adi"]);

            Ok(())
        }

        /// Expect Error when the application does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_application() -> Result<(), TestError> {
            let test = TestBuilder::new().with_application_tables().build().await?;

            let repo = FamilyMemberRepository::new(&test.db);
            let result = repo.create_many(1, &[member("Siti")]).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete_by_application_id {
        use entity::sea_orm_active_enums::ApplicationStatus;
        use kk_test_utils::prelude::*;

        use crate::server::data::family_member::FamilyMemberRepository;

        /// Expect only the given application's members to be deleted
        #[tokio::test]
        async fn deletes_members_of_application() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_application_tables().build().await?;
            let first_owner = test.user().insert_citizen().await?;
            let second_owner = test.user().insert_citizen().await?;
            let first = test
                .application()
                .insert_application(first_owner.id, ApplicationStatus::Pending)
                .await?;
            let second = test
                .application()
                .insert_application(second_owner.id, ApplicationStatus::Pending)
                .await?;
            test.application().insert_member(first.id).await?;
            test.application().insert_member(first.id).await?;
            test.application().insert_member(second.id).await?;

            let repo = FamilyMemberRepository::new(&test.db);
            let result = repo.delete_by_application_id(first.id).await?;

            assert_eq!(result.rows_affected, 2);
            assert_eq!(repo.get_by_application_id(second.id).await?.len(), 1);

            Ok(())
        }
    }
}
