use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::model::{
    application::{
        document::DocumentPaths, number::ApplicationNumber, validation::ApplicationForm,
    },
    db::ApplicationModel,
};

/// Values for a newly submitted application.
pub struct NewApplication<'a> {
    /// Submitting user
    pub owner_id: i32,
    /// Reserved `KK-YYYYMM-NNNN` number
    pub number: &'a ApplicationNumber,
    /// Validated household and member data
    pub form: &'a ApplicationForm,
    /// Stored document paths
    pub documents: &'a DocumentPaths,
    /// Submission time, UTC
    pub submitted_at: NaiveDateTime,
}

/// Queries on `kk_application`.
pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an application in [`ApplicationStatus::Pending`]
    ///
    /// Fails with a unique constraint violation when the number is taken or the owner already
    /// holds an active application.
    pub async fn create(&self, new: NewApplication<'_>) -> Result<ApplicationModel, DbErr> {
        let form = new.form;

        let application = entity::kk_application::ActiveModel {
            owner_id: ActiveValue::Set(new.owner_id),
            application_number: ActiveValue::Set(new.number.as_str().to_string()),
            active_owner_id: ActiveValue::Set(Some(new.owner_id)),
            family_card_number: ActiveValue::Set(form.family_card_number.clone()),
            head_name: ActiveValue::Set(form.head_name.clone()),
            head_nik: ActiveValue::Set(form.head_nik.clone()),
            address: ActiveValue::Set(form.address.clone()),
            rt: ActiveValue::Set(form.rt.clone()),
            rw: ActiveValue::Set(form.rw.clone()),
            sub_district: ActiveValue::Set(form.sub_district.clone()),
            district: ActiveValue::Set(form.district.clone()),
            regency: ActiveValue::Set(form.regency.clone()),
            province: ActiveValue::Set(form.province.clone()),
            postal_code: ActiveValue::Set(form.postal_code.clone()),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            note: ActiveValue::Set(None),
            birth_certificate_path: ActiveValue::Set(new.documents.birth_certificate.clone()),
            head_id_card_path: ActiveValue::Set(new.documents.head_id_card.clone()),
            marriage_certificate_path: ActiveValue::Set(
                new.documents.marriage_certificate.clone(),
            ),
            relocation_letter_path: ActiveValue::Set(new.documents.relocation_letter.clone()),
            submitted_at: ActiveValue::Set(new.submitted_at),
            completed_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(new.submitted_at),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Application with the given ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ApplicationModel>, DbErr> {
        entity::prelude::KkApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets an application only if it belongs to `owner_id`
    pub async fn get_by_id_and_owner(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<ApplicationModel>, DbErr> {
        entity::prelude::KkApplication::find_by_id(id)
            .filter(entity::kk_application::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Finds the owner's application in Pending, Verification or Printing, if any
    pub async fn find_active_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<ApplicationModel>, DbErr> {
        entity::prelude::KkApplication::find()
            .filter(entity::kk_application::Column::ActiveOwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Gets every application of an owner, newest first
    pub async fn get_many_by_owner(&self, owner_id: i32) -> Result<Vec<ApplicationModel>, DbErr> {
        entity::prelude::KkApplication::find()
            .filter(entity::kk_application::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::kk_application::Column::SubmittedAt)
            .order_by_desc(entity::kk_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets applications oldest first, optionally only those in `status`
    pub async fn get_many(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationModel>, DbErr> {
        let mut query = entity::prelude::KkApplication::find();

        if let Some(status) = status {
            query = query.filter(entity::kk_application::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::kk_application::Column::SubmittedAt)
            .order_by_asc(entity::kk_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Whether any application, in any status, carries the family card number
    pub async fn exists_by_family_card_number(
        &self,
        family_card_number: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::KkApplication::find()
            .filter(entity::kk_application::Column::FamilyCardNumber.eq(family_card_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Moves an application from `from` to `to`
    ///
    /// The update only matches while the stored status still equals `from`, check
    /// [`UpdateResult::rows_affected`] to detect a concurrent change. Entering a terminal status
    /// releases the owner's active slot, entering Completed sets `completed_at`. A `None` note
    /// leaves the stored note unchanged.
    pub async fn update_status(
        &self,
        id: i32,
        from: ApplicationStatus,
        to: ApplicationStatus,
        note: Option<String>,
        now: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        let mut application = entity::kk_application::ActiveModel {
            status: ActiveValue::Set(to),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        if let Some(note) = note {
            application.note = ActiveValue::Set(Some(note));
        }
        if to == ApplicationStatus::Completed {
            application.completed_at = ActiveValue::Set(Some(now));
        }
        if to.is_terminal() {
            application.active_owner_id = ActiveValue::Set(None);
        }

        entity::prelude::KkApplication::update_many()
            .set(application)
            .filter(entity::kk_application::Column::Id.eq(id))
            .filter(entity::kk_application::Column::Status.eq(from))
            .exec(self.db)
            .await
    }

    /// Deletes an application only while it is still Pending
    ///
    /// Family members must be deleted first. Returns OK regardless of a match, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete_pending(&self, id: i32, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::KkApplication::delete_many()
            .filter(entity::kk_application::Column::Id.eq(id))
            .filter(entity::kk_application::Column::OwnerId.eq(owner_id))
            .filter(entity::kk_application::Column::Status.eq(ApplicationStatus::Pending))
            .exec(self.db)
            .await
    }
}
