//! Application, family member and sequence fixtures.

pub mod factory;

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{ApplicationStatus, Sex};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn application<'a>(&'a mut self) -> ApplicationFixtures<'a> {
        ApplicationFixtures { context: self }
    }
}

pub struct ApplicationFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    /// Inserts an application in `status` without documents.
    ///
    /// Numbers are issued as `KK-202401-NNNN` in insertion order. `active_owner_id` and
    /// `completed_at` follow the status the same way the workflow sets them.
    pub async fn insert_application(
        &self,
        owner_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::kk_application::Model, TestError> {
        self.insert(owner_id, status, None, None).await
    }

    /// Inserts an application with a birth certificate and an ID card written to storage.
    pub async fn insert_application_with_documents(
        &self,
        owner_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::kk_application::Model, TestError> {
        let birth_certificate = self
            .write_document("birth-certificates", "akta.pdf", &factory::mock_pdf())
            .await?;
        let head_id_card = self
            .write_document("id-cards", "ktp.jpg", &factory::mock_jpg())
            .await?;

        self.insert(owner_id, status, Some(birth_certificate), Some(head_id_card))
            .await
    }

    pub async fn insert_member(
        &self,
        application_id: i32,
    ) -> Result<entity::kk_family_member::Model, TestError> {
        Ok(
            entity::prelude::KkFamilyMember::insert(entity::kk_family_member::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                name: ActiveValue::Set("Budi Santoso".to_string()),
                nik: ActiveValue::Set(factory::HEAD_NIK.to_string()),
                sex: ActiveValue::Set(Sex::Male),
                birth_place: ActiveValue::Set("Bogor".to_string()),
                birth_date: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(1980, 1, 1).unwrap_or_default(),
                ),
                religion: ActiveValue::Set("Islam".to_string()),
                education: ActiveValue::Set("S1".to_string()),
                occupation: ActiveValue::Set("Karyawan Swasta".to_string()),
                marital_status: ActiveValue::Set("Kawin".to_string()),
                relationship: ActiveValue::Set("Kepala Keluarga".to_string()),
                citizenship: ActiveValue::Set("WNI".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Records that `last_value` numbers were already issued in `period` (`YYYYMM`).
    pub async fn insert_sequence(
        &self,
        period: &str,
        last_value: i32,
    ) -> Result<entity::kk_application_sequence::Model, TestError> {
        Ok(entity::prelude::KkApplicationSequence::insert(
            entity::kk_application_sequence::ActiveModel {
                period: ActiveValue::Set(period.to_string()),
                last_value: ActiveValue::Set(last_value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    async fn insert(
        &self,
        owner_id: i32,
        status: ApplicationStatus,
        birth_certificate_path: Option<String>,
        head_id_card_path: Option<String>,
    ) -> Result<entity::kk_application::Model, TestError> {
        let existing = entity::prelude::KkApplication::find()
            .count(&self.context.db)
            .await?;
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::KkApplication::insert(entity::kk_application::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                application_number: ActiveValue::Set(format!("KK-202401-{:04}", existing + 1)),
                active_owner_id: ActiveValue::Set(status.is_active().then_some(owner_id)),
                family_card_number: ActiveValue::Set(factory::FAMILY_CARD_NUMBER.to_string()),
                head_name: ActiveValue::Set("Budi Santoso".to_string()),
                head_nik: ActiveValue::Set(factory::HEAD_NIK.to_string()),
                address: ActiveValue::Set("Jl. Merdeka No. 1".to_string()),
                rt: ActiveValue::Set("001".to_string()),
                rw: ActiveValue::Set("002".to_string()),
                sub_district: ActiveValue::Set("Pakansari".to_string()),
                district: ActiveValue::Set("Cibinong".to_string()),
                regency: ActiveValue::Set("Kabupaten Bogor".to_string()),
                province: ActiveValue::Set("Jawa Barat".to_string()),
                postal_code: ActiveValue::Set("16915".to_string()),
                status: ActiveValue::Set(status),
                note: ActiveValue::Set(None),
                birth_certificate_path: ActiveValue::Set(birth_certificate_path),
                head_id_card_path: ActiveValue::Set(head_id_card_path),
                marriage_certificate_path: ActiveValue::Set(None),
                relocation_letter_path: ActiveValue::Set(None),
                submitted_at: ActiveValue::Set(now),
                completed_at: ActiveValue::Set(
                    (status == ApplicationStatus::Completed).then_some(now),
                ),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Writes a document below the storage root, returning its relative path.
    async fn write_document(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, TestError> {
        let directory = self.context.storage.path().join(bucket);
        tokio::fs::create_dir_all(&directory).await?;

        let existing = std::fs::read_dir(&directory)?.count();
        let relative = format!("{}/fixture_{}_{}", bucket, existing, file_name);
        tokio::fs::write(self.context.storage.path().join(&relative), bytes).await?;

        Ok(relative)
    }
}
