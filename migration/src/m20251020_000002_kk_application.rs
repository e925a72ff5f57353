use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_kk_user::KkUser;

static IDX_APPLICATION_OWNER_ID: &str = "idx-kk_application-owner_id";
static IDX_APPLICATION_STATUS: &str = "idx-kk_application-status";
static IDX_APPLICATION_FAMILY_CARD_NUMBER: &str = "idx-kk_application-family_card_number";
static FK_APPLICATION_OWNER_ID: &str = "fk-kk_application-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KkApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(KkApplication::Id))
                    .col(integer(KkApplication::OwnerId))
                    .col(string_len_uniq(KkApplication::ApplicationNumber, 16))
                    // NULL once terminal; unique while active so an owner holds at most one
                    .col(integer_null(KkApplication::ActiveOwnerId).unique_key())
                    .col(string_len(KkApplication::FamilyCardNumber, 16))
                    .col(string(KkApplication::HeadName))
                    .col(string_len(KkApplication::HeadNik, 16))
                    .col(text(KkApplication::Address))
                    .col(string_len(KkApplication::Rt, 3))
                    .col(string_len(KkApplication::Rw, 3))
                    .col(string(KkApplication::SubDistrict))
                    .col(string(KkApplication::District))
                    .col(string(KkApplication::Regency))
                    .col(string(KkApplication::Province))
                    .col(string_len(KkApplication::PostalCode, 5))
                    .col(string_len(KkApplication::Status, 16))
                    .col(text_null(KkApplication::Note))
                    .col(string_null(KkApplication::BirthCertificatePath))
                    .col(string_null(KkApplication::HeadIdCardPath))
                    .col(string_null(KkApplication::MarriageCertificatePath))
                    .col(string_null(KkApplication::RelocationLetterPath))
                    .col(timestamp(KkApplication::SubmittedAt))
                    .col(timestamp_null(KkApplication::CompletedAt))
                    .col(timestamp(KkApplication::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_OWNER_ID)
                    .table(KkApplication::Table)
                    .col(KkApplication::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_STATUS)
                    .table(KkApplication::Table)
                    .col(KkApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_FAMILY_CARD_NUMBER)
                    .table(KkApplication::Table)
                    .col(KkApplication::FamilyCardNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_OWNER_ID)
                    .from_tbl(KkApplication::Table)
                    .from_col(KkApplication::OwnerId)
                    .to_tbl(KkUser::Table)
                    .to_col(KkUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_OWNER_ID)
                    .table(KkApplication::Table)
                    .to_owned(),
            )
            .await?;

        for index in [
            IDX_APPLICATION_FAMILY_CARD_NUMBER,
            IDX_APPLICATION_STATUS,
            IDX_APPLICATION_OWNER_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(index)
                        .table(KkApplication::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(KkApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KkApplication {
    Table,
    Id,
    OwnerId,
    ApplicationNumber,
    ActiveOwnerId,
    FamilyCardNumber,
    HeadName,
    HeadNik,
    Address,
    Rt,
    Rw,
    SubDistrict,
    District,
    Regency,
    Province,
    PostalCode,
    Status,
    Note,
    BirthCertificatePath,
    HeadIdCardPath,
    MarriageCertificatePath,
    RelocationLetterPath,
    SubmittedAt,
    CompletedAt,
    UpdatedAt,
}
