use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_kk_application::KkApplication;

static IDX_FAMILY_MEMBER_APPLICATION_ID: &str = "idx-kk_family_member-application_id";
static FK_FAMILY_MEMBER_APPLICATION_ID: &str = "fk-kk_family_member-application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KkFamilyMember::Table)
                    .if_not_exists()
                    .col(pk_auto(KkFamilyMember::Id))
                    .col(integer(KkFamilyMember::ApplicationId))
                    .col(string(KkFamilyMember::Name))
                    .col(string_len(KkFamilyMember::Nik, 16))
                    .col(string_len(KkFamilyMember::Sex, 8))
                    .col(string(KkFamilyMember::BirthPlace))
                    .col(date(KkFamilyMember::BirthDate))
                    .col(string(KkFamilyMember::Religion))
                    .col(string(KkFamilyMember::Education))
                    .col(string(KkFamilyMember::Occupation))
                    .col(string(KkFamilyMember::MaritalStatus))
                    .col(string(KkFamilyMember::Relationship))
                    .col(string(KkFamilyMember::Citizenship))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAMILY_MEMBER_APPLICATION_ID)
                    .table(KkFamilyMember::Table)
                    .col(KkFamilyMember::ApplicationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAMILY_MEMBER_APPLICATION_ID)
                    .from_tbl(KkFamilyMember::Table)
                    .from_col(KkFamilyMember::ApplicationId)
                    .to_tbl(KkApplication::Table)
                    .to_col(KkApplication::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAMILY_MEMBER_APPLICATION_ID)
                    .table(KkFamilyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAMILY_MEMBER_APPLICATION_ID)
                    .table(KkFamilyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KkFamilyMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum KkFamilyMember {
    Table,
    Id,
    ApplicationId,
    Name,
    Nik,
    Sex,
    BirthPlace,
    BirthDate,
    Religion,
    Education,
    Occupation,
    MaritalStatus,
    Relationship,
    Citizenship,
}
