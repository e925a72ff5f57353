use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KkUser::Table)
                    .if_not_exists()
                    .col(pk_auto(KkUser::Id))
                    .col(string(KkUser::DisplayName))
                    .col(string_uniq(KkUser::Email))
                    .col(string_len(KkUser::Role, 16))
                    .col(timestamp(KkUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KkUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KkUser {
    Table,
    Id,
    DisplayName,
    Email,
    Role,
    CreatedAt,
}
