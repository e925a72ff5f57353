use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KkApplicationSequence::Table)
                    .if_not_exists()
                    .col(string_len(KkApplicationSequence::Period, 6).primary_key())
                    .col(integer(KkApplicationSequence::LastValue))
                    .col(timestamp(KkApplicationSequence::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KkApplicationSequence::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum KkApplicationSequence {
    Table,
    Period,
    LastValue,
    UpdatedAt,
}
