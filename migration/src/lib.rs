pub use sea_orm_migration::prelude::*;

mod m20251020_000001_kk_user;
mod m20251020_000002_kk_application;
mod m20251020_000003_kk_family_member;
mod m20251020_000004_kk_application_sequence;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_kk_user::Migration),
            Box::new(m20251020_000002_kk_application::Migration),
            Box::new(m20251020_000003_kk_family_member::Migration),
            Box::new(m20251020_000004_kk_application_sequence::Migration),
        ]
    }
}
