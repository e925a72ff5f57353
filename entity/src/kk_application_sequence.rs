use sea_orm::entity::prelude::*;

/// Per-month counter of issued application numbers.
///
/// `last_value` only ever grows, so numbers freed by a cancelled application are never reissued.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kk_application_sequence")]
pub struct Model {
    /// `YYYYMM` of the sequence scope.
    #[sea_orm(primary_key, auto_increment = false)]
    pub period: String,
    pub last_value: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
