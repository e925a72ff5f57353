use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Sex;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kk_family_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    pub name: String,
    pub nik: String,
    pub sex: Sex,
    pub birth_place: String,
    pub birth_date: Date,
    pub religion: String,
    pub education: String,
    pub occupation: String,
    pub marital_status: String,
    pub relationship: String,
    pub citizenship: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kk_application::Entity",
        from = "Column::ApplicationId",
        to = "super::kk_application::Column::Id"
    )]
    KkApplication,
}

impl Related<super::kk_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KkApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
