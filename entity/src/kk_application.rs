use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ApplicationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kk_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    #[sea_orm(unique)]
    pub application_number: String,
    /// Holds `owner_id` while the application is active, NULL once it reaches a terminal status.
    #[sea_orm(unique, nullable)]
    pub active_owner_id: Option<i32>,
    pub family_card_number: String,
    pub head_name: String,
    pub head_nik: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub rt: String,
    pub rw: String,
    pub sub_district: String,
    pub district: String,
    pub regency: String,
    pub province: String,
    pub postal_code: String,
    pub status: ApplicationStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    #[sea_orm(nullable)]
    pub birth_certificate_path: Option<String>,
    #[sea_orm(nullable)]
    pub head_id_card_path: Option<String>,
    #[sea_orm(nullable)]
    pub marriage_certificate_path: Option<String>,
    #[sea_orm(nullable)]
    pub relocation_letter_path: Option<String>,
    pub submitted_at: DateTime,
    #[sea_orm(nullable)]
    pub completed_at: Option<DateTime>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kk_user::Entity",
        from = "Column::OwnerId",
        to = "super::kk_user::Column::Id"
    )]
    KkUser,
    #[sea_orm(has_many = "super::kk_family_member::Entity")]
    KkFamilyMember,
}

impl Related<super::kk_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KkUser.def()
    }
}

impl Related<super::kk_family_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KkFamilyMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
