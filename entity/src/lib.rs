//! SeaORM entities for the family card intake database.

pub mod prelude;

pub mod kk_application;
pub mod kk_application_sequence;
pub mod kk_family_member;
pub mod kk_user;
pub mod sea_orm_active_enums;
