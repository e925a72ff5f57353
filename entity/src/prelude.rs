pub use super::kk_application::Entity as KkApplication;
pub use super::kk_application_sequence::Entity as KkApplicationSequence;
pub use super::kk_family_member::Entity as KkFamilyMember;
pub use super::kk_user::Entity as KkUser;
