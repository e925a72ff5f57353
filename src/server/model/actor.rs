use entity::sea_orm_active_enums::UserRole;

use crate::{model::user::RoleDto, server::model::db::UserModel};

/// The authenticated identity a request acts as.
///
/// The role comes from the user record, so administrator checks never compare literal values
/// such as an email address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    /// ID of the signed-in user
    pub user_id: i32,
    /// Role read from the user record
    pub role: UserRole,
}

impl Actor {
    /// Creates a new instance of [`Actor`]
    pub fn new(user_id: i32, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Whether the actor may review and advance applications
    pub fn is_administrator(&self) -> bool {
        self.role == UserRole::Administrator
    }
}

impl From<&UserModel> for Actor {
    fn from(user: &UserModel) -> Self {
        Self::new(user.id, user.role)
    }
}

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Citizen => Self::Citizen,
            UserRole::Administrator => Self::Administrator,
        }
    }
}
