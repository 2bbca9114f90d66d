use crate::model::user::{Role, User};

/// Rendering toggles derived from the role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub view_categories: bool,
    pub manage_categories: bool,
    pub edit_assets: bool,
    pub view_my_assets: bool,
    pub manage_users: bool,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                view_categories: true,
                manage_categories: true,
                edit_assets: true,
                view_my_assets: false,
                manage_users: true,
            },
            Role::Vendor => Self {
                view_categories: true,
                manage_categories: false,
                edit_assets: true,
                view_my_assets: true,
                manage_users: false,
            },
            Role::User => Self::default(),
        }
    }

    /// Anonymous visitors get nothing.
    pub fn for_user(user: Option<&User>) -> Self {
        user.map(|u| Self::for_role(u.role)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_matrix() {
        let admin = Capabilities::for_role(Role::Admin);
        assert!(admin.manage_categories && admin.manage_users && admin.edit_assets);
        assert!(!admin.view_my_assets);

        let vendor = Capabilities::for_role(Role::Vendor);
        assert!(vendor.view_categories && vendor.edit_assets && vendor.view_my_assets);
        assert!(!vendor.manage_categories && !vendor.manage_users);

        assert_eq!(Capabilities::for_role(Role::User), Capabilities::default());
        assert_eq!(Capabilities::for_user(None), Capabilities::default());
    }
}
