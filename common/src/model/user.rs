use serde::{Deserialize, Serialize};

use super::scalar_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendor,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
            Role::User => "user",
        }
    }
}

/// The signed-in identity as reported by `/api/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl User {
    /// Company for display; the API sends an empty string when there is none.
    pub fn company(&self) -> Option<&str> {
        self.company_name.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_and_blank_company() {
        let user: User = serde_json::from_value(json!({
            "id": 7, "username": "vera", "role": "vendor", "company_name": ""
        }))
        .unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.role, Role::Vendor);
        assert_eq!(user.company(), None);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "id": "1", "username": "x", "role": "root"
        }));
        assert!(result.is_err());
    }
}
