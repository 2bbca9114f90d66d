//! Request and response bodies for the asset API.

use serde::{Deserialize, Serialize};

use crate::model::category::FieldType;
use crate::model::user::User;

/// Request payload for `POST /api/login/`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

/// Body of `POST /api/assets/` and `PUT /api/assets/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSubmission {
    pub name: String,
    /// Category id.
    pub category: String,
    pub fields: Vec<FieldSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSubmission {
    pub name: String,
    pub value: String,
}

/// Body of `POST /api/categories/` and `PUT /api/categories/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySubmission {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

/// A field as edited in the category form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDefinition {
    pub fn blank(order: i32) -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            field_type: FieldType::Text,
            required: false,
            order,
            options: Vec::new(),
        }
    }
}
