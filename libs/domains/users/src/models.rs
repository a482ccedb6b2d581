use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored user.
///
/// `is_active` is persisted but never serialized; clients can neither see
/// nor set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    #[serde(skip)]
    pub is_active: bool,
}

impl User {
    pub fn new(id: i32, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            surname: fields.surname,
            phone_number: fields.phone_number,
            email: fields.email,
            is_active: true,
        }
    }

    /// Replace all four text fields at once.
    pub fn apply(&mut self, fields: UserFields) {
        self.first_name = fields.first_name;
        self.surname = fields.surname;
        self.phone_number = fields.phone_number;
        self.email = fields.email;
    }
}

/// Request body for create.
///
/// Absent fields default to empty strings and unknown fields (an `id`
/// included) are ignored, so presence is checked separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserPayload {
    pub first_name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
}

/// Request body for update.
///
/// Same defaulting as [`CreateUserPayload`]; `id` names the user to replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserPayload {
    pub id: Option<i32>,
    pub first_name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
}

/// The client-settable attributes, each required to be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserFields {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub email: String,
}

impl From<CreateUserPayload> for UserFields {
    fn from(payload: CreateUserPayload) -> Self {
        Self {
            first_name: payload.first_name,
            surname: payload.surname,
            phone_number: payload.phone_number,
            email: payload.email,
        }
    }
}

impl From<UpdateUserPayload> for UserFields {
    fn from(payload: UpdateUserPayload) -> Self {
        Self {
            first_name: payload.first_name,
            surname: payload.surname,
            phone_number: payload.phone_number,
            email: payload.email,
        }
    }
}

/// Body returned by a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}
