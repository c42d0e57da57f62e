use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored car as it is sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub size: i32,
    pub image: String,
    pub is_currently_rented: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or updating a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarAttributes {
    pub name: String,
    pub price: i64,
    pub size: i32,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_currently_rented: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub name: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                name: name.into(),
                message: message.into(),
            },
        }
    }
}
