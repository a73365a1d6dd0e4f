use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared_database::Record;
use shared_utils::not_blank;

/// Persisted patient row. Field names match the `patients` table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub cpf: i64,
    pub date_created: DateTime<Utc>,
    pub doctor_id: Option<Uuid>,
}

impl Record for Patient {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: Uuid,
    pub name: String,
    pub cpf: i64,
    pub date_created: DateTime<Utc>,
    pub doctor_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientCreateDto {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "The Name field must be at most 100 characters.")
    )]
    pub name: String,
    #[validate(range(min = 0, message = "The CPF must not be negative."))]
    pub cpf: i64,
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdateDto {
    pub id: Uuid,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "The Name field must be at most 100 characters.")
    )]
    pub name: String,
    #[validate(range(min = 0, message = "The CPF must not be negative."))]
    pub cpf: i64,
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
}
