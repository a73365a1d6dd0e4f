use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared_database::Record;
use shared_utils::{not_blank, state_code};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    /// Regional medical council licence number.
    pub crm: String,
    /// Two-letter state that issued the licence.
    pub crm_uf: String,
    pub date_created: DateTime<Utc>,
    pub patient_id: Option<Uuid>,
}

impl Record for Doctor {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: Uuid,
    pub name: String,
    pub crm: String,
    #[serde(rename = "crmuf")]
    pub crm_uf: String,
    pub date_created: DateTime<Utc>,
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorCreateDto {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "The Name field must be at most 100 characters.")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 20, message = "The CRM field must be at most 20 characters.")
    )]
    pub crm: String,
    #[serde(rename = "crmuf")]
    #[validate(custom(function = "state_code"))]
    pub crm_uf: String,
    #[serde(default)]
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorUpdateDto {
    pub id: Uuid,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "The Name field must be at most 100 characters.")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 20, message = "The CRM field must be at most 20 characters.")
    )]
    pub crm: String,
    #[serde(rename = "crmuf")]
    #[validate(custom(function = "state_code"))]
    pub crm_uf: String,
    #[serde(default)]
    pub patient_id: Option<Uuid>,
}
