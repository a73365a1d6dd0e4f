use std::sync::Arc;

use axum::{body::Body, response::Response};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::{AppConfig, DuplicateNameStatus, StorageBackend};

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub duplicate_name_status: DuplicateNameStatus,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            duplicate_name_status: DuplicateNameStatus::NotFound,
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn conflict_on_duplicate() -> Self {
        Self {
            duplicate_name_status: DuplicateNameStatus::Conflict,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage_backend: StorageBackend::Memory,
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            duplicate_name_status: self.duplicate_name_status,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Rows shaped the way PostgREST returns them from the `patients` and
/// `doctors` tables.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn patient_row(id: Uuid, name: &str, cpf: i64) -> Value {
        json!({
            "id": id,
            "name": name,
            "cpf": cpf,
            "date_created": "2024-01-01T00:00:00Z",
            "doctor_id": null
        })
    }

    pub fn doctor_row(id: Uuid, name: &str, crm: &str, crm_uf: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "crm": crm,
            "crm_uf": crm_uf,
            "date_created": "2024-01-01T00:00:00Z",
            "patient_id": null
        })
    }

    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "message": message,
            "code": code
        })
    }
}

/// Reads an axum response body as JSON. Panics on failure; tests only.
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
