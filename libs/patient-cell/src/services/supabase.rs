use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{literal_pattern, SupabaseClient};

use crate::models::Patient;
use crate::services::repository::PatientRepository;

const PATIENTS_PATH: &str = "/rest/v1/patients";

/// Patients stored in the `patients` table of a Supabase project.
pub struct SupabasePatientRepository {
    supabase: SupabaseClient,
}

impl SupabasePatientRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    async fn select(&self, query: &str) -> Result<Vec<Patient>> {
        let path = format!("{}?{}", PATIENTS_PATH, query);
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;

        let patients = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Patient>, _>>()?;

        Ok(patients)
    }

    /// Sends a mutation and reports whether PostgREST echoed back a row.
    async fn mutate(&self, method: Method, path: &str, body: Option<Value>, action: &str) -> bool {
        let result: Result<Vec<Value>> = self
            .supabase
            .request_with_headers(method, path, body, Some(SupabaseClient::return_representation()))
            .await;

        match result {
            Ok(rows) if !rows.is_empty() => true,
            Ok(_) => {
                debug!("Patient {} affected no rows", action);
                false
            }
            Err(e) => {
                error!("Patient {} failed: {}", action, e);
                false
            }
        }
    }
}

#[async_trait]
impl PatientRepository for SupabasePatientRepository {
    async fn list(&self) -> Result<Vec<Patient>> {
        debug!("Listing patients");
        self.select("order=date_created.asc").await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Patient>> {
        debug!("Fetching patient: {}", id);
        let mut patients = self.select(&format!("id=eq.{}&limit=1", id)).await?;
        Ok(patients.pop())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let path = format!(
            "{}?select=id&name=ilike.{}&limit=1",
            PATIENTS_PATH,
            urlencoding::encode(&literal_pattern(name.trim()))
        );
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;
        Ok(!rows.is_empty())
    }

    async fn find_by_cpf(&self, cpf: i64) -> Result<Vec<Patient>> {
        debug!("Searching patients by CPF: {}", cpf);
        self.select(&format!("cpf=eq.{}", cpf)).await
    }

    async fn create(&self, patient: &Patient) -> bool {
        debug!("Creating patient: {}", patient.id);
        self.mutate(Method::POST, PATIENTS_PATH, Some(json!(patient)), "create")
            .await
    }

    async fn update(&self, patient: &Patient) -> bool {
        debug!("Updating patient: {}", patient.id);
        let path = format!("{}?id=eq.{}", PATIENTS_PATH, patient.id);
        let changes = json!({
            "name": patient.name,
            "cpf": patient.cpf,
            "doctor_id": patient.doctor_id,
        });
        self.mutate(Method::PATCH, &path, Some(changes), "update").await
    }

    async fn delete(&self, patient: &Patient) -> bool {
        debug!("Deleting patient: {}", patient.id);
        let path = format!("{}?id=eq.{}", PATIENTS_PATH, patient.id);
        self.mutate(Method::DELETE, &path, None, "delete").await
    }
}
