use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{literal_pattern, SupabaseClient};

use crate::models::Doctor;
use crate::services::repository::DoctorRepository;

const DOCTORS_PATH: &str = "/rest/v1/doctors";

pub struct SupabaseDoctorRepository {
    supabase: SupabaseClient,
}

impl SupabaseDoctorRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    async fn select(&self, query: &str) -> Result<Vec<Doctor>> {
        let path = format!("{}?{}", DOCTORS_PATH, query);
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;

        let doctors = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Doctor>, _>>()?;

        Ok(doctors)
    }

    async fn mutate(&self, method: Method, path: &str, body: Option<Value>, action: &str) -> bool {
        let result: Result<Vec<Value>> = self
            .supabase
            .request_with_headers(method, path, body, Some(SupabaseClient::return_representation()))
            .await;

        match result {
            Ok(rows) => !rows.is_empty(),
            Err(e) => {
                error!("Doctor {} failed: {}", action, e);
                false
            }
        }
    }
}

#[async_trait]
impl DoctorRepository for SupabaseDoctorRepository {
    async fn list(&self) -> Result<Vec<Doctor>> {
        debug!("Listing doctors");
        self.select("order=date_created.asc").await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Doctor>> {
        debug!("Fetching doctor: {}", id);
        let mut doctors = self.select(&format!("id=eq.{}&limit=1", id)).await?;
        Ok(doctors.pop())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let path = format!(
            "{}?select=id&name=ilike.{}&limit=1",
            DOCTORS_PATH,
            urlencoding::encode(&literal_pattern(name.trim()))
        );
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;
        Ok(!rows.is_empty())
    }

    async fn create(&self, doctor: &Doctor) -> bool {
        debug!("Creating doctor: {}", doctor.id);
        self.mutate(Method::POST, DOCTORS_PATH, Some(json!(doctor)), "create")
            .await
    }

    async fn update(&self, doctor: &Doctor) -> bool {
        debug!("Updating doctor: {}", doctor.id);
        let path = format!("{}?id=eq.{}", DOCTORS_PATH, doctor.id);
        let changes = json!({
            "name": doctor.name,
            "crm": doctor.crm,
            "crm_uf": doctor.crm_uf,
            "patient_id": doctor.patient_id,
        });
        self.mutate(Method::PATCH, &path, Some(changes), "update").await
    }

    async fn delete(&self, doctor: &Doctor) -> bool {
        debug!("Deleting doctor: {}", doctor.id);
        let path = format!("{}?id=eq.{}", DOCTORS_PATH, doctor.id);
        self.mutate(Method::DELETE, &path, None, "delete").await
    }
}
