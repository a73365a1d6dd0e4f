use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use shared_database::InMemoryTable;

use crate::models::Doctor;
use crate::services::repository::DoctorRepository;

#[derive(Debug, Default)]
pub struct InMemoryDoctorRepository {
    table: InMemoryTable<Doctor>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            table: InMemoryTable::with_rows(doctors),
        }
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn list(&self) -> Result<Vec<Doctor>> {
        Ok(self.table.all().await)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Doctor>> {
        Ok(self.table.find(id).await)
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.table.contains(id).await)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .table
            .any(|doctor| doctor.name.trim().to_lowercase() == wanted)
            .await)
    }

    async fn create(&self, doctor: &Doctor) -> bool {
        self.table.insert(doctor.clone()).await
    }

    async fn update(&self, doctor: &Doctor) -> bool {
        let updated = self
            .table
            .modify(doctor.id, |stored| {
                stored.name = doctor.name.clone();
                stored.crm = doctor.crm.clone();
                stored.crm_uf = doctor.crm_uf.clone();
                stored.patient_id = doctor.patient_id;
            })
            .await;
        if !updated {
            debug!("Doctor {} not found for update", doctor.id);
        }
        updated
    }

    async fn delete(&self, doctor: &Doctor) -> bool {
        self.table.remove(doctor.id).await
    }
}
