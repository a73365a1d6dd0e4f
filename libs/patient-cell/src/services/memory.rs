use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use shared_database::InMemoryTable;

use crate::models::Patient;
use crate::services::repository::PatientRepository;

#[derive(Debug, Default)]
pub struct InMemoryPatientRepository {
    table: InMemoryTable<Patient>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            table: InMemoryTable::with_rows(patients),
        }
    }
}

fn same_name(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn list(&self) -> Result<Vec<Patient>> {
        Ok(self.table.all().await)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Patient>> {
        Ok(self.table.find(id).await)
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.table.contains(id).await)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.table.any(|patient| same_name(&patient.name, name)).await)
    }

    async fn find_by_cpf(&self, cpf: i64) -> Result<Vec<Patient>> {
        Ok(self.table.filter(|patient| patient.cpf == cpf).await)
    }

    async fn create(&self, patient: &Patient) -> bool {
        let created = self.table.insert(patient.clone()).await;
        if !created {
            debug!("Patient {} already stored", patient.id);
        }
        created
    }

    async fn update(&self, patient: &Patient) -> bool {
        let updated = self
            .table
            .modify(patient.id, |stored| {
                stored.name = patient.name.clone();
                stored.cpf = patient.cpf;
                stored.doctor_id = patient.doctor_id;
            })
            .await;
        if !updated {
            debug!("Patient {} not found for update", patient.id);
        }
        updated
    }

    async fn delete(&self, patient: &Patient) -> bool {
        self.table.remove(patient.id).await
    }
}
