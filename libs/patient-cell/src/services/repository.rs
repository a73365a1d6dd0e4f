use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Patient;

/// Data access for patients.
///
/// Reads surface backend failures as errors. Mutations only report whether
/// they applied; the backend logs why they did not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Patient>>;

    async fn get(&self, id: Uuid) -> Result<Option<Patient>>;

    async fn exists(&self, id: Uuid) -> Result<bool>;

    /// Case-insensitive, whitespace-trimmed name match.
    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    async fn find_by_cpf(&self, cpf: i64) -> Result<Vec<Patient>>;

    async fn create(&self, patient: &Patient) -> bool;

    /// Replaces the mutable fields of the stored row; `id` and `date_created`
    /// are never written.
    async fn update(&self, patient: &Patient) -> bool;

    async fn delete(&self, patient: &Patient) -> bool;
}
