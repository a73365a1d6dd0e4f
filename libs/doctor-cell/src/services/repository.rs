use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Doctor;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Doctor>>;

    async fn get(&self, id: Uuid) -> Result<Option<Doctor>>;

    async fn exists(&self, id: Uuid) -> Result<bool>;

    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    async fn create(&self, doctor: &Doctor) -> bool;

    async fn update(&self, doctor: &Doctor) -> bool;

    async fn delete(&self, doctor: &Doctor) -> bool;
}
