use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::warn;

use doctor_cell::{
    doctor_routes, DoctorRepository, DoctorState, InMemoryDoctorRepository,
    SupabaseDoctorRepository,
};
use patient_cell::{
    patient_routes, InMemoryPatientRepository, PatientRepository, PatientState,
    SupabasePatientRepository,
};
use shared_config::{AppConfig, StorageBackend};

/// Repositories for every cell, chosen once from configuration.
pub struct Repositories {
    pub patients: Arc<dyn PatientRepository>,
    pub doctors: Arc<dyn DoctorRepository>,
}

impl Repositories {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage_backend {
            StorageBackend::Supabase if config.is_supabase_configured() => Self {
                patients: Arc::new(SupabasePatientRepository::new(config)),
                doctors: Arc::new(SupabaseDoctorRepository::new(config)),
            },
            StorageBackend::Supabase => {
                warn!("Supabase is not configured, falling back to in-memory storage");
                Self::in_memory()
            }
            StorageBackend::Memory => Self::in_memory(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            patients: Arc::new(InMemoryPatientRepository::new()),
            doctors: Arc::new(InMemoryDoctorRepository::new()),
        }
    }
}

pub fn create_router(config: Arc<AppConfig>) -> Router {
    let repositories = Repositories::from_config(&config);
    create_router_with(config, repositories)
}

pub fn create_router_with(config: Arc<AppConfig>, repositories: Repositories) -> Router {
    let api = Router::new()
        .nest(
            "/patients",
            patient_routes(PatientState::new(repositories.patients, config.clone())),
        )
        .nest(
            "/doctors",
            doctor_routes(DoctorState::new(repositories.doctors, config.clone())),
        );

    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest(&config.api_prefix(), api)
}
