pub mod handlers;
pub mod mapper;
pub mod models;
pub mod router;
pub mod services;

pub use handlers::PatientState;
pub use models::*;
pub use router::patient_routes;
pub use services::{InMemoryPatientRepository, PatientRepository, SupabasePatientRepository};
