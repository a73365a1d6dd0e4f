pub mod handlers;
pub mod mapper;
pub mod models;
pub mod router;
pub mod services;

pub use handlers::DoctorState;
pub use models::*;
pub use router::doctor_routes;
pub use services::{DoctorRepository, InMemoryDoctorRepository, SupabaseDoctorRepository};
