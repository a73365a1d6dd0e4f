pub mod memory;
pub mod repository;
pub mod supabase;

pub use memory::InMemoryPatientRepository;
pub use repository::PatientRepository;
pub use supabase::SupabasePatientRepository;

#[cfg(test)]
pub use repository::MockPatientRepository;
