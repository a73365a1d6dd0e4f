pub mod memory;
pub mod repository;
pub mod supabase;

pub use memory::InMemoryDoctorRepository;
pub use repository::DoctorRepository;
pub use supabase::SupabaseDoctorRepository;

#[cfg(test)]
pub use repository::MockDoctorRepository;
