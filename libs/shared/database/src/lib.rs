pub mod memory;
pub mod supabase;

pub use memory::{InMemoryTable, Record};
pub use supabase::{literal_pattern, SupabaseClient};
