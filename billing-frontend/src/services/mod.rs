pub mod backend;
pub mod metrics;
pub mod supabase;

pub use backend::{BackendClient, BackendError};
pub use supabase::SupabaseClient;
