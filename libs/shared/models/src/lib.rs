pub mod error;
pub mod model_state;

pub use error::AppError;
pub use model_state::ModelState;
