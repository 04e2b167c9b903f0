pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;
pub use handlers::recommend;
pub use types::{ErrorResponse, RecommendResponse};
