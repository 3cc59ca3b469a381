// src/api/mod.rs
// HTTP surface: router, handlers, error mapping

pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use http::create_router;
pub use state::AppState;
