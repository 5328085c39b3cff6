pub mod message;
pub mod routes;

pub use message::{ClaimRequest, HealthResponse};
pub use routes::{build_router, AppState};
