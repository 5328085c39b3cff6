pub mod api;
pub mod config;

pub use api::{build_router, AppState};
pub use config::ServerConfig;
