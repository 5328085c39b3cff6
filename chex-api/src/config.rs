use std::env;
use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// The single browser origin allowed to call the API with credentials.
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind = env::var("CHEX_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid CHEX_BIND_ADDR: {bind}"))?;
        let allowed_origin = env::var("CHEX_ALLOWED_ORIGIN")
            .ok()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        Ok(Self {
            bind_addr,
            allowed_origin,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}
