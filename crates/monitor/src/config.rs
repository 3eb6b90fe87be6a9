use std::net::SocketAddr;

use alloy_primitives::Address;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub struct MonitorConfig {
    pub http_addr: SocketAddr,
    pub rpc_url: String,
    pub sequencer_address: Address,
}

impl MonitorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = std::env::var("HTTP_ADDR")
            .unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string())
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "HTTP_ADDR",
                reason: format!("{e}"),
            })?;

        let rpc_url = std::env::var("RPC_URL").map_err(|_| ConfigError::Missing("RPC_URL"))?;

        let sequencer_address = std::env::var("SEQUENCER_ADDRESS")
            .map_err(|_| ConfigError::Missing("SEQUENCER_ADDRESS"))?
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "SEQUENCER_ADDRESS",
                reason: format!("{e}"),
            })?;

        Ok(Self {
            http_addr,
            rpc_url,
            sequencer_address,
        })
    }
}
