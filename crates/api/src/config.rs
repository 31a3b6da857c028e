//! Process configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use cinema_tickets::{ConfigError, TicketRules};

pub const API_ADDR_ENV: &str = "CINEMA_API_ADDR";
pub const DEFAULT_API_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("CINEMA_API_ADDR is not a socket address: {0:?}")]
    InvalidAddr(String),

    #[error(transparent)]
    Rules(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub rules: TicketRules,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(API_ADDR_ENV).unwrap_or_else(|| DEFAULT_API_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ApiConfigError::InvalidAddr(raw_addr.clone()))?;

        let rules = TicketRules::from_lookup(&lookup)?;

        Ok(Self { addr, rules })
    }
}
