//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::IpAddr;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BIND_ADDR").ok().as_deref(),
        )
    }

    /// Same as [`HostConfig::from_env`] over explicit raw values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unparseable value.
    pub fn from_values(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.to_owned() })?,
        };
        let raw_addr = bind_addr
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: raw_addr.to_owned() })?;
        Ok(Self { bind_addr, port })
    }

    pub fn listen_addr(&self) -> String {
        std::net::SocketAddr::new(self.bind_addr, self.port).to_string()
    }
}
