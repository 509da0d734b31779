use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 8081;

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Load the demo fixtures before serving.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Apply a `PORT` value. Unset or empty leaves the config unchanged.
    pub fn with_port_var(self, value: Option<&str>) -> ServerResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(self),
            Some(raw) => raw
                .parse::<u16>()
                .map(|port| self.with_port(port))
                .map_err(|_| ServerError::Config(format!("invalid {PORT_ENV} value: {raw:?}"))),
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> ServerResult<Self> {
        let port = std::env::var(PORT_ENV).ok();
        self.with_port_var(port.as_deref())
    }
}
