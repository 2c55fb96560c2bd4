use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const HOST_VAR: &str = "TASKNEST_HTTP_HOST";
const PORT_VAR: &str = "PORT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum HttpConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpConfig {
    pub fn from_env() -> Result<Self, HttpConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HttpConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(host) => host.trim().parse().map_err(|e: std::net::AddrParseError| {
                HttpConfigError::Invalid {
                    name: HOST_VAR,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(port) => port.trim().parse().map_err(|e: std::num::ParseIntError| {
                HttpConfigError::Invalid {
                    name: PORT_VAR,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
