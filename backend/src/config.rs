use std::net::IpAddr;

use log::warn;

const HOST_VAR: &str = "ASSET_ADMIN_HOST";
const PORT_VAR: &str = "ASSET_ADMIN_PORT";
const OPEN_BROWSER_VAR: &str = "ASSET_ADMIN_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`. Invalid values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            match host.parse::<IpAddr>() {
                Ok(_) => config.host = host,
                Err(_) if host == "localhost" => config.host = host,
                Err(_) => warn!("Ignoring {HOST_VAR}={host:?}: not an IP address"),
            }
        }

        if let Some(port) = lookup(PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(port) if port != 0 => config.port = port,
                _ => warn!("Ignoring {PORT_VAR}={port:?}: not a valid port"),
            }
        }

        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.open_browser = true,
                "0" | "false" | "no" | "off" | "" => config.open_browser = false,
                _ => warn!("Ignoring {OPEN_BROWSER_VAR}={flag:?}: expected true or false"),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
