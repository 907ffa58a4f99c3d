use std::net::SocketAddr;

use anyhow::Context;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "FOLIO_ADDR";
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    3000,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset or blank values keep the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.addr = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {ADDR_VAR} '{raw}'"))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.addr.ip().is_unspecified());
    }

    #[test]
    fn test_addr_override() {
        let config =
            ServerConfig::from_lookup(|_| Some("127.0.0.1:8081".to_string())).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8081".parse().unwrap());

        let blank = ServerConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(blank, ServerConfig::default());
    }

    #[test]
    fn test_bad_addr_names_variable() {
        let err = ServerConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert!(err.to_string().contains(ADDR_VAR));
    }
}
